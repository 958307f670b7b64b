use std::path::PathBuf;

use directories::ProjectDirs;

/// Where the poem files live. Resolution order: the first CLI argument,
/// a `dohas/` directory next to the working directory, then the platform
/// data directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub poems_dir: PathBuf,
}

impl Config {
    pub fn resolve() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    fn from_args(mut args: impl Iterator<Item = String>) -> Self {
        if let Some(dir) = args.next() {
            return Self {
                poems_dir: PathBuf::from(dir),
            };
        }

        let local = PathBuf::from("dohas");
        if local.is_dir() {
            return Self { poems_dir: local };
        }

        let poems_dir = ProjectDirs::from("com", "dohatui", "dohatui")
            .map(|dirs| dirs.data_dir().join("dohas"))
            .unwrap_or(local);
        Self { poems_dir }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_argument_wins() {
        let config = Config::from_args(["/tmp/my-poems".to_owned()].into_iter());
        assert_eq!(config.poems_dir, PathBuf::from("/tmp/my-poems"));
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let config =
            Config::from_args(["first".to_owned(), "second".to_owned()].into_iter());
        assert_eq!(config.poems_dir, PathBuf::from("first"));
    }
}
