use std::fs::File;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "dohatui.log";

/// Logs go to a file; stdout belongs to the terminal UI. Filtered by
/// `RUST_LOG`, defaulting to `info`.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = log_directory();
    std::fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join(LOG_FILE))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();
    Ok(())
}

fn log_directory() -> PathBuf {
    ProjectDirs::from("com", "dohatui", "dohatui")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".dohatui"))
}
