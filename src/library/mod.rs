pub mod discovery;
pub mod loader;

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// One couplet as stored on disk. The JSON field names predate this
/// program: `english` holds the transliteration and `translation` the
/// meaning.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Doha {
    pub hindi: String,
    #[serde(rename = "english")]
    pub transliteration: String,
    #[serde(rename = "translation")]
    pub meaning: String,
}

#[derive(Error, Debug, Clone)]
pub enum LibraryError {
    #[error("poems directory unavailable: {0}")]
    Discovery(String),

    #[error("malformed manifest: {0}")]
    Manifest(String),

    #[error("no dohas could be loaded")]
    NothingLoaded,
}

/// All successfully loaded dohas, in discovery order, plus the index of
/// the one currently on screen. Append-only after load; the index is the
/// only thing that ever changes.
#[derive(Debug, Clone, Default)]
pub struct Library {
    dohas: Vec<Doha>,
    current: usize,
}

impl Library {
    pub fn new(dohas: Vec<Doha>) -> Self {
        Self { dohas, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.dohas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dohas.is_empty()
    }

    pub fn current(&self) -> Option<&Doha> {
        self.dohas.get(self.current)
    }

    pub fn dohas(&self) -> &[Doha] {
        &self.dohas
    }

    /// Reseats the selection uniformly over `[0, len)` and returns the
    /// selected doha. `None` on an empty library, with nothing changed.
    pub fn pick_random(&mut self, rng: &mut impl Rng) -> Option<&Doha> {
        if self.dohas.is_empty() {
            return None;
        }
        self.current = rng.random_range(0..self.dohas.len());
        self.dohas.get(self.current)
    }
}
