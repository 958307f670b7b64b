use std::time::{Duration, Instant};

use crate::library::Library;

/// How long the freshly rendered doha stays in the accent style.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Loading,
    Ready(Library),
    /// Terminal state. The fallback message stays up until quit.
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub phase: Phase,
    pub highlight_until: Option<Instant>,
}

impl UiState {
    pub fn library_mut(&mut self) -> Option<&mut Library> {
        match &mut self.phase {
            Phase::Ready(library) => Some(library),
            _ => None,
        }
    }

    /// Reseats the highlight deadline. Never cancelled; a pending
    /// deadline is simply overwritten by the next trigger.
    pub fn start_highlight(&mut self) {
        self.highlight_until = Some(Instant::now() + HIGHLIGHT_DURATION);
    }

    pub fn highlight_active(&self) -> bool {
        self.highlight_until
            .is_some_and(|deadline| Instant::now() < deadline)
    }
}
