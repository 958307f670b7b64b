use crate::library::Library;

/// Results of the background library load, delivered to the UI loop over
/// the app's flume channel.
#[derive(Debug, Clone)]
pub enum Event {
    LibraryLoaded(Library),
    LoadFailed(String),
}
