//! Chord Flashcards Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod chords;
pub mod config;
pub mod server;

// Re-export commonly used types for convenience
pub use chords::{ChordGenerator, FlatMap, Settings, Toggle};
pub use server::{run_server, RequestsLoggingLevel};
