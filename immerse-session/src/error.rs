//! Error types for the session driver.

use immerse_core::WorldError;
use thiserror::Error;

/// Errors a [`crate::Session`] can report.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The world could not be built or loaded.
    #[error("World error: {0}")]
    World(#[from] WorldError),

    /// `undo` was called with an empty history.
    #[error("Nothing to undo")]
    NothingToUndo,
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, SessionError>;
