//! Error types for the immerse world engine.
//!
//! Routine "not possible" outcomes (a blocked move, a duplicate event, an
//! unknown NPC) are not errors. They are reported through `Option` and
//! `Cow::Borrowed` return values on [`crate::WorldState`]. Only faults in the
//! upstream input surface here.

use thiserror::Error;

/// Top-level error type for world engine operations.
#[derive(Error, Debug)]
pub enum WorldError {
    /// The environment description has no locations, so there is nowhere to
    /// place the learner.
    #[error("Environment has no locations: cannot choose a starting location")]
    NoLocations,

    /// The environment description could not be parsed.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, WorldError>;
