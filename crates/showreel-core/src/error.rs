//! Error types for Showreel

use thiserror::Error;

/// Main error type for Showreel operations
#[derive(Error, Debug)]
pub enum ShowreelError {
    /// A card's video list is not a JSON array of strings
    #[error("Malformed playlist: {0}")]
    MalformedPlaylist(#[source] serde_json::Error),

    /// A card declared a video list with no entries
    #[error("Playlist has no videos")]
    EmptyPlaylist,

    /// The page configuration block could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[source] serde_json::Error),

    /// An element required by a controller is absent from the document
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A host DOM call was rejected
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Result type alias using ShowreelError
pub type ShowreelResult<T> = Result<T, ShowreelError>;
