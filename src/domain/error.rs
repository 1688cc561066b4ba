//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to value object validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// RoomName validation error
    #[error("RoomName cannot be empty")]
    RoomNameEmpty,

    /// RoomName too long error
    #[error("RoomName cannot exceed {max} bytes (got {actual})")]
    RoomNameTooLong { max: usize, actual: usize },

    /// UserName validation error
    #[error("UserName cannot be empty")]
    UserNameEmpty,

    /// UserName too long error
    #[error("UserName cannot exceed {max} bytes (got {actual})")]
    UserNameTooLong { max: usize, actual: usize },

    /// UserName whitespace error
    #[error("UserName cannot contain whitespace (got: {0})")]
    UserNameContainsWhitespace(String),
}

/// Errors from the external joke collaborator
#[derive(Debug, Error)]
pub enum JokeError {
    /// The HTTP request failed or returned a non-success status
    #[error("joke request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The response parsed but carried no joke text
    #[error("joke response had no attachments")]
    EmptyResponse,
}
