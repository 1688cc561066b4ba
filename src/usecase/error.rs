//! UseCase layer error definitions.

use thiserror::Error;

use crate::domain::ValueObjectError;
use crate::infrastructure::dto::websocket::ParseError;

/// Errors from dispatching one inbound message.
///
/// All variants are reported to the transport layer, which decides what to do
/// with the connection; the session never swallows them.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The inbound text could not be parsed, or its type is unrecognized
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The requested display name failed validation
    #[error("invalid display name: {0}")]
    InvalidName(#[from] ValueObjectError),

    /// A second join arrived on a session that already has a display name
    #[error("display name already set; a session joins once")]
    AlreadyJoined,

    /// A message other than join arrived before any join was processed
    #[error("no display name set; send a join message first")]
    NotJoined,

    /// A priv message whose text does not start with the fixed prefix
    #[error("private message text must start with \"priv \"")]
    BadPrivateFormat,
}
