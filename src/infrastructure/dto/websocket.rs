//! WebSocket wire messages.
//!
//! Inbound text is parsed into [`ClientMessage`], a tagged enum, so dispatch
//! is an exhaustive match and adding a message type is a compile-time concern.
//! Parsing distinguishes malformed payloads from payloads whose `type` is
//! simply unrecognized; both are reported upward, never swallowed.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Message types the dispatcher recognizes.
const KNOWN_TYPES: &[&str] = &["join", "chat", "joke", "members", "priv"];

/// Errors from parsing an inbound wire message.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The payload is not valid JSON or is missing a required field
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload is well-formed but its `type` is not recognized
    #[error("unknown message type: {0}")]
    UnknownType(String),
}

/// A structured inbound message from a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Set a display name and enter the room's member set
    Join { name: String },
    /// Broadcast a chat line to the whole room
    Chat { text: String },
    /// Request a joke for the room
    Joke,
    /// Ask for the room's member list (reply goes to the requester only)
    Members,
    /// Private message; `text` carries `priv <recipient> <message...>`
    Priv { text: String },
}

impl ClientMessage {
    /// Parse raw inbound text into a structured message.
    ///
    /// # Errors
    ///
    /// [`ParseError::Malformed`] for invalid JSON or missing fields,
    /// [`ParseError::UnknownType`] for a well-formed payload with an
    /// unrecognized `type` discriminant.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(raw)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned);
        match serde_json::from_value::<Self>(value) {
            Ok(msg) => Ok(msg),
            Err(err) => match kind {
                Some(kind) if !KNOWN_TYPES.contains(&kind.as_str()) => {
                    Err(ParseError::UnknownType(kind))
                }
                _ => Err(ParseError::Malformed(err)),
            },
        }
    }
}

/// A structured outbound message to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    /// System note
    Note { text: String },
    /// Chat line attributed to a sender
    Chat { name: String, text: String },
}

impl ServerMessage {
    pub fn note(text: impl Into<String>) -> Self {
        Self::Note { text: text.into() }
    }

    pub fn chat(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Chat {
            name: name.into(),
            text: text.into(),
        }
    }

    /// Serialize to the wire format.
    ///
    /// Done once per broadcast; the identical string goes to every member.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("ServerMessage serialization cannot fail")
    }
}
