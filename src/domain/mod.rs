//! Domain layer for the chat relay.
//!
//! Holds the room entity, validated value objects, the send-capability
//! wrapper, and the seam to the external joke collaborator. Independent of
//! wire DTOs and transport concerns.

pub mod error;
pub mod joke;
pub mod room;
pub mod value_object;

pub use error::{JokeError, ValueObjectError};
pub use joke::JokeFetcher;
pub use room::{Outbox, Room, SessionId};
pub use value_object::{RoomName, UserName};
