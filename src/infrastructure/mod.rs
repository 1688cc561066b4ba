//! Infrastructure layer: in-memory stores, wire DTOs, and external clients.

pub mod dto;
pub mod joke;
pub mod registry;

pub use joke::DadJokeClient;
pub use registry::RoomRegistry;
