//! banter — a minimal real-time chat relay.
//!
//! Clients connect over WebSocket, join named rooms, and exchange broadcast
//! or private text messages. Messages are fire-and-forget; there is no
//! persistence, authentication, or delivery guarantee.

pub mod common;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use ui::run;
