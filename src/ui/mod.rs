//! UI layer: the WebSocket/HTTP host around the chat core.

mod handler;
mod runner;
mod signal;
pub mod state;

pub use runner::{app, run, run_with_state};
