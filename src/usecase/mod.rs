//! UseCase layer.
//!
//! Implements the per-connection business logic. Called by the UI layer,
//! operates on the domain layer.

pub mod error;
pub mod session;

pub use error::SessionError;
pub use session::ChatSession;
