//! Shared application state.

use std::sync::Arc;

use crate::domain::JokeFetcher;
use crate::infrastructure::RoomRegistry;

/// State handed to every handler: the room registry and the joke
/// collaborator, both explicitly owned here rather than process globals.
pub struct AppState {
    pub registry: Arc<RoomRegistry>,
    pub jokes: Arc<dyn JokeFetcher>,
}

impl AppState {
    pub fn new(jokes: Arc<dyn JokeFetcher>) -> Self {
        Self {
            registry: Arc::new(RoomRegistry::new()),
            jokes,
        }
    }
}
