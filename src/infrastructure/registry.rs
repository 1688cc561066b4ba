//! In-memory room registry.
//!
//! Lookup-or-create store mapping room names to live [`Room`] instances. The
//! registry is an explicitly owned object injected into every connection
//! handler through the application state; there is no process-global.
//!
//! Rooms are never removed, even when empty. That is a deliberate
//! simplification: the registry is bounded by the set of room names clients
//! ever mention, and an empty room must stay addressable.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Room, RoomName};

/// Process-wide mapping from room name to room, starting empty.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: Mutex<HashMap<RoomName, Arc<Room>>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the room for `name`, creating an empty one on first reference.
    ///
    /// Repeated calls for the same name return the same instance.
    pub async fn get(&self, name: &RoomName) -> Arc<Room> {
        let mut rooms = self.rooms.lock().await;
        rooms
            .entry(name.clone())
            .or_insert_with(|| Arc::new(Room::new(name.clone())))
            .clone()
    }

    /// Snapshot of all rooms, in unspecified order.
    pub async fn rooms(&self) -> Vec<Arc<Room>> {
        self.rooms.lock().await.values().cloned().collect()
    }

    /// Number of rooms ever referenced.
    pub async fn len(&self) -> usize {
        self.rooms.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rooms.lock().await.is_empty()
    }
}
