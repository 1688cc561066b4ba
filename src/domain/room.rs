//! The room entity: live membership and the broadcast path.
//!
//! A `Room` owns its member table directly, including each member's send
//! capability, so a broadcast is a single pass over the table. Rooms are
//! created by the registry and live for the rest of the process; a room with
//! zero members stays valid and addressable.

use std::collections::HashMap;

use tokio::sync::{Mutex, mpsc::UnboundedSender};
use uuid::Uuid;

use super::value_object::{RoomName, UserName};
use crate::common::time::unix_timestamp_millis;

/// Identifier of one connection's session, unique for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random session id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Best-effort send capability for one connected client.
///
/// Wraps the unbounded channel owned by the transport layer. Delivery is
/// fire-and-forget by documented policy: a failed send (the connection's
/// forwarding task is gone) is discarded, never surfaced to the caller, so a
/// dead member cannot abort a broadcast to the rest of the room.
#[derive(Debug, Clone)]
pub struct Outbox {
    tx: UnboundedSender<String>,
}

impl Outbox {
    pub fn new(tx: UnboundedSender<String>) -> Self {
        Self { tx }
    }

    /// Send a serialized payload to the client behind this outbox.
    pub fn send(&self, payload: &str) {
        // Deliberately discarded: best-effort delivery.
        let _ = self.tx.send(payload.to_owned());
    }
}

/// One joined member of a room.
#[derive(Debug, Clone)]
struct Member {
    name: UserName,
    outbox: Outbox,
    joined_at: i64,
}

/// A chat room with its current members.
#[derive(Debug)]
pub struct Room {
    name: RoomName,
    created_at: i64,
    members: Mutex<HashMap<SessionId, Member>>,
}

impl Room {
    /// Create a new empty room.
    pub fn new(name: RoomName) -> Self {
        Self {
            name,
            created_at: unix_timestamp_millis(),
            members: Mutex::new(HashMap::new()),
        }
    }

    pub fn name(&self) -> &RoomName {
        &self.name
    }

    /// Unix timestamp (milliseconds) of room creation.
    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    /// Add a member to the room.
    ///
    /// Keyed by session id, so a duplicate join for the same session cannot
    /// produce double delivery; the existing entry is kept and `false` is
    /// returned.
    pub async fn join(&self, id: SessionId, name: UserName, outbox: Outbox) -> bool {
        let mut members = self.members.lock().await;
        if members.contains_key(&id) {
            return false;
        }
        members.insert(
            id,
            Member {
                name,
                outbox,
                joined_at: unix_timestamp_millis(),
            },
        );
        true
    }

    /// Remove a member from the room. No-op if the session never joined.
    pub async fn leave(&self, id: SessionId) -> bool {
        self.members.lock().await.remove(&id).is_some()
    }

    /// Deliver an already-serialized payload to every current member.
    ///
    /// Order across members is unspecified. Per-member failures are isolated
    /// inside [`Outbox::send`].
    pub async fn broadcast(&self, payload: &str) {
        let members = self.members.lock().await;
        for member in members.values() {
            member.outbox.send(payload);
        }
    }

    /// Deliver a payload to every member whose display name matches exactly.
    ///
    /// Silent no-op when nobody matches.
    pub async fn send_to_named(&self, recipient: &str, payload: &str) {
        let members = self.members.lock().await;
        for member in members.values() {
            if member.name.as_str() == recipient {
                member.outbox.send(payload);
            }
        }
    }

    /// Display names of all current members, in unspecified order.
    pub async fn member_names(&self) -> Vec<String> {
        let members = self.members.lock().await;
        members
            .values()
            .map(|m| m.name.as_str().to_string())
            .collect()
    }

    /// Number of current members.
    pub async fn len(&self) -> usize {
        self.members.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.lock().await.is_empty()
    }

    /// Unix timestamp (milliseconds) at which the given session joined.
    pub async fn joined_at(&self, id: SessionId) -> Option<i64> {
        self.members.lock().await.get(&id).map(|m| m.joined_at)
    }
}
