//! Per-connection message dispatch.
//!
//! A [`ChatSession`] wraps one client's send capability, tracks its display
//! name, and is bound to exactly one room for its entire lifetime. Inbound
//! raw text goes through a fallible parse into [`ClientMessage`] and is then
//! dispatched by exhaustive match, so every message type has exactly one
//! handler.

use std::sync::Arc;

use crate::domain::{JokeFetcher, Outbox, Room, SessionId, UserName};
use crate::infrastructure::dto::websocket::{ClientMessage, ServerMessage};

use super::error::SessionError;

/// Synthetic sender name used for joke broadcasts.
const JOKE_SENDER: &str = "Server";

/// Fixed prefix of the private-message text format.
const PRIV_PREFIX: &str = "priv ";

/// One client's chat session.
pub struct ChatSession {
    id: SessionId,
    name: Option<UserName>,
    room: Arc<Room>,
    outbox: Outbox,
    jokes: Arc<dyn JokeFetcher>,
}

impl ChatSession {
    /// Create a session bound to `room` for its whole lifetime.
    ///
    /// The display name stays unset until a join message is processed.
    pub fn new(room: Arc<Room>, outbox: Outbox, jokes: Arc<dyn JokeFetcher>) -> Self {
        let id = SessionId::generate();
        tracing::debug!("created chat session in room '{}'", room.name());
        Self {
            id,
            name: None,
            room,
            outbox,
            jokes,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    pub fn room(&self) -> &Arc<Room> {
        &self.room
    }

    /// Dispatch one inbound raw message.
    ///
    /// # Errors
    ///
    /// Parse failures, unknown message types, and state violations (duplicate
    /// join, pre-join traffic) are all returned to the caller; none of them
    /// mutate room state.
    pub async fn handle_message(&mut self, raw: &str) -> Result<(), SessionError> {
        match ClientMessage::parse(raw)? {
            ClientMessage::Join { name } => self.handle_join(name).await,
            ClientMessage::Chat { text } => self.handle_chat(text).await,
            ClientMessage::Joke => self.handle_joke().await,
            ClientMessage::Members => self.handle_members().await,
            ClientMessage::Priv { text } => self.handle_private(&text).await,
        }
    }

    /// Connection closed: leave the room, announce the exit.
    ///
    /// The transport layer calls this exactly once per session, whether or
    /// not a join was ever received.
    pub async fn handle_close(&mut self) {
        self.room.leave(self.id).await;
        let name = self.name.as_ref().map_or("unknown", UserName::as_str);
        let note = ServerMessage::note(format!("{} left {}.", name, self.room.name()));
        self.room.broadcast(&note.to_json()).await;
    }

    /// Set the display name, enter the member set, announce the join.
    async fn handle_join(&mut self, name: String) -> Result<(), SessionError> {
        if self.name.is_some() {
            return Err(SessionError::AlreadyJoined);
        }
        let name = UserName::new(name)?;
        self.room
            .join(self.id, name.clone(), self.outbox.clone())
            .await;
        self.name = Some(name.clone());

        let note = ServerMessage::note(format!("{} joined \"{}\".", name, self.room.name()));
        self.room.broadcast(&note.to_json()).await;
        Ok(())
    }

    /// Broadcast a chat line to the whole room.
    async fn handle_chat(&self, text: String) -> Result<(), SessionError> {
        let name = self.joined_name()?;
        let chat = ServerMessage::chat(name.as_str(), text);
        self.room.broadcast(&chat.to_json()).await;
        Ok(())
    }

    /// Announce the request now, fetch and broadcast the joke later.
    ///
    /// The spawned task holds the room by `Arc`, so the eventual broadcast
    /// targets whoever is in the room when the fetch completes, not when it
    /// was requested. A failed fetch is logged and produces nothing; no
    /// retry, no error back to the requester.
    async fn handle_joke(&self) -> Result<(), SessionError> {
        let name = self.joined_name()?;
        let note = ServerMessage::note(format!("{name} requested a joke."));
        self.room.broadcast(&note.to_json()).await;

        let room = Arc::clone(&self.room);
        let jokes = Arc::clone(&self.jokes);
        tokio::spawn(async move {
            match jokes.fetch_joke().await {
                Ok(text) => {
                    let chat = ServerMessage::chat(JOKE_SENDER, text);
                    room.broadcast(&chat.to_json()).await;
                }
                Err(err) => {
                    tracing::warn!("joke fetch failed, dropping request: {err}");
                }
            }
        });
        Ok(())
    }

    /// Send the member list to the requester only.
    async fn handle_members(&self) -> Result<(), SessionError> {
        self.joined_name()?;
        let mut names = self.room.member_names().await;
        names.sort();
        let note = ServerMessage::note(format!("In room: {}", names.join(", ")));
        self.outbox.send(&note.to_json());
        Ok(())
    }

    /// Deliver a private message to every member matching the recipient name,
    /// plus an echo back to the sender.
    ///
    /// `text` carries `priv <recipient> <message...>`; the body keeps its
    /// leading space. No member matching the recipient is a silent no-op; the
    /// sender still gets the echo.
    async fn handle_private(&self, text: &str) -> Result<(), SessionError> {
        let sender = self.joined_name()?;
        let rest = text
            .strip_prefix(PRIV_PREFIX)
            .ok_or(SessionError::BadPrivateFormat)?;
        let (recipient, body) = match rest.find(' ') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        let payload = ServerMessage::chat(format!("{sender} (private)"), body).to_json();
        self.room.send_to_named(recipient, &payload).await;
        self.outbox.send(&payload);
        Ok(())
    }

    fn joined_name(&self) -> Result<&UserName, SessionError> {
        self.name.as_ref().ok_or(SessionError::NotJoined)
    }
}
