use super::storage::SessionStore;
use crate::models::{BotPatch, Message, Session};
use colored::*;

/// In-memory session list, most-recent-first. Sole owner of conversation
/// state; every mutation is written through to the storage backend.
pub struct SessionHistory {
    sessions: Vec<Session>,
    store: Box<dyn SessionStore>,
    verbose: bool,
}

impl SessionHistory {
    pub fn load(store: Box<dyn SessionStore>, verbose: bool) -> Self {
        let sessions = store.load();
        Self {
            sessions,
            store,
            verbose,
        }
    }

    /// Create a session titled from the first user text and prepend it,
    /// keeping the list most-recent-first. Returns the new id.
    pub fn create_session(&mut self, first_user_text: &str) -> String {
        let session = Session::new(first_user_text);
        let id = session.id.clone();
        self.sessions.insert(0, session);
        self.persist();
        id
    }

    /// Append a user turn and its bot placeholder together. Unknown
    /// session ids are a no-op.
    pub fn append_turn(&mut self, session_id: &str, user: Message, bot: Message) {
        if let Some(session) = self.session_mut(session_id) {
            session.messages.push(user);
            session.messages.push(bot);
            self.persist();
        }
    }

    /// Apply a partial update to a bot message. No-op if the session or
    /// message is not found.
    pub fn update_bot_message(&mut self, session_id: &str, message_id: &str, patch: BotPatch) {
        let Some(session) = self.session_mut(session_id) else {
            return;
        };
        let Some(message) = session.messages.iter_mut().find(|m| m.id == message_id) else {
            return;
        };

        if let Some(content) = patch.content {
            message.content = content;
        }
        if let Some(image_url) = patch.image_url {
            message.image_url = Some(image_url);
        }
        if let Some(status) = patch.status {
            message.status = Some(status);
        }

        self.persist();
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Case-insensitive substring match on titles, store order preserved.
    pub fn search(&self, query: &str) -> Vec<&Session> {
        let needle = query.to_lowercase();
        self.sessions
            .iter()
            .filter(|s| s.title.to_lowercase().contains(&needle))
            .collect()
    }

    fn session_mut(&mut self, id: &str) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id == id)
    }

    /// A failed write leaves the in-memory list authoritative for the
    /// rest of the process.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.sessions) {
            if self.verbose {
                eprintln!(
                    "{}",
                    format!("[ivan] Warning: failed to save sessions: {}", e).dimmed()
                );
            }
        }
    }
}
