use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const TITLE_MAX_CHARS: usize = 30;

/// Opaque identifier for sessions and messages.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// First `TITLE_MAX_CHARS` characters of the seed text. Counts chars, not
/// bytes, so multibyte titles are never split mid code point.
pub fn truncate_title(text: &str) -> String {
    text.chars().take(TITLE_MAX_CHARS).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Streaming,
    Complete,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

impl Message {
    /// User messages carry no status; they are complete at creation.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            role: Role::User,
            content: content.into(),
            image_url: None,
            status: None,
        }
    }

    /// Empty bot message inserted before the backend is contacted.
    pub fn bot_placeholder() -> Self {
        Self {
            id: new_id(),
            role: Role::Bot,
            content: String::new(),
            image_url: None,
            status: Some(MessageStatus::Streaming),
        }
    }
}

/// Partial update for a bot message. Fields left as `None` keep their
/// current value.
#[derive(Debug, Clone, Default)]
pub struct BotPatch {
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub status: Option<MessageStatus>,
}

impl BotPatch {
    /// Streaming update: overwrite the content, leave the status alone.
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            ..Self::default()
        }
    }

    /// Status-only update, used to close out a streamed reply.
    pub fn status(status: MessageStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Terminal update for the image path: reply text, optional image,
    /// status complete in one patch.
    pub fn complete(text: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            content: Some(text.into()),
            image_url,
            status: Some(MessageStatus::Complete),
        }
    }

    /// Terminal update for any failure.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            image_url: None,
            status: Some(MessageStatus::Error),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub messages: Vec<Message>,
}

impl Session {
    pub fn new(first_user_text: &str) -> Self {
        Self {
            id: new_id(),
            title: truncate_title(first_user_text),
            timestamp: Utc::now(),
            messages: Vec::new(),
        }
    }
}
