use serde::Deserialize;
use std::fmt;

use crate::constants::CHAT_PATH_PREFIX;

/// Opaque chat identifier as rendered by the server.
///
/// No validation happens client-side: the value is interpolated verbatim into
/// both the delete endpoint and the `/chat/{id}` reference path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChatId(String);

impl ChatId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the chat page, e.g. `/chat/65f1c0`.
    pub fn chat_path(&self) -> String {
        format!("{}{}", CHAT_PATH_PREFIX, self.0)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ChatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ChatId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// What the server answered to a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteResponse {
    /// The fetch `ok` flag (status in 200..=299)
    pub ok: bool,
    pub status: u16,
    pub body: String,
}

// Failure body sent by the server, e.g. `{"error": "chat not found"}`
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

impl DeleteResponse {
    /// The server's explanation for a failed delete, when the body carries one.
    pub fn server_reason(&self) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(&self.body)
            .ok()
            .map(|body| body.error)
    }
}

/// Result of a delete attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The server deleted the chat.  `item_removed` is false when no matching
    /// row was on the page; `redirected` is true when the open chat was the
    /// one deleted and the page was sent home.
    Deleted { item_removed: bool, redirected: bool },
    /// A request for the same chat is still outstanding, nothing was sent.
    AlreadyPending,
}
