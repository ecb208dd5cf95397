#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// A single chat message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender identifier. Free-form; not validated.
    pub owner: String,
    /// Message text. May be empty.
    pub content: String,
}

impl ChatMessage {
    pub fn new(owner: impl Into<String>, content: impl Into<String>) -> Self {
        Self { owner: owner.into(), content: content.into() }
    }
}

/// Immutable snapshot of the chat transcript, oldest message first.
///
/// Appending never touches an existing log; it produces a new one. Holders of
/// an older log keep seeing exactly what they were handed, and observers can
/// detect change by identity with [`ChatLog::ptr_eq`].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<ChatMessage>", into = "Vec<ChatMessage>")]
pub struct ChatLog(Arc<[ChatMessage]>);

impl ChatLog {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::from(Vec::new()))
    }

    /// New log holding every message of `self` followed by `message`.
    #[must_use]
    pub fn appended(&self, message: ChatMessage) -> Self {
        let mut messages = Vec::with_capacity(self.0.len() + 1);
        messages.extend_from_slice(&self.0);
        messages.push(message);
        Self(messages.into())
    }

    /// True when both handles point at the same snapshot.
    #[must_use]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ChatMessage] {
        &self.0
    }

    /// Parse a transcript serialized as a JSON array of messages.
    pub fn from_json(raw: &str) -> Result<Self, ChatError> {
        serde_json::from_str(raw).map_err(|e| ChatError::TranscriptParse(e.to_string()))
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for ChatLog {
    type Target = [ChatMessage];

    fn deref(&self) -> &[ChatMessage] {
        &self.0
    }
}

impl PartialEq for ChatLog {
    fn eq(&self, other: &Self) -> bool {
        Self::ptr_eq(self, other) || self.0 == other.0
    }
}

impl Eq for ChatLog {}

impl From<Vec<ChatMessage>> for ChatLog {
    fn from(messages: Vec<ChatMessage>) -> Self {
        Self(messages.into())
    }
}

impl From<ChatLog> for Vec<ChatMessage> {
    fn from(log: ChatLog) -> Self {
        log.0.to_vec()
    }
}

impl FromIterator<ChatMessage> for ChatLog {
    fn from_iter<I: IntoIterator<Item = ChatMessage>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ChatLog {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Observable chat state: the current transcript.
///
/// Shared through [`crate::store::ChatStore`]; `append_chat` is the only
/// mutation and it swaps in a fresh [`ChatLog`] rather than editing the old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub chat: ChatLog,
}

impl ChatState {
    /// Start from an existing transcript, e.g. history rendered by the server.
    #[must_use]
    pub fn with_history(chat: ChatLog) -> Self {
        Self { chat }
    }

    pub fn append_chat(&mut self, message: ChatMessage) {
        self.chat = self.chat.appended(message);
    }
}
