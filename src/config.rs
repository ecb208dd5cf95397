//! Chat panel configuration.
//!
//! Provided through Leptos context by the root component. Every field has a
//! default, so a partial JSON document (or none at all) is valid.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use leptos::prelude::use_context;
use serde::{Deserialize, Serialize};

use crate::error::ChatError;

pub const DEFAULT_LOCAL_OWNER: &str = "user";
pub const DEFAULT_PLACEHOLDER: &str = "Type a message...";
pub const DEFAULT_EMPTY_TEXT: &str = "No messages yet";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Owner recorded on messages composed in the chat panel.
    pub local_owner: String,
    /// Input placeholder text.
    pub placeholder: String,
    /// Shown in place of the transcript while it is empty.
    pub empty_text: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            local_owner: DEFAULT_LOCAL_OWNER.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
            empty_text: DEFAULT_EMPTY_TEXT.to_owned(),
        }
    }
}

impl ChatConfig {
    /// Parse a JSON object; missing keys take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ChatError> {
        serde_json::from_str(raw).map_err(|e| ChatError::ConfigParse(e.to_string()))
    }
}

/// Config provided by an ancestor, or the defaults when none was provided.
pub fn use_chat_config() -> ChatConfig {
    use_context::<ChatConfig>().unwrap_or_default()
}
