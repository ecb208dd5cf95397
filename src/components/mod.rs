//! View components consuming the chat hook.

pub mod chat_panel;
