//! # chat-store
//!
//! Leptos client state for a chat transcript: an ordered, append-only list of
//! messages behind a reactive store hook.
//!
//! The store itself ([`store::ChatStore`]) is plain Rust and usable without a
//! reactive runtime. [`hooks`] bridges it into Leptos through a signal and
//! context so view components can read `chat` and call `append_chat` without
//! explicit wiring.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod state;
pub mod store;
pub mod util;

pub use config::ChatConfig;
pub use error::ChatError;
pub use hooks::{UseChat, provide_chat, provide_chat_store, use_chat};
pub use state::chat::{ChatLog, ChatMessage, ChatState};
pub use store::{ChatStore, SubscriptionId};

/// Browser entry point: installs logging and hydrates the server-rendered
/// body with [`app::App`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    util::logging::init();
    leptos::mount::hydrate_body(app::App);
}
