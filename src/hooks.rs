//! Leptos hook exposing the session chat store to components.
//!
//! DESIGN
//! ======
//! `provide_chat` creates (or adopts) a [`ChatStore`] and mirrors its
//! transcript into an `RwSignal<ChatLog>`, so components that read
//! [`UseChat::chat`] re-render on append. The handle is provided as context;
//! any descendant reaches the same store through [`use_chat`]. Without a
//! provider, `use_chat` provides one at the root owner of the session.
//!
//! The store subscription is released when the providing owner is cleaned up,
//! which ends the session's store along with it.

#[cfg(test)]
#[path = "hooks_test.rs"]
mod hooks_test;

use std::fmt;

use leptos::prelude::*;

use crate::state::chat::{ChatLog, ChatMessage};
use crate::store::ChatStore;

/// Reactive chat handle: `chat` to read, `append_chat` to write.
#[derive(Clone, Copy)]
pub struct UseChat {
    /// Current transcript. Reading it inside a reactive scope tracks it.
    pub chat: ReadSignal<ChatLog>,
    store: StoredValue<ChatStore>,
}

impl UseChat {
    /// Append a message to the session transcript.
    pub fn append_chat(&self, message: ChatMessage) {
        self.store.with_value(|store| store.append_chat(message));
    }

    /// Current transcript without subscribing the caller.
    pub fn chat_untracked(&self) -> ChatLog {
        self.chat.get_untracked()
    }

    /// The underlying store, e.g. to register a non-reactive observer.
    pub fn store(&self) -> ChatStore {
        self.store.get_value()
    }
}

impl fmt::Debug for UseChat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UseChat").finish_non_exhaustive()
    }
}

/// Create a fresh session store and provide it to descendants.
pub fn provide_chat() -> UseChat {
    provide_chat_store(ChatStore::new())
}

/// Provide an existing store (e.g. seeded with server-rendered history).
pub fn provide_chat_store(store: ChatStore) -> UseChat {
    let chat = RwSignal::new(store.chat());

    let subscription = store.subscribe(move |log: &ChatLog| {
        // No-op once the owner has disposed the signal.
        let _ = chat.try_set(log.clone());
    });

    let cleanup_store = store.clone();
    on_cleanup(move || {
        cleanup_store.unsubscribe(subscription);
    });

    let handle = UseChat { chat: chat.read_only(), store: StoredValue::new(store) };
    provide_context(handle);
    handle
}

/// Session chat handle from context.
///
/// When no ancestor provided one, a store is created lazily at the root owner
/// of the reactive tree, so every component of the session (siblings
/// included) shares it and it outlives the component that first asked.
pub fn use_chat() -> UseChat {
    if let Some(chat) = use_context::<UseChat>() {
        return chat;
    }
    match Owner::current() {
        Some(owner) => session_root(owner).with(provide_chat),
        None => provide_chat(),
    }
}

fn session_root(mut owner: Owner) -> Owner {
    while let Some(parent) = owner.parent() {
        owner = parent;
    }
    owner
}
