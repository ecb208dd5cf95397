//! Session chat store.
//!
//! DESIGN
//! ======
//! `ChatStore` is a cloneable handle to one shared [`ChatState`]. The only
//! mutation is [`ChatStore::append_chat`], which swaps in a new [`ChatLog`]
//! and then notifies observers synchronously, in subscription order.
//!
//! The UI runs on a single event loop, but Leptos' signal and context storage
//! require `Send + Sync`, so the state sits behind a `Mutex`. The lock is
//! released before observers run; an observer may append again without
//! deadlocking. A nested append notifies every observer with the newer log,
//! and the outer notification pass stops there, so no observer is handed a
//! log older than one it has already seen.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::state::chat::{ChatLog, ChatMessage, ChatState};

type Observer = Arc<dyn Fn(&ChatLog) + Send + Sync>;

/// Handle returned by [`ChatStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct StoreInner {
    state: ChatState,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
    /// Bumped on every append.
    version: u64,
}

/// Shared, observable chat transcript for one UI session.
#[derive(Clone, Default)]
pub struct ChatStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl ChatStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with an existing transcript.
    #[must_use]
    pub fn with_history(chat: ChatLog) -> Self {
        let inner = StoreInner { state: ChatState::with_history(chat), ..StoreInner::default() };
        Self { inner: Arc::new(Mutex::new(inner)) }
    }

    /// Current transcript. The returned log never changes afterwards.
    #[must_use]
    pub fn chat(&self) -> ChatLog {
        self.lock().state.chat.clone()
    }

    /// Append `message` to the transcript and notify every observer.
    pub fn append_chat(&self, message: ChatMessage) {
        let (chat, observers, version) = {
            let mut inner = self.lock();
            let owner = message.owner.clone();
            inner.state.append_chat(message);
            inner.version += 1;
            log::debug!("chat: appended message from {owner:?} ({} total)", inner.state.chat.len());
            let observers: Vec<Observer> = inner.observers.iter().map(|(_, f)| Arc::clone(f)).collect();
            (inner.state.chat.clone(), observers, inner.version)
        };

        for observer in &observers {
            // A re-entrant append already notified everyone with a newer log.
            if self.lock().version != version {
                log::trace!("chat: notification superseded by nested append");
                break;
            }
            observer(&chat);
        }
    }

    /// Register an observer called with the new transcript after each append.
    pub fn subscribe(&self, observer: impl Fn(&ChatLog) + Send + Sync + 'static) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.observers.push((id, Arc::new(observer)));
        log::trace!("chat: subscribed {id:?} ({} observers)", inner.observers.len());
        id
    }

    /// Remove an observer. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.observers.len();
        inner.observers.retain(|(sub, _)| *sub != id);
        let removed = inner.observers.len() != before;
        if removed {
            log::trace!("chat: unsubscribed {id:?} ({} observers)", inner.observers.len());
        }
        removed
    }

    /// Number of registered observers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.lock().observers.len()
    }

    /// True when both handles share one underlying store.
    #[must_use]
    pub fn same_store(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    // Critical sections never leave the state half-updated.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ChatStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ChatStore")
            .field("messages", &inner.state.chat.len())
            .field("observers", &inner.observers.len())
            .finish()
    }
}
