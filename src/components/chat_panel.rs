//! Chat panel displaying the session transcript and composing new messages.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::config::use_chat_config;
use crate::hooks::use_chat;
use crate::state::chat::ChatMessage;

/// Build the message to append for `input`, or `None` when it is blank.
///
/// The text is kept verbatim; only whitespace-only input is refused.
pub fn compose_message(owner: &str, input: &str) -> Option<ChatMessage> {
    if input.trim().is_empty() {
        return None;
    }
    Some(ChatMessage::new(owner, input))
}

/// CSS class for one transcript entry: the reader's own messages are
/// right-aligned, everyone else's left.
pub fn entry_class(message: &ChatMessage, local_owner: &str) -> &'static str {
    if message.owner == local_owner {
        "transcript__entry transcript__entry--own"
    } else {
        "transcript__entry transcript__entry--other"
    }
}

/// Chat panel showing message history and an input for appending messages.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = use_chat();
    let config = use_chat_config();
    let local_owner = StoredValue::new(config.local_owner);
    let placeholder = config.placeholder;
    let empty_text = config.empty_text;

    let draft = RwSignal::new(String::new());

    let submit = move || {
        let Some(message) = local_owner.with_value(|owner| compose_message(owner, &draft.get())) else {
            return;
        };
        chat.append_chat(message);
        draft.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            submit();
        }
    };

    let blank = move || draft.get().trim().is_empty();

    view! {
        <section class="transcript">
            {move || {
                let log = chat.chat.get();
                if log.is_empty() {
                    let empty_text = empty_text.clone();
                    return view! { <p class="transcript__empty">{empty_text}</p> }.into_any();
                }

                let entries = local_owner.with_value(|me| {
                    log.iter()
                        .map(|message| (entry_class(message, me), message.owner.clone(), message.content.clone()))
                        .collect::<Vec<_>>()
                });

                view! {
                    <ol class="transcript__log">
                        {entries
                            .into_iter()
                            .map(|(class, owner, content)| {
                                view! {
                                    <li class=class>
                                        <strong class="transcript__owner">{owner}</strong>
                                        <p class="transcript__content">{content}</p>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ol>
                }
                    .into_any()
            }}

            <form class="transcript__composer" on:submit=on_submit>
                <textarea
                    class="transcript__draft"
                    rows="2"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button type="submit" class="transcript__send" disabled=blank>
                    "Send"
                </button>
            </form>
        </section>
    }
}
