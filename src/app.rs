//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::config::ChatConfig;
use crate::hooks::provide_chat;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session: the chat store provided here lives as long as the page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ChatConfig::default());
    provide_chat();

    view! {
        <Stylesheet id="leptos" href="/pkg/chat-store.css"/>
        <Title text="Chat"/>

        <main class="chat-page">
            <ChatPanel/>
        </main>
    }
}
