use dioxus::prelude::*;
use std::rc::Rc;

use crate::chat::Message;
use crate::components::message_bubble::MessageBubble;

#[component]
pub fn MessageList(messages: ReadOnlySignal<Vec<Message>>, busy: ReadOnlySignal<bool>) -> Element {
    let mut end_anchor = use_signal(|| Option::<Rc<MountedData>>::None);

    // Keep the newest message (or the typing indicator) in view
    use_effect(move || {
        let _ = messages.read().len();
        let _ = busy();
        if let Some(anchor) = end_anchor() {
            spawn(async move {
                if let Err(e) = anchor.scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("scroll to newest message failed: {:?}", e);
                }
            });
        }
    });

    if messages.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "space-y-4 overflow-y-auto",
            for message in messages() {
                MessageBubble { key: "{message.id}", message: message.clone() }
            }
            if busy() {
                div { class: "flex items-start gap-3",
                    div { class: "flex h-10 w-10 shrink-0 items-center justify-center rounded-full bg-legal-primary text-white",
                        "IA"
                    }
                    div { class: "flex items-center gap-2 rounded-2xl rounded-tl-sm bg-legal-surface px-4 py-3 shadow-sm",
                        span { class: "loading loading-spinner loading-xs text-legal-primary" }
                        span { class: "text-sm text-legal-muted", "Le chatbot écrit…" }
                    }
                }
            }
            div { onmounted: move |evt| end_anchor.set(Some(evt.data())) }
        }
    }
}
