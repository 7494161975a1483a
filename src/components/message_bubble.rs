use dioxus::prelude::*;

use crate::chat::Message;

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let is_user = message.is_user();
    let row_class = if is_user {
        "flex items-start gap-3 flex-row-reverse"
    } else {
        "flex items-start gap-3"
    };
    let avatar_class = if is_user {
        "flex h-10 w-10 shrink-0 items-center justify-center rounded-full text-sm font-semibold bg-legal-accent text-legal-accent-foreground"
    } else {
        "flex h-10 w-10 shrink-0 items-center justify-center rounded-full text-sm font-semibold bg-legal-primary text-white"
    };
    let bubble_class = if is_user {
        "max-w-[80%] break-words rounded-2xl rounded-tr-sm px-4 py-3 shadow-sm bg-legal-accent text-legal-accent-foreground"
    } else {
        "max-w-[80%] break-words rounded-2xl rounded-tl-sm px-4 py-3 shadow-sm bg-legal-surface text-legal-text"
    };

    rsx! {
        div { class: "{row_class}",
            div { class: "{avatar_class}",
                if is_user { "U" } else { "⚖️" }
            }
            div { class: "{bubble_class}",
                p { class: "whitespace-pre-wrap break-words text-sm leading-relaxed", "{message.text}" }
                span { class: "mt-1.5 block text-xs opacity-60", "{message.time_label()}" }
            }
        }
    }
}
