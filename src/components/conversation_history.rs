use dioxus::prelude::*;

use crate::chat::{ConversationId, ConversationSummary};

#[component]
pub fn ConversationHistory(
    conversations: Vec<ConversationSummary>,
    current: Option<ConversationId>,
    on_select: EventHandler<ConversationId>,
    on_new: EventHandler<()>,
    on_delete: EventHandler<ConversationId>,
) -> Element {
    rsx! {
        div { class: "flex h-full flex-col border-r border-legal-border bg-legal-surface",
            div { class: "border-b border-legal-border p-2 sm:p-3",
                button {
                    class: "btn btn-sm w-full justify-start gap-2 bg-legal-primary text-xs text-white hover:bg-legal-primary/90 sm:text-sm",
                    onclick: move |_| on_new.call(()),
                    "＋ Nouvelle conversation"
                }
            }

            div { class: "flex-1 overflow-y-auto",
                div { class: "space-y-1 p-1 sm:p-2",
                    if conversations.is_empty() {
                        div { class: "px-2 py-6 text-center text-xs text-legal-muted sm:px-3 sm:py-8 sm:text-sm",
                            "Aucune conversation pour le moment"
                        }
                    }
                    for conversation in conversations.iter() {
                        ConversationRow {
                            key: "{conversation.id}",
                            is_current: current == Some(conversation.id),
                            conversation: conversation.clone(),
                            on_select: on_select,
                            on_delete: on_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConversationRow(
    conversation: ConversationSummary,
    is_current: bool,
    on_select: EventHandler<ConversationId>,
    on_delete: EventHandler<ConversationId>,
) -> Element {
    let id = conversation.id;
    let row_class = if is_current {
        "group relative flex cursor-pointer items-center gap-2 rounded-lg px-2 py-2 transition-colors bg-legal-accent hover:bg-legal-accent sm:gap-3 sm:px-3 sm:py-3"
    } else {
        "group relative flex cursor-pointer items-center gap-2 rounded-lg px-2 py-2 transition-colors hover:bg-legal-accent sm:gap-3 sm:px-3 sm:py-3"
    };

    rsx! {
        div {
            class: "{row_class}",
            onclick: move |_| on_select.call(id),
            span { class: "shrink-0 text-legal-primary", "💬" }
            div { class: "flex-1 overflow-hidden min-w-0",
                p { class: "truncate text-xs font-medium text-legal-text sm:text-sm", "{conversation.title}" }
                p { class: "truncate text-xs text-legal-muted", "{conversation.last_message}" }
            }
            button {
                class: "btn btn-ghost btn-xs shrink-0 text-error opacity-0 transition-opacity group-hover:opacity-100",
                title: "Supprimer",
                // Must not bubble up to the row's select handler
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_delete.call(id);
                },
                "🗑"
            }
        }
    }
}
