use dioxus::prelude::*;
use std::rc::Rc;

use crate::api::ChatBackend;
use crate::chat::example_questions::panel_heading;
use crate::chat::{ChatState, ConversationId};
use crate::components::{ChatInput, ConversationHistory, ExampleQuestions, Header, MessageList};
use crate::config::ChatConfig;
use crate::monitoring::Analytics;

#[component]
pub fn Home() -> Element {
    let config = use_context::<ChatConfig>();
    let backend = use_context::<Rc<dyn ChatBackend>>();
    let mut chat = use_signal(|| ChatState::new(&config));

    use_hook(|| Analytics::track_component_mount("Home"));

    let send_message = use_callback(move |text: String| {
        let attempt = chat.write().begin_send(&text);
        let pending = match attempt {
            Ok(pending) => pending,
            Err(rejected) => {
                tracing::debug!("send skipped: {}", rejected);
                return;
            }
        };

        let backend = Rc::clone(&backend);
        spawn(async move {
            let outcome = backend.ask(&pending.question).await;
            chat.write().complete_send(pending, outcome);
        });
    });

    let state = chat.read();
    let summaries = state.summaries();
    let current = state.current_id();
    let messages = state.visible_messages().to_vec();
    let busy = state.is_busy();
    let sidebar_open = state.sidebar_open();
    let show_examples = state.examples_visible();
    drop(state);

    let aside_class = if sidebar_open {
        "fixed inset-y-0 left-0 z-50 w-64 translate-x-0 transform transition-transform duration-300 md:w-72 lg:static lg:translate-x-0"
    } else {
        "fixed inset-y-0 left-0 z-50 w-64 -translate-x-full transform transition-transform duration-300 md:w-72 lg:static lg:translate-x-0"
    };

    rsx! {
        div { class: "flex min-h-screen bg-legal-background",
            aside { class: "{aside_class}",
                ConversationHistory {
                    conversations: summaries,
                    current: current,
                    on_select: move |id: ConversationId| {
                        chat.write().select_conversation(id);
                    },
                    on_new: move |_| {
                        let id = chat.write().create_new_conversation();
                        crate::log_event!(&format!("New conversation {}", id));
                    },
                    on_delete: move |id: ConversationId| {
                        chat.write().delete_conversation(id);
                    },
                }
            }

            if sidebar_open {
                div {
                    class: "fixed inset-0 z-40 bg-black/50 lg:hidden",
                    onclick: move |_| chat.write().close_sidebar(),
                }
            }

            div { class: "flex min-h-screen flex-1 flex-col",
                Header {
                    sidebar_open: sidebar_open,
                    on_toggle_sidebar: move |_| chat.write().toggle_sidebar(),
                }

                div { class: "flex flex-1 flex-col overflow-hidden",
                    div { class: "container mx-auto flex max-w-4xl flex-1 flex-col px-3 py-4 sm:px-4 sm:py-6",

                        // Legal disclaimer
                        div { class: "card mb-4 border border-legal-warning/20 bg-legal-warning/5 p-3 sm:mb-6 sm:p-4",
                            p { class: "text-xs text-legal-text/80 sm:text-sm",
                                "⚖️ "
                                strong { "Avertissement :" }
                                " Les réponses fournies ne remplacent pas un avis juridique professionnel. Consultez toujours un avocat qualifié pour des conseils juridiques spécifiques à votre situation."
                            }
                        }

                        if show_examples {
                            div { class: "mb-4 sm:mb-6",
                                h2 { class: "mb-3 text-center text-sm font-medium text-legal-muted sm:mb-4 sm:text-base",
                                    {panel_heading(!messages.is_empty())}
                                }
                                ExampleQuestions { on_select: move |question: String| send_message.call(question) }
                            }
                        }

                        if !messages.is_empty() {
                            div { class: "mb-4 flex-1 overflow-hidden sm:mb-6",
                                MessageList { messages: messages.clone(), busy: busy }
                            }
                        }

                        ChatInput {
                            disabled: busy,
                            on_send: move |text: String| send_message.call(text),
                        }
                    }
                }
            }
        }
    }
}
