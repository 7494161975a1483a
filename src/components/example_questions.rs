use dioxus::prelude::*;

use crate::chat::EXAMPLE_QUESTIONS;

#[component]
pub fn ExampleQuestions(on_select: EventHandler<String>) -> Element {
    rsx! {
        div { class: "grid gap-2 sm:grid-cols-2 sm:gap-3",
            for example in EXAMPLE_QUESTIONS {
                button {
                    key: "{example.question}",
                    class: "group card card-compact cursor-pointer border border-legal-border bg-legal-surface text-left transition-all hover:border-legal-primary/40 hover:shadow-lg",
                    onclick: move |_| on_select.call(example.question.to_string()),
                    div { class: "flex w-full items-start gap-2 p-3 sm:gap-3 sm:p-4",
                        div { class: "flex h-8 w-8 shrink-0 items-center justify-center rounded-lg bg-legal-primary/10 group-hover:bg-legal-primary/20 sm:h-10 sm:w-10",
                            "{example.icon}"
                        }
                        div { class: "flex-1 space-y-1",
                            p { class: "whitespace-normal break-words text-xs font-medium text-legal-text sm:text-sm",
                                "{example.question}"
                            }
                            p { class: "hidden truncate text-xs text-legal-muted sm:block", "{example.category}" }
                        }
                    }
                }
            }
        }
    }
}
