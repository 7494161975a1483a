use dioxus::prelude::*;

use crate::components::dark_mode_toggle::DarkModeToggle;

#[component]
pub fn Header(sidebar_open: bool, on_toggle_sidebar: EventHandler<()>) -> Element {
    rsx! {
        header { class: "border-b border-legal-border bg-legal-surface/50 backdrop-blur-sm",
            div { class: "container mx-auto flex items-center gap-2 px-3 py-3 sm:gap-3 sm:px-4 sm:py-4",

                // Mobile menu button, the sidebar is static on large screens
                button {
                    class: "btn btn-ghost btn-square btn-sm lg:hidden",
                    onclick: move |_| on_toggle_sidebar.call(()),
                    if sidebar_open { "✕" } else { "☰" }
                }

                div { class: "flex h-8 w-8 items-center justify-center rounded-lg bg-legal-primary text-white sm:h-10 sm:w-10",
                    "⚖️"
                }
                div { class: "flex-1 min-w-0",
                    h1 { class: "truncate text-base font-semibold text-legal-text sm:text-lg",
                        "Assistant Juridique IA"
                    }
                    p { class: "hidden text-sm text-legal-muted sm:block",
                        "Votre conseiller juridique intelligent"
                    }
                }

                DarkModeToggle {}
            }
        }
    }
}
