use dioxus::prelude::*;

use crate::preferences::ThemeSettings;

#[component]
pub fn DarkModeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeSettings>>();
    let is_dark = theme.read().is_dark();

    rsx! {
        button {
            class: "btn btn-ghost btn-circle btn-sm shrink-0 text-legal-primary",
            title: if is_dark { "Mode clair" } else { "Mode sombre" },
            onclick: move |_| {
                let mode = theme.write().toggle();
                tracing::debug!(dark = mode.is_dark(), "theme toggled");
            },
            if is_dark {
                "☀️"
            } else {
                "🌙"
            }
        }
    }
}
