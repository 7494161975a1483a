use crate::app::Route;
use dioxus::prelude::*;

#[component]
pub fn PageNotFound(#[props(default = vec![])] segments: Vec<String>) -> Element {
    rsx! {
        div { class: "p-8 text-center",
            h1 { class: "text-3xl font-bold text-red-600 dark:text-red-400",
                "404 – Page introuvable"
            }
            p { class: "mt-2 text-legal-muted",
                "Chemin demandé : /{segments.join(\"/\")}"
            }
            Link {
                to: Route::Home {},
                class: "mt-4 inline-block btn bg-legal-primary text-white",
                "Retour à l'assistant"
            }
        }
    }
}
