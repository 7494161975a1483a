use crate::api::{ChatBackend, HttpChatBackend};
use crate::config::ChatConfig;
use crate::pages::{Home, PageNotFound};
use crate::preferences::ThemeSettings;
use dioxus::prelude::*;
use std::rc::Rc;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(ChatConfig::from_env);
    let backend_config = config.clone();
    use_context_provider(move || Rc::new(HttpChatBackend::new(&backend_config)) as Rc<dyn ChatBackend>);
    // Reads the stored flag and applies the root class before first paint
    use_context_provider(move || Signal::new(ThemeSettings::browser(&config)));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/styling/output.css") }

        Router::<Route> {}
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div {
            class: "min-h-screen transition-colors bg-legal-background text-legal-text",
            Outlet::<Route> {}
        }
    }
}
