use dioxus::prelude::*;
use wasm_bindgen::JsCast;

use crate::chat::composer::{fit_height, is_submit_key, Draft};
use crate::config::ChatConfig;

const COMPOSER_ID: &str = "chat-composer";

fn composer_element() -> Option<web_sys::HtmlTextAreaElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(COMPOSER_ID)?
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .ok()
}

/// Grow the textarea to its content, up to `max_height`, then let it scroll.
fn resize_composer(max_height: i32) {
    let Some(textarea) = composer_element() else {
        return;
    };
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let height = fit_height(textarea.scroll_height(), max_height);
    let _ = style.set_property("height", &format!("{}px", height));
}

fn reset_composer_height() {
    if let Some(textarea) = composer_element() {
        let _ = textarea.style().set_property("height", "auto");
    }
}

#[component]
pub fn ChatInput(disabled: bool, on_send: EventHandler<String>) -> Element {
    let config = use_context::<ChatConfig>();
    let max_height = config.composer_max_height_px;
    let mut draft = use_signal(Draft::default);

    let mut submit = move || {
        if let Some(text) = draft.write().submit(disabled) {
            reset_composer_height();
            on_send.call(text);
        }
    };

    let on_keydown = move |evt: KeyboardEvent| {
        if is_submit_key(evt.key() == Key::Enter, evt.modifiers().shift()) {
            evt.prevent_default();
            submit();
        }
    };

    rsx! {
        div { class: "border-t border-legal-border bg-legal-surface/50 p-4 backdrop-blur-sm",
            div { class: "flex gap-2",
                textarea {
                    id: COMPOSER_ID,
                    class: "textarea textarea-bordered flex-1 min-h-[60px] resize-none overflow-y-auto bg-base-100 text-legal-text placeholder:text-legal-muted",
                    max_height: "{max_height}px",
                    rows: "1",
                    placeholder: "Posez votre question juridique...",
                    value: "{draft.read().text()}",
                    disabled: disabled,
                    oninput: move |evt: FormEvent| {
                        draft.write().set(evt.value());
                        resize_composer(max_height);
                    },
                    onkeydown: on_keydown,
                }
                button {
                    class: "btn h-[60px] w-[60px] shrink-0 bg-legal-primary text-white hover:bg-legal-primary/90",
                    disabled: disabled || draft.read().is_blank(),
                    onclick: move |_| submit(),
                    "➤"
                    span { class: "sr-only", "Envoyer le message" }
                }
            }
            p { class: "mt-2 text-xs text-legal-muted",
                "Appuyez sur Entrée pour envoyer, Maj+Entrée pour une nouvelle ligne"
            }
        }
    }
}
