//! Draft handling for the chat input, kept free of DOM types.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
}

impl Draft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Takes the trimmed draft out if it may be sent. A disabled composer
    /// keeps its draft.
    pub fn submit(&mut self, disabled: bool) -> Option<String> {
        if disabled || self.is_blank() {
            return None;
        }
        let text = self.text.trim().to_string();
        self.text.clear();
        Some(text)
    }
}

/// Enter submits, Shift+Enter falls through to the textarea as a newline.
pub fn is_submit_key(key_is_enter: bool, shift: bool) -> bool {
    key_is_enter && !shift
}

/// Height in pixels for the auto-growing textarea.
pub fn fit_height(scroll_height: i32, max_height: i32) -> i32 {
    scroll_height.clamp(0, max_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_trims_and_clears() {
        let mut draft = Draft::default();
        draft.set("  Quels sont mes droits ?\n");
        assert_eq!(draft.submit(false).as_deref(), Some("Quels sont mes droits ?"));
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn whitespace_draft_is_not_submitted() {
        let mut draft = Draft::default();
        draft.set(" \n  ");
        assert_eq!(draft.submit(false), None);
        assert_eq!(draft.text(), " \n  ");
    }

    #[test]
    fn disabled_composer_keeps_draft() {
        let mut draft = Draft::default();
        draft.set("En attente");
        assert_eq!(draft.submit(true), None);
        assert_eq!(draft.text(), "En attente");
    }

    #[test]
    fn shift_enter_does_not_submit() {
        assert!(is_submit_key(true, false));
        assert!(!is_submit_key(true, true));
        assert!(!is_submit_key(false, false));
    }

    #[test]
    fn height_is_capped() {
        assert_eq!(fit_height(64, 200), 64);
        assert_eq!(fit_height(480, 200), 200);
    }
}
