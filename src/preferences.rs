//! Dark mode preference: read once at startup, written on every toggle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::ChatConfig;
use crate::error::PreferenceError;

pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn flipped(self) -> Self {
        Self::from_dark(!self.is_dark())
    }
}

/// Somewhere a boolean survives a page reload.
pub trait PreferenceStore {
    fn read_flag(&self, key: &str) -> Option<bool>;
    fn write_flag(&self, key: &str, value: bool) -> Result<(), PreferenceError>;
}

/// Whatever renders the theme; in the browser, the `<html>` element.
pub trait ThemeSurface {
    fn apply(&self, mode: ThemeMode);
}

#[derive(Debug, Clone)]
pub struct LocalStoragePreferences {
    storage: web_sys::Storage,
}

impl LocalStoragePreferences {
    pub fn open() -> Result<Self, PreferenceError> {
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(PreferenceError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn read_flag(&self, key: &str) -> Option<bool> {
        self.storage
            .get_item(key)
            .ok()
            .flatten()
            .map(|value| value == "true")
    }

    fn write_flag(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.storage
            .set_item(key, if value { "true" } else { "false" })
            .map_err(|e| PreferenceError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Used when `localStorage` is blocked; lives as long as the page.
#[derive(Debug, Default)]
pub struct InMemoryPreferences {
    values: RefCell<HashMap<String, bool>>,
}

impl PreferenceStore for InMemoryPreferences {
    fn read_flag(&self, key: &str) -> Option<bool> {
        self.values.borrow().get(key).copied()
    }

    fn write_flag(&self, key: &str, value: bool) -> Result<(), PreferenceError> {
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeSurface for DocumentRoot {
    fn apply(&self, mode: ThemeMode) {
        let Some(html) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        else {
            warn!("no document element, theme not applied");
            return;
        };

        let class_list = html.class_list();
        let result = if mode.is_dark() {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if let Err(e) = result {
            warn!("failed to update root class list: {:?}", e);
        }
    }
}

/// Settings service shared through context.
pub struct ThemeSettings {
    mode: ThemeMode,
    key: String,
    store: Rc<dyn PreferenceStore>,
    surface: Rc<dyn ThemeSurface>,
}

impl ThemeSettings {
    /// Reads the stored flag and applies it right away.
    pub fn load(
        key: impl Into<String>,
        store: Rc<dyn PreferenceStore>,
        surface: Rc<dyn ThemeSurface>,
    ) -> Self {
        let key = key.into();
        let mode = ThemeMode::from_dark(store.read_flag(&key).unwrap_or(false));
        surface.apply(mode);
        debug!(dark = mode.is_dark(), "theme loaded");
        Self {
            mode,
            key,
            store,
            surface,
        }
    }

    pub fn browser(config: &ChatConfig) -> Self {
        let store: Rc<dyn PreferenceStore> = match LocalStoragePreferences::open() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                warn!("{}, keeping theme in memory", e);
                Rc::new(InMemoryPreferences::default())
            }
        };
        Self::load(config.dark_mode_key.clone(), store, Rc::new(DocumentRoot))
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip, persist, apply. A failed write is logged; the page still
    /// switches.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        if let Err(e) = self.store.write_flag(&self.key, self.mode.is_dark()) {
            warn!("{}", e);
        }
        self.surface.apply(self.mode);
        self.mode
    }
}
