// src/config.rs

/// Backend origin used when no build-time override is given.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const CHAT_PATH: &str = "/chat";
pub const DARK_MODE_KEY: &str = "darkMode";
pub const TITLE_MAX_CHARS: usize = 50;
pub const COMPOSER_MAX_HEIGHT_PX: i32 = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct ChatConfig {
    pub api_base_url: String,
    pub title_max_chars: usize,
    pub dark_mode_key: String,
    pub composer_max_height_px: i32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            title_max_chars: TITLE_MAX_CHARS,
            dark_mode_key: DARK_MODE_KEY.to_string(),
            composer_max_height_px: COMPOSER_MAX_HEIGHT_PX,
        }
    }
}

impl ChatConfig {
    /// The browser has no process environment, so overrides are baked in at
    /// build time: `CHAT_API_BASE_URL=http://10.0.0.2:8000 dx build`.
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("CHAT_API_BASE_URL"))
    }

    pub fn with_base_url(base_url: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Self {
            api_base_url,
            ..Self::default()
        }
    }

    pub fn chat_url(&self) -> String {
        format!("{}{}", self.api_base_url, CHAT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ChatConfig::default();
        assert_eq!(config.chat_url(), "http://localhost:8000/chat");
        assert_eq!(config.dark_mode_key, "darkMode");
        assert_eq!(config.title_max_chars, 50);
        assert_eq!(config.composer_max_height_px, 200);
    }

    #[test]
    fn override_strips_trailing_slash() {
        let config = ChatConfig::with_base_url(Some("https://juris.example.tn/api/"));
        assert_eq!(config.chat_url(), "https://juris.example.tn/api/chat");
    }

    #[test]
    fn blank_override_falls_back() {
        let config = ChatConfig::with_base_url(Some("   "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
