//! Frontend logging
//!
//! Leveled helpers over `tracing`; the dioxus logger routes them to the
//! browser console.

use std::sync::Once;

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Error,
}

pub struct Logger;

impl Logger {
    /// Initialize logging (call once at app startup)
    pub fn init() {
        INIT.call_once(|| {
            Self::log_info("Frontend monitoring initialized");
        });
    }

    pub fn log_info(msg: &str) {
        Self::log_with_level(LogLevel::Info, msg);
    }

    pub fn error(msg: &str) {
        Self::log_with_level(LogLevel::Error, msg);
    }

    pub fn log(msg: &str) {
        Self::log_info(msg);
    }

    fn log_with_level(level: LogLevel, msg: &str) {
        match level {
            LogLevel::Error => tracing::error!(timestamp = %Self::timestamp(), "{}", msg),
            LogLevel::Info => tracing::info!(timestamp = %Self::timestamp(), "{}", msg),
        }
    }

    fn timestamp() -> String {
        chrono::Local::now().format("%H:%M:%S%.3f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        Logger::init();
        Logger::init();
        Logger::error("Error sending message: Request failed");
    }

    #[test]
    fn timestamp_has_millisecond_precision() {
        let stamp = Logger::timestamp();
        assert_eq!(stamp.len(), "12:34:56.789".len());
        assert_eq!(stamp.as_bytes()[8], b'.');
    }
}
