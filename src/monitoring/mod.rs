//! Frontend monitoring
//!
//! Provides:
//! - Structured logging through `tracing`
//! - Backend call tracking with running latency statistics

pub mod analytics;
pub mod logger;

pub use analytics::Analytics;
pub use logger::Logger;

/// Initialize frontend monitoring. Call once from `main` before launching.
pub fn init() {
    if let Err(e) = dioxus::logger::init(dioxus::logger::tracing::Level::INFO) {
        tracing::debug!("logger already installed: {}", e);
    }
    Logger::init();
    Analytics::init();
}

/// Log an event
#[macro_export]
macro_rules! log_event {
    ($event:expr) => {
        $crate::monitoring::logger::Logger::log($event)
    };
}

/// Log an error
#[macro_export]
macro_rules! log_error {
    ($msg:expr) => {
        $crate::monitoring::logger::Logger::error($msg)
    };
}

/// Track an API call
#[macro_export]
macro_rules! track_api_call {
    ($method:expr, $endpoint:expr, $duration_ms:expr, $status:expr) => {
        $crate::monitoring::analytics::Analytics::track_api_call($method, $endpoint, $duration_ms, $status)
    };
}
