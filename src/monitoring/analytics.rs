//! Frontend analytics tracking
//!
//! Tracks backend calls and component lifecycle events.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Once;

static INIT: Once = Once::new();

pub const MAX_API_CALLS: usize = 100;

thread_local! {
    static CALLS: RefCell<VecDeque<ApiCall>> = RefCell::new(VecDeque::with_capacity(MAX_API_CALLS));
}

#[derive(Debug, Clone)]
pub struct ApiCall {
    pub endpoint: String,
    pub method: String,
    /// 0 when the request never got a response.
    pub status: u16,
    pub duration_ms: f64,
    pub timestamp: String,
}

impl ApiCall {
    pub fn is_error(&self) -> bool {
        self.status == 0 || self.status >= 400
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApiStatistics {
    pub api_calls: usize,
    pub errors: usize,
    pub mean_latency_ms: f64,
}

pub struct Analytics;

impl Analytics {
    pub fn init() {
        INIT.call_once(|| {
            crate::monitoring::logger::Logger::log_info("Analytics initialized");
        });
    }

    /// Track an API call
    ///
    /// ```rust,ignore
    /// Analytics::track_api_call("POST", "/chat", 812.4, 200);
    /// ```
    pub fn track_api_call(method: &str, endpoint: &str, duration_ms: f64, status: u16) {
        let call = ApiCall {
            endpoint: endpoint.to_string(),
            method: method.to_string(),
            status,
            duration_ms,
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
        };

        tracing::info!(
            method = %call.method,
            endpoint = %call.endpoint,
            status = call.status,
            duration_ms = call.duration_ms,
            at = %call.timestamp,
            "API call"
        );

        Self::store_api_call(call);

        let stats = Self::statistics();
        tracing::debug!(
            api_calls = stats.api_calls,
            errors = stats.errors,
            mean_latency_ms = stats.mean_latency_ms,
            "API statistics"
        );
    }

    pub fn track_component_mount(component: &str) {
        tracing::debug!(component, "mount");
    }

    fn store_api_call(call: ApiCall) {
        CALLS.with(|calls| {
            let mut calls = calls.borrow_mut();
            if calls.len() == MAX_API_CALLS {
                calls.pop_front();
            }
            calls.push_back(call);
        });
    }

    pub fn statistics() -> ApiStatistics {
        CALLS.with(|calls| {
            let calls = calls.borrow();
            let total: f64 = calls.iter().map(|c| c.duration_ms).sum();
            ApiStatistics {
                api_calls: calls.len(),
                errors: calls.iter().filter(|c| c.is_error()).count(),
                mean_latency_ms: if calls.is_empty() {
                    0.0
                } else {
                    total / calls.len() as f64
                },
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reset() {
        CALLS.with(|calls| calls.borrow_mut().clear());
    }

    #[test]
    fn statistics_count_failures() {
        reset();
        Analytics::track_api_call("POST", "/chat", 100.0, 200);
        Analytics::track_api_call("POST", "/chat", 300.0, 500);
        Analytics::track_api_call("POST", "/chat", 20.0, 0);

        let stats = Analytics::statistics();
        assert_eq!(stats.api_calls, 3);
        assert_eq!(stats.errors, 2);
        assert!((stats.mean_latency_ms - 140.0).abs() < f64::EPSILON);
    }

    #[test]
    fn buffer_keeps_latest_calls() {
        reset();
        for _ in 0..(MAX_API_CALLS + 10) {
            Analytics::track_api_call("POST", "/chat", 10.0, 200);
        }
        assert_eq!(Analytics::statistics().api_calls, MAX_API_CALLS);
    }
}
