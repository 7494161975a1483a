pub mod api;
pub mod app;
pub mod chat;
pub mod components;
pub mod config;
pub mod error;
pub mod monitoring;
pub mod pages;
pub mod preferences;

pub use api::{ChatBackend, ChatRequest, ChatResponse, HttpChatBackend};
pub use chat::ChatState;
pub use config::ChatConfig;
pub use error::{ChatError, PreferenceError, SendRejected};
