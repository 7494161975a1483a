// src/error.rs

use thiserror::Error;

pub type ChatResult<T> = Result<T, ChatError>;

/// Everything that can go wrong between pressing send and reading `answer`.
/// All variants end up as the same notice in the conversation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChatError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP error: {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to serialize payload: {0}")]
    Encode(String),
}

impl ChatError {
    /// Status code reported to analytics; 0 when no response arrived.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Status(code) => *code,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("Client storage is unavailable")]
    Unavailable,

    #[error("Failed to write preference {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Why a send attempt was refused before any request went out.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SendRejected {
    #[error("Message is empty")]
    Empty,

    #[error("A reply is still pending")]
    Busy,
}
