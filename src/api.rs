use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ChatConfig, CHAT_PATH};
use crate::error::{ChatError, ChatResult};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChatRequest {
    pub question: String,
}

/// `answer` is optional on purpose: a 200 without it is not an error.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
pub struct ChatResponse {
    pub answer: Option<String>,
}

impl ChatResponse {
    /// Only a string `answer` on a JSON object counts. Any other valid JSON
    /// decodes to no answer; invalid JSON is a decode failure.
    pub fn from_body(body: &str) -> ChatResult<Self> {
        let value: Value = serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
        let answer = value
            .as_object()
            .and_then(|object| object.get("answer"))
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(Self { answer })
    }
}

/// Turns a finished HTTP exchange into the backend outcome. Anything outside
/// 2xx is a failure regardless of the body.
pub fn read_reply(status: u16, body: &str) -> ChatResult<ChatResponse> {
    if !(200..300).contains(&status) {
        return Err(ChatError::Status(status));
    }
    ChatResponse::from_body(body)
}

/// The inference backend. Futures are not `Send` because the browser
/// fetch handles live on the single wasm thread.
#[async_trait(?Send)]
pub trait ChatBackend {
    async fn ask(&self, question: &str) -> ChatResult<ChatResponse>;
}

/// `POST {base}/chat` through the browser fetch API.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    chat_url: String,
}

impl HttpChatBackend {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            chat_url: config.chat_url(),
        }
    }

    async fn post_question(&self, question: &str) -> ChatResult<ChatResponse> {
        let payload = ChatRequest {
            question: question.to_string(),
        };
        let body = serde_json::to_string(&payload).map_err(|e| ChatError::Encode(e.to_string()))?;

        let response = gloo_net::http::Request::post(&self.chat_url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ChatError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;

        let status = response.status();
        if !response.ok() {
            return Err(ChatError::Status(status));
        }

        let body = response.text().await.map_err(|e| ChatError::Decode(e.to_string()))?;
        read_reply(status, &body)
    }
}

#[async_trait(?Send)]
impl ChatBackend for HttpChatBackend {
    async fn ask(&self, question: &str) -> ChatResult<ChatResponse> {
        let started = chrono::Utc::now();
        let result = self.post_question(question).await;
        let elapsed_ms = (chrono::Utc::now() - started).num_microseconds().unwrap_or(0) as f64 / 1000.0;

        let status = match &result {
            Ok(_) => 200,
            Err(e) => e.status_code(),
        };
        crate::track_api_call!("POST", CHAT_PATH, elapsed_ms, status);

        result
    }
}
