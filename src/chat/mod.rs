//! Conversation model and the state machine behind the chat page.
//!
//! Nothing in here touches the DOM, so it runs under plain `cargo test`.

pub mod composer;
pub mod conversation;
pub mod example_questions;
pub mod message;
pub mod state;

pub use conversation::{derive_title, Conversation, ConversationSummary};
pub use example_questions::{ExampleQuestion, EXAMPLE_QUESTIONS};
pub use message::{ConversationId, EntryId, Message, MessageId, Sender};
pub use state::{ChatState, PendingSend, FALLBACK_ANSWER};
