//! Presentational pieces of the chat page. They hold no chat state of their
//! own; everything comes in through props and goes back out through handlers.

pub mod chat_input;
pub mod conversation_history;
pub mod dark_mode_toggle;
pub mod example_questions;
pub mod header;
pub mod message_bubble;
pub mod message_list;

pub use chat_input::ChatInput;
pub use conversation_history::ConversationHistory;
pub use example_questions::ExampleQuestions;
pub use header::Header;
pub use message_list::MessageList;
