use chrono::Local;
use tracing::{debug, info, warn};

use super::conversation::{Conversation, ConversationSummary};
use super::message::{ConversationId, IdClock, Message, MessageId, Sender};
use crate::api::ChatResponse;
use crate::config::ChatConfig;
use crate::error::{ChatResult, SendRejected};

/// Shown when the backend answered 200 but gave no usable `answer`.
pub const FALLBACK_ANSWER: &str = "Je suis désolé, je n'ai pas pu traiter votre demande.";

pub fn send_failed_notice(api_base_url: &str) -> String {
    format!(
        "Une erreur s'est produite. Veuillez vérifier que votre serveur backend est démarré sur {}",
        api_base_url
    )
}

/// Handed out by [`ChatState::begin_send`] and consumed by
/// [`ChatState::complete_send`]. Holding one means the state is busy.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSend {
    pub conversation: ConversationId,
    pub question: String,
}

/// All mutable chat state of the page.
///
/// The visible message sequence is a view of the current conversation, so
/// the two can never disagree. Conversations are kept most recent first.
#[derive(Debug, Clone)]
pub struct ChatState {
    conversations: Vec<Conversation>,
    current: Option<ConversationId>,
    busy: bool,
    show_examples: bool,
    sidebar_open: bool,
    ids: IdClock,
    title_max_chars: usize,
    failure_notice: String,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(&ChatConfig::default())
    }
}

impl ChatState {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            conversations: Vec::new(),
            current: None,
            busy: false,
            show_examples: true,
            sidebar_open: false,
            ids: IdClock::default(),
            title_max_chars: config.title_max_chars,
            failure_notice: send_failed_notice(&config.api_base_url),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The example panel is hidden while a reply is pending.
    pub fn examples_visible(&self) -> bool {
        self.show_examples && !self.busy
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn current_id(&self) -> Option<ConversationId> {
        self.current
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn conversation(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn current_conversation(&self) -> Option<&Conversation> {
        self.current.and_then(|id| self.conversation(id))
    }

    pub fn visible_messages(&self) -> &[Message] {
        self.current_conversation()
            .map(Conversation::messages)
            .unwrap_or(&[])
    }

    pub fn summaries(&self) -> Vec<ConversationSummary> {
        self.conversations
            .iter()
            .map(|c| c.summary(self.title_max_chars))
            .collect()
    }

    pub fn failure_notice(&self) -> &str {
        &self.failure_notice
    }

    pub fn create_new_conversation(&mut self) -> ConversationId {
        let now = Local::now();
        let id = self.ids.next(now);
        self.conversations.insert(0, Conversation::new(id, now));
        self.current = Some(id);
        self.sidebar_open = false;
        debug!(conversation = %id, "created conversation");
        id
    }

    /// Returns `false` and leaves everything untouched for an unknown id.
    pub fn select_conversation(&mut self, id: ConversationId) -> bool {
        if self.conversation(id).is_none() {
            debug!(conversation = %id, "select ignored, unknown conversation");
            return false;
        }
        self.current = Some(id);
        self.sidebar_open = false;
        true
    }

    /// Deleting the current conversation leaves nothing selected.
    pub fn delete_conversation(&mut self, id: ConversationId) -> bool {
        let before = self.conversations.len();
        self.conversations.retain(|c| c.id != id);
        let removed = self.conversations.len() != before;
        if removed && self.current == Some(id) {
            self.current = None;
        }
        if removed {
            debug!(conversation = %id, "deleted conversation");
        }
        removed
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    /// Guarded `idle -> busy` transition. On success the user message is
    /// already appended and the caller owns the only outstanding request.
    pub fn begin_send(&mut self, text: &str) -> Result<PendingSend, SendRejected> {
        let question = text.trim();
        if question.is_empty() {
            return Err(SendRejected::Empty);
        }
        if self.busy {
            warn!("send rejected, a reply is still pending");
            return Err(SendRejected::Busy);
        }

        self.show_examples = false;
        let conversation = match self.current {
            Some(id) => id,
            None => self.create_new_conversation(),
        };
        self.append(conversation, question.to_string(), Sender::User);
        self.busy = true;

        Ok(PendingSend {
            conversation,
            question: question.to_string(),
        })
    }

    /// `busy -> idle`. Appends the assistant reply (or the failure notice) to
    /// the conversation that asked, which may no longer be the current one.
    /// Returns `None` if that conversation was deleted in the meantime.
    pub fn complete_send(
        &mut self,
        pending: PendingSend,
        outcome: ChatResult<ChatResponse>,
    ) -> Option<MessageId> {
        let reply = match outcome {
            Ok(response) => response
                .answer
                .filter(|answer| !answer.trim().is_empty())
                .unwrap_or_else(|| FALLBACK_ANSWER.to_string()),
            Err(e) => {
                crate::log_error!(&format!("Error sending message: {}", e));
                self.failure_notice.clone()
            }
        };

        self.busy = false;
        self.show_examples = true;

        let appended = self.append(pending.conversation, reply, Sender::Assistant);
        if appended.is_none() {
            info!(conversation = %pending.conversation, "reply dropped, conversation was deleted");
        }
        appended
    }

    fn append(&mut self, conversation: ConversationId, text: String, sender: Sender) -> Option<MessageId> {
        let now = Local::now();
        let id = self.ids.next(now);
        let target = self.conversations.iter_mut().find(|c| c.id == conversation)?;
        target.push(Message {
            id,
            text,
            sender,
            timestamp: now,
        });
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;

    fn answered(text: &str) -> ChatResult<ChatResponse> {
        Ok(ChatResponse {
            answer: Some(text.to_string()),
        })
    }

    #[test]
    fn starts_idle_with_examples() {
        let state = ChatState::default();
        assert!(!state.is_busy());
        assert!(state.examples_visible());
        assert!(state.visible_messages().is_empty());
        assert!(state.current_id().is_none());
    }

    #[test]
    fn begin_send_appends_user_message_and_goes_busy() {
        let mut state = ChatState::default();
        let pending = state.begin_send("  Bonjour  ").unwrap();
        assert_eq!(pending.question, "Bonjour");
        assert!(state.is_busy());
        assert!(!state.examples_visible());
        assert_eq!(state.visible_messages().len(), 1);
        assert_eq!(state.visible_messages()[0].sender, Sender::User);
        assert_eq!(state.current_id(), Some(pending.conversation));
    }

    #[test]
    fn second_send_while_busy_is_rejected() {
        let mut state = ChatState::default();
        state.begin_send("Première").unwrap();
        assert_eq!(state.begin_send("Deuxième"), Err(SendRejected::Busy));
        assert_eq!(state.visible_messages().len(), 1);
    }

    #[test]
    fn blank_send_changes_nothing() {
        let mut state = ChatState::default();
        assert_eq!(state.begin_send(" \n\t "), Err(SendRejected::Empty));
        assert!(state.conversations().is_empty());
        assert!(!state.is_busy());
        assert!(state.examples_visible());
    }

    #[test]
    fn empty_answer_becomes_apology() {
        let mut state = ChatState::default();
        let pending = state.begin_send("Question").unwrap();
        state.complete_send(pending, answered("   "));
        assert_eq!(state.visible_messages()[1].text, FALLBACK_ANSWER);
    }

    #[test]
    fn failure_notice_names_backend_origin() {
        let config = ChatConfig::with_base_url(Some("http://10.1.1.1:8000"));
        let mut state = ChatState::new(&config);
        let pending = state.begin_send("Question").unwrap();
        state.complete_send(pending, Err(ChatError::Status(502)));
        let reply = &state.visible_messages()[1];
        assert_eq!(reply.sender, Sender::Assistant);
        assert!(reply.text.ends_with("http://10.1.1.1:8000"));
        assert!(!state.is_busy());
    }

    #[test]
    fn reply_lands_in_originating_conversation() {
        let mut state = ChatState::default();
        let pending = state.begin_send("Question A").unwrap();
        let other = state.create_new_conversation();

        state.complete_send(pending.clone(), answered("Réponse A"));

        assert_eq!(state.current_id(), Some(other));
        assert!(state.visible_messages().is_empty());
        let origin = state.conversation(pending.conversation).unwrap();
        assert_eq!(origin.messages().len(), 2);
        assert_eq!(origin.messages()[1].text, "Réponse A");
    }

    #[test]
    fn reply_for_deleted_conversation_is_dropped_but_clears_busy() {
        let mut state = ChatState::default();
        let pending = state.begin_send("Question").unwrap();
        state.delete_conversation(pending.conversation);

        assert_eq!(state.complete_send(pending, answered("Réponse")), None);
        assert!(!state.is_busy());
        assert!(state.examples_visible());
        assert!(state.conversations().is_empty());
    }

    #[test]
    fn new_conversations_go_first_and_close_sidebar() {
        let mut state = ChatState::default();
        let first = state.create_new_conversation();
        state.toggle_sidebar();
        assert!(state.sidebar_open());
        let second = state.create_new_conversation();

        assert!(!state.sidebar_open());
        let order: Vec<_> = state.conversations().iter().map(|c| c.id).collect();
        assert_eq!(order, vec![second, first]);
        assert_eq!(state.current_id(), Some(second));
    }

    #[test]
    fn selecting_unknown_id_is_a_no_op() {
        let mut state = ChatState::default();
        let id = state.create_new_conversation();
        state.toggle_sidebar();
        assert!(!state.select_conversation(crate::chat::EntryId(-1)));
        assert_eq!(state.current_id(), Some(id));
        assert!(state.sidebar_open());
    }
}
