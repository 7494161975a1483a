use juris_chat::chat::conversation::{DEFAULT_TITLE, EMPTY_PREVIEW};
use juris_chat::{ChatResponse, ChatState};

fn exchange(state: &mut ChatState, question: &str, reply: &str) {
    let pending = state.begin_send(question).unwrap();
    state.complete_send(
        pending,
        Ok(ChatResponse {
            answer: Some(reply.to_string()),
        }),
    );
}

#[test]
fn new_conversation_is_empty_with_placeholder() {
    let mut state = ChatState::default();
    exchange(&mut state, "Ancienne question", "Ancienne réponse");

    let id = state.create_new_conversation();

    assert_eq!(state.current_id(), Some(id));
    assert!(state.visible_messages().is_empty());
    let summary = &state.summaries()[0];
    assert_eq!(summary.id, id);
    assert_eq!(summary.title, DEFAULT_TITLE);
    assert_eq!(summary.last_message, EMPTY_PREVIEW);
}

#[test]
fn selecting_restores_messages_in_order() {
    let mut state = ChatState::default();
    exchange(&mut state, "Question A1", "Réponse A1");
    exchange(&mut state, "Question A2", "Réponse A2");
    let first = state.current_id().unwrap();

    state.create_new_conversation();
    exchange(&mut state, "Question B", "Réponse B");

    assert!(state.select_conversation(first));
    let texts: Vec<_> = state.visible_messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Question A1", "Réponse A1", "Question A2", "Réponse A2"]);
}

#[test]
fn deleting_current_clears_selection_and_view() {
    let mut state = ChatState::default();
    let older = state.create_new_conversation();
    exchange(&mut state, "Ancienne", "Réponse");
    let current = state.create_new_conversation();
    exchange(&mut state, "Récente", "Réponse");

    assert!(state.delete_conversation(current));

    assert!(state.current_id().is_none());
    assert!(state.visible_messages().is_empty());
    // No automatic fallback to the remaining conversation
    assert_eq!(state.conversations().len(), 1);
    assert_eq!(state.conversations()[0].id, older);
}

#[test]
fn deleting_other_conversation_keeps_view() {
    let mut state = ChatState::default();
    let other = state.create_new_conversation();
    exchange(&mut state, "Autre", "Réponse autre");
    let current = state.create_new_conversation();
    exchange(&mut state, "Courante", "Réponse courante");
    let before = state.visible_messages().to_vec();

    assert!(state.delete_conversation(other));

    assert_eq!(state.current_id(), Some(current));
    assert_eq!(state.visible_messages(), before.as_slice());
}

#[test]
fn deleting_unknown_id_is_harmless() {
    let mut state = ChatState::default();
    exchange(&mut state, "Question", "Réponse");
    let current = state.current_id().unwrap();

    assert!(!state.delete_conversation(juris_chat::chat::EntryId(current.0 + 1_000)));
    assert_eq!(state.current_id(), Some(current));
    assert_eq!(state.visible_messages().len(), 2);
}

#[test]
fn selection_closes_mobile_sidebar() {
    let mut state = ChatState::default();
    let id = state.create_new_conversation();
    state.toggle_sidebar();

    state.select_conversation(id);
    assert!(!state.sidebar_open());

    state.toggle_sidebar();
    state.close_sidebar();
    assert!(!state.sidebar_open());
}

#[test]
fn long_questions_are_truncated_in_title() {
    let mut state = ChatState::default();
    let question = "Quelles sont les conditions de validité d'un contrat de bail commercial en Tunisie ?";
    exchange(&mut state, question, "Réponse");

    let title = &state.summaries()[0].title;
    let expected: String = question.chars().take(50).collect::<String>() + "...";
    assert_eq!(title, &expected);
}
