use super::*;

// =============================================================
// compose_message
// =============================================================

#[test]
fn compose_message_stamps_owner() {
    let msg = compose_message("alice", "hello").unwrap();
    assert_eq!(msg, ChatMessage::new("alice", "hello"));
}

#[test]
fn compose_message_keeps_text_verbatim() {
    let msg = compose_message("alice", "  spaced out  ").unwrap();
    assert_eq!(msg.content, "  spaced out  ");
}

#[test]
fn compose_message_rejects_blank_input() {
    assert!(compose_message("alice", "").is_none());
    assert!(compose_message("alice", "   \n\t").is_none());
}

#[test]
fn compose_message_allows_empty_owner() {
    let msg = compose_message("", "hi").unwrap();
    assert_eq!(msg.owner, "");
}

// =============================================================
// entry_class
// =============================================================

#[test]
fn entry_class_marks_local_owner_as_own() {
    let msg = ChatMessage::new("alice", "hi");
    assert_eq!(entry_class(&msg, "alice"), "transcript__entry transcript__entry--own");
}

#[test]
fn entry_class_marks_other_owners() {
    let msg = ChatMessage::new("bot", "hi");
    assert_eq!(entry_class(&msg, "alice"), "transcript__entry transcript__entry--other");
}

#[test]
fn entry_class_empty_owner_matches_empty_local_owner() {
    let msg = ChatMessage::new("", "hi");
    assert_eq!(entry_class(&msg, ""), "transcript__entry transcript__entry--own");
    assert_eq!(entry_class(&msg, "user"), "transcript__entry transcript__entry--other");
}
