use leptos::prelude::{Owner, provide_context};

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_values() {
    let cfg = ChatConfig::default();
    assert_eq!(cfg.local_owner, DEFAULT_LOCAL_OWNER);
    assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
    assert_eq!(cfg.empty_text, DEFAULT_EMPTY_TEXT);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_is_default() {
    let cfg = ChatConfig::from_json("{}").unwrap();
    assert_eq!(cfg, ChatConfig::default());
}

#[test]
fn from_json_partial_overrides_only_given_keys() {
    let cfg = ChatConfig::from_json(r#"{"local_owner":"alice"}"#).unwrap();
    assert_eq!(cfg.local_owner, "alice");
    assert_eq!(cfg.placeholder, DEFAULT_PLACEHOLDER);
    assert_eq!(cfg.empty_text, DEFAULT_EMPTY_TEXT);
}

#[test]
fn from_json_accepts_empty_owner() {
    let cfg = ChatConfig::from_json(r#"{"local_owner":""}"#).unwrap();
    assert_eq!(cfg.local_owner, "");
}

#[test]
fn from_json_malformed_errors() {
    let err = ChatConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ChatError::ConfigParse(_)));
    assert!(err.to_string().contains("config parse failed"));
}

#[test]
fn from_json_wrong_type_errors() {
    let err = ChatConfig::from_json(r#"{"local_owner":42}"#).unwrap_err();
    assert!(matches!(err, ChatError::ConfigParse(_)));
}

// =============================================================
// use_chat_config
// =============================================================

#[test]
fn use_chat_config_falls_back_to_default() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(use_chat_config(), ChatConfig::default());
    });
}

#[test]
fn use_chat_config_reads_provided_context() {
    let owner = Owner::new();
    owner.with(|| {
        let cfg = ChatConfig { local_owner: "alice".to_owned(), ..ChatConfig::default() };
        provide_context(cfg.clone());
        assert_eq!(use_chat_config(), cfg);
    });
}
