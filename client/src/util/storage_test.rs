use super::*;

#[test]
fn memory_store_set_then_get() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "abc").unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("nope");
    assert!(store.is_empty());
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let view = store.clone();
    store.set(USER_KEY, "{}").unwrap();
    assert_eq!(view.get(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn clear_session_keys_leaves_unrelated_entries() {
    let store = MemoryStore::new();
    for key in SESSION_KEYS {
        store.set(key, "x").unwrap();
    }
    store.set("theme", "dark").unwrap();

    clear_session_keys(&store);

    for key in SESSION_KEYS {
        assert!(store.get(key).is_none(), "{key} should be cleared");
    }
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_unavailable_outside_browser() {
    assert_eq!(BrowserStore::open().unwrap_err(), StorageError::Unavailable);
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "token".to_owned() };
    assert_eq!(err.to_string(), "storage write failed for key token");
}

#[test]
fn touches_session_on_clear_and_session_keys() {
    assert!(touches_session(None));
    for key in SESSION_KEYS {
        assert!(touches_session(Some(key)));
    }
}

#[test]
fn touches_session_ignores_unrelated_keys() {
    assert!(!touches_session(Some("theme")));
    assert!(!touches_session(Some("")));
}
