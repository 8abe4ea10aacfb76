use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("siteTheme"), None);
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    store.set("siteTheme", "light").expect("memory writes succeed");
    assert_eq!(store.get("siteTheme").as_deref(), Some("light"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_overwrites() {
    let mut store = MemoryStore::new();
    store.set("k", "a").expect("memory writes succeed");
    store.set("k", "b").expect("memory writes succeed");
    assert_eq!(store.get("k").as_deref(), Some("b"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_absent_key_is_ok() {
    let mut store = MemoryStore::new();
    assert!(store.remove("missing").is_ok());
    store.set("k", "v").expect("memory writes succeed");
    store.remove("k").expect("memory removals succeed");
    assert!(store.is_empty());
}

#[test]
fn store_error_messages_name_the_key() {
    let err = StoreError::Rejected { key: "siteTheme".to_owned(), reason: "quota".to_owned() };
    assert_eq!(err.to_string(), "storage rejected write for key siteTheme: quota");
    assert_eq!(StoreError::Unavailable.to_string(), "storage unavailable");
}
