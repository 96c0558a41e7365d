//! Convenience layer over a browser's persistent key-value storage.
//!
//! [`LocalStore`] offers get/set/remove/clear with optional single-field addressing (a record is
//! treated as a JSON object and one property of it is read or written), optional logging, and a
//! synchronous change broadcast so other parts of an application can react to storage mutations.
//! Failures never escape: mutators return `false`, reads return `None`, and the cause goes to the
//! injected [`StorageLogger`].
//!
//! The free functions operate on a thread-local default store whose storage area is picked at
//! compile time (`localStorage` by default, see the `host-memory` and `host-absent` features). In
//! the browser its change events are also dispatched on `window` as `local-storage-change`.
//!
//! # Example
//!
//! ```rust
//! use local_store::{LocalStore, MemoryStorageArea, NoopLogger};
//! use serde_json::json;
//!
//! let store = LocalStore::new(MemoryStorageArea::default(), NoopLogger);
//! store.changes().subscribe(|event| println!("{} {}", event.action.as_str(), event.key));
//!
//! assert!(store.set_item("prefs", None, &json!({ "theme": "dark" }), false));
//! assert!(store.set_item("prefs", Some("lang"), "en", false));
//! assert_eq!(
//!     store.get_value("prefs", None),
//!     Some(json!({ "theme": "dark", "lang": "en" }))
//! );
//!
//! assert!(store.remove_item("prefs", Some("theme"), false));
//! assert_eq!(store.get_item::<String>("prefs", Some("lang")), Some("en".to_string()));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod host_adapters;
mod logger;
mod store;

use serde::{de::DeserializeOwned, Serialize};

pub use host_adapters::local_store;
pub use logger::ConsoleLogger;
pub use storage_host::{
    AbsentStorageArea, ChangeBus, ListenerId, LogEntry, MemoryLogger, MemoryStorageArea,
    NoopLogger, StorageAction, StorageArea, StorageChangeEvent, StorageError, StorageLogger,
    LOCAL_STORAGE_CHANGE_EVENT,
};
pub use storage_host_web::{
    host_strategy_name, selected_host_strategy, HostStrategy, StorageAreaAdapter,
    WebStorageArea, WebStorageKind, WindowEventDispatcher,
};
pub use store::LocalStore;

/// Stores `value` at `key` (or one field of it) in the default store.
///
/// Returns `false` when there is no storage host or the write fails.
pub fn set_item<T: Serialize + ?Sized>(
    key: &str,
    field: Option<&str>,
    value: &T,
    log: bool,
) -> bool {
    local_store().set_item(key, field, value, log)
}

/// Reads the record at `key` (or one field of it) from the default store.
pub fn get_item<T: DeserializeOwned>(key: &str, field: Option<&str>) -> Option<T> {
    local_store().get_item(key, field)
}

/// Deletes the record at `key` (or one field of it) from the default store.
///
/// Returns `false` when there is no storage host or the write fails.
pub fn remove_item(key: &str, field: Option<&str>, log: bool) -> bool {
    local_store().remove_item(key, field, log)
}

/// Erases every record in the default store's area. Broadcasts no change event.
pub fn clear_storage(log: bool) -> bool {
    local_store().clear_storage(log)
}

/// Subscribes to change events of the default store.
pub fn subscribe(listener: impl Fn(&StorageChangeEvent) + 'static) -> ListenerId {
    local_store().changes().subscribe(listener)
}

/// Removes a listener added with [`subscribe`].
pub fn unsubscribe(id: ListenerId) -> bool {
    local_store().changes().unsubscribe(id)
}
