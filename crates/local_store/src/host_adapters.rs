use storage_host_web::{
    selected_host_strategy, storage_area, HostStrategy, StorageAreaAdapter, WindowEventDispatcher,
};

use crate::{ConsoleLogger, LocalStore};

thread_local! {
    static DEFAULT_STORE: LocalStore<StorageAreaAdapter, ConsoleLogger> = build_default_store();
}

fn build_default_store() -> LocalStore<StorageAreaAdapter, ConsoleLogger> {
    let store = LocalStore::new(storage_area(), ConsoleLogger);
    if selected_host_strategy() == HostStrategy::Browser {
        WindowEventDispatcher.attach(store.changes());
    }
    store
}

/// Returns a handle to the thread-local default store.
///
/// Handles share the storage area and change bus, so listeners subscribed through one handle see
/// mutations made through any other.
pub fn local_store() -> LocalStore<StorageAreaAdapter, ConsoleLogger> {
    DEFAULT_STORE.with(|store| store.clone())
}
