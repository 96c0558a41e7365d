//! Browser (`wasm32`) implementations of [`storage_host`] contracts.
//!
//! This crate is the concrete browser-side wiring layer: a [`storage_host::StorageArea`] over
//! `window.localStorage` / `window.sessionStorage`, a bridge that re-broadcasts change events as
//! DOM `CustomEvent`s on `window`, and the compile-time host-strategy selection used to pick an
//! area at startup. On non-`wasm32` targets the browser adapters report no host.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod events;
pub mod storage;

pub use adapters::{
    host_strategy_name, selected_host_strategy, storage_area, storage_area_for, HostStrategy,
    StorageAreaAdapter,
};
pub use events::WindowEventDispatcher;
pub use storage::web_storage::{WebStorageArea, WebStorageKind};
