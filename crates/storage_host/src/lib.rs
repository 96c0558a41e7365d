//! Typed host contracts for synchronous key-value storage areas.
//!
//! This crate is the API-first boundary between the `local_store` façade and whatever storage host
//! the current build runs on. It exposes the [`StorageArea`] trait with in-memory and absent (no
//! host) implementations, the change-event model and its observer registry, the logger
//! collaborator contract, and the shared error taxonomy. Browser adapters live in
//! `storage_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod events;
pub mod logging;
pub mod storage;

pub use error::{from_json_value, parse_json_text, to_json_text, to_json_value, StorageError};
pub use events::bus::{ChangeBus, ListenerId};
pub use events::{StorageAction, StorageChangeEvent, LOCAL_STORAGE_CHANGE_EVENT};
pub use logging::{LogEntry, MemoryLogger, NoopLogger, StorageLogger};
pub use storage::area::{AbsentStorageArea, MemoryStorageArea, StorageArea};
