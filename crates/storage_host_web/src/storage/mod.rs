//! Browser storage-area adapters.

pub mod web_storage;
