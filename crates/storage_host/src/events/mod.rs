//! Change-notification model for storage mutations.

pub mod bus;

use serde::{Deserialize, Serialize};

/// Name of the broadcast event announcing a storage mutation.
pub const LOCAL_STORAGE_CHANGE_EVENT: &str = "local-storage-change";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Kind of mutation carried by a [`StorageChangeEvent`].
pub enum StorageAction {
    /// A record or field was written.
    Added,
    /// A record or field was deleted.
    Removed,
}

impl StorageAction {
    /// Returns the stable wire token for this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Removed => "removed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Ephemeral payload broadcast after a successful set or remove.
pub struct StorageChangeEvent {
    /// Storage key affected by the mutation.
    pub key: String,
    /// Raw text stored at `key` after the mutation, `None` when the key is absent.
    pub value: Option<String>,
    /// Mutation kind.
    pub action: StorageAction,
}

impl StorageChangeEvent {
    /// Creates a change event.
    pub fn new(key: impl Into<String>, value: Option<String>, action: StorageAction) -> Self {
        Self {
            key: key.into(),
            value,
            action,
        }
    }
}
