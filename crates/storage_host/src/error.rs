//! Error taxonomy shared by storage hosts and the façade operations.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Failures raised while reading, mutating, or clearing a storage area.
pub enum StorageError {
    /// The execution context has no storage host.
    #[error("storage host unavailable")]
    NoHost,
    /// A value could not be converted to JSON text.
    #[error("failed to serialize value: {0}")]
    Serialize(String),
    /// Stored text is not valid JSON or does not fit the requested type.
    #[error("failed to parse stored value: {0}")]
    Parse(String),
    /// A field-mode operation targeted a record that is not a JSON object.
    #[error("record at `{key}` is not a JSON object")]
    NotAnObject {
        /// Key of the offending record.
        key: String,
    },
    /// A bounded in-memory host refused a write that would exceed its quota.
    #[error("storage quota exceeded while writing `{key}`")]
    QuotaExceeded {
        /// Key whose write was rejected.
        key: String,
    },
    /// The host rejected the operation.
    #[error("{0}")]
    Host(String),
}

/// Serializes `value` to JSON text.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] when `value` cannot be represented as JSON.
pub fn to_json_text<T: Serialize + ?Sized>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Converts `value` to a JSON tree.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] when `value` cannot be represented as JSON.
pub fn to_json_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, StorageError> {
    serde_json::to_value(value).map_err(|e| StorageError::Serialize(e.to_string()))
}

/// Parses stored JSON text.
///
/// # Errors
///
/// Returns [`StorageError::Parse`] when `raw` is not valid JSON.
pub fn parse_json_text(raw: &str) -> Result<Value, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Parse(e.to_string()))
}

/// Deserializes a JSON tree into `T`.
///
/// # Errors
///
/// Returns [`StorageError::Parse`] when `value` does not fit `T`.
pub fn from_json_value<T: DeserializeOwned>(value: Value) -> Result<T, StorageError> {
    serde_json::from_value(value).map_err(|e| StorageError::Parse(e.to_string()))
}
