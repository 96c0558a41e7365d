//! Synchronous key-value storage-area contracts and adapters.

use std::{cell::RefCell, collections::BTreeMap, rc::Rc};

use crate::error::StorageError;

/// Host service for a synchronous string key-value area (JSON stored as text per key).
///
/// Implementations mirror the browser `Storage` interface: each call completes before returning
/// and no call suspends.
pub trait StorageArea {
    /// Returns whether the execution context actually provides this storage host.
    ///
    /// Operations on an unavailable area are never attempted by the façade.
    fn is_available(&self) -> bool {
        true
    }

    /// Loads the raw text stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error when the host read fails.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores raw text under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the host rejects the write.
    fn set_raw(&self, key: &str, raw_json: &str) -> Result<(), StorageError>;

    /// Deletes `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the host delete fails.
    fn remove_raw(&self, key: &str) -> Result<(), StorageError>;

    /// Deletes every key in the area.
    ///
    /// # Errors
    ///
    /// Returns an error when the host clear fails.
    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: StorageArea + ?Sized> StorageArea for Rc<S> {
    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_raw(key)
    }

    fn set_raw(&self, key: &str, raw_json: &str) -> Result<(), StorageError> {
        (**self).set_raw(key, raw_json)
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_raw(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Storage area for execution contexts without a storage host (server-side, workers, tests).
pub struct AbsentStorageArea;

impl StorageArea for AbsentStorageArea {
    fn is_available(&self) -> bool {
        false
    }

    fn get_raw(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::NoHost)
    }

    fn set_raw(&self, _key: &str, _raw_json: &str) -> Result<(), StorageError> {
        Err(StorageError::NoHost)
    }

    fn remove_raw(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::NoHost)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::NoHost)
    }
}

#[derive(Debug, Default)]
struct MemoryArea {
    entries: BTreeMap<String, String>,
    quota_bytes: Option<usize>,
}

impl MemoryArea {
    fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory storage area keyed by string.
///
/// Clones share the same entries, so a clone handed to a store stays observable from tests.
pub struct MemoryStorageArea {
    inner: Rc<RefCell<MemoryArea>>,
}

impl MemoryStorageArea {
    /// Creates an area that rejects writes once keys plus values would exceed `max_bytes`.
    pub fn with_quota(max_bytes: usize) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryArea {
                entries: BTreeMap::new(),
                quota_bytes: Some(max_bytes),
            })),
        }
    }

    /// Returns the stored keys in lexical order.
    pub fn keys(&self) -> Vec<String> {
        self.inner.borrow().entries.keys().cloned().collect()
    }

    /// Returns the number of stored keys.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Returns `true` when no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Returns the byte count of all stored keys and values.
    pub fn used_bytes(&self) -> usize {
        self.inner.borrow().used_bytes()
    }
}

impl StorageArea for MemoryStorageArea {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.inner.borrow().entries.get(key).cloned())
    }

    fn set_raw(&self, key: &str, raw_json: &str) -> Result<(), StorageError> {
        let mut area = self.inner.borrow_mut();
        if let Some(quota) = area.quota_bytes {
            let replaced = area.entries.get(key).map_or(0, |old| key.len() + old.len());
            let projected = area.used_bytes() - replaced + key.len() + raw_json.len();
            if projected > quota {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        area.entries.insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        self.inner.borrow_mut().entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.inner.borrow_mut().entries.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_area_round_trip_and_delete() {
        let area = MemoryStorageArea::default();
        let area_obj: &dyn StorageArea = &area;

        area_obj.set_raw("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            area_obj.get_raw("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        area_obj.remove_raw("pref.key").expect("delete");
        assert_eq!(area_obj.get_raw("pref.key").expect("load"), None);
        area_obj.remove_raw("pref.key").expect("deleting a missing key");
    }

    #[test]
    fn memory_area_clones_share_entries() {
        let area = MemoryStorageArea::default();
        let other = area.clone();
        area.set_raw("a", "1").expect("save");
        area.set_raw("b", "2").expect("save");
        assert_eq!(other.keys(), vec!["a".to_string(), "b".to_string()]);

        other.clear().expect("clear");
        assert!(area.is_empty());
    }

    #[test]
    fn quota_rejects_oversized_writes_and_keeps_previous_value() {
        let area = MemoryStorageArea::with_quota(8);
        area.set_raw("k", "\"abc\"").expect("fits");
        assert_eq!(area.used_bytes(), 6);

        let err = area.set_raw("k", "\"abcdefgh\"").expect_err("over quota");
        assert_eq!(
            err,
            StorageError::QuotaExceeded {
                key: "k".to_string()
            }
        );
        assert_eq!(area.get_raw("k").expect("load"), Some("\"abc\"".to_string()));

        // Replacing a value only counts the difference.
        area.set_raw("k", "\"abcde\"").expect("replacement fits");
    }

    #[test]
    fn absent_area_reports_no_host() {
        let area = AbsentStorageArea;
        assert!(!area.is_available());
        assert_eq!(area.get_raw("k"), Err(StorageError::NoHost));
        assert_eq!(area.set_raw("k", "1"), Err(StorageError::NoHost));
        assert_eq!(area.remove_raw("k"), Err(StorageError::NoHost));
        assert_eq!(area.clear(), Err(StorageError::NoHost));
    }

    #[test]
    fn rc_wrapped_area_forwards_calls() {
        let area = Rc::new(MemoryStorageArea::default());
        area.set_raw("k", "true").expect("save");
        assert!(StorageArea::is_available(&area));
        assert_eq!(area.get_raw("k").expect("load"), Some("true".to_string()));
    }
}
