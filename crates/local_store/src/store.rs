//! Get/set/remove/clear over a [`StorageArea`] with optional single-field addressing.
//!
//! Field-mode writes are a read-modify-write of the whole record. They are not atomic against
//! other writers of the same key (another tab, or script touching the area directly); a write
//! landing between the read and the write-back is lost.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use storage_host::{
    from_json_value, parse_json_text, to_json_text, to_json_value, ChangeBus, LogEntry,
    StorageAction, StorageArea, StorageChangeEvent, StorageError, StorageLogger,
};
use storage_host_web::StorageAreaAdapter;

use crate::ConsoleLogger;

/// Convenience layer over one storage area.
///
/// Every public operation swallows its failures: mutators return `false`, reads return `None`,
/// and the cause goes to the logger. An unavailable area short-circuits without logging.
#[derive(Debug, Clone)]
pub struct LocalStore<S = StorageAreaAdapter, L = ConsoleLogger> {
    area: S,
    logger: L,
    changes: ChangeBus,
}

impl<S: StorageArea, L: StorageLogger> LocalStore<S, L> {
    /// Creates a store over `area` with its own change bus.
    pub fn new(area: S, logger: L) -> Self {
        Self::with_change_bus(area, logger, ChangeBus::default())
    }

    /// Creates a store that broadcasts on an existing bus.
    pub fn with_change_bus(area: S, logger: L, changes: ChangeBus) -> Self {
        Self {
            area,
            logger,
            changes,
        }
    }

    /// Underlying storage area.
    pub fn area(&self) -> &S {
        &self.area
    }

    /// Logger collaborator.
    pub fn logger(&self) -> &L {
        &self.logger
    }

    /// Bus receiving one [`StorageChangeEvent`] per successful set or remove.
    pub fn changes(&self) -> &ChangeBus {
        &self.changes
    }

    /// Returns whether the storage host is present.
    pub fn is_available(&self) -> bool {
        self.area.is_available()
    }

    /// Reads the record at `key`, or one of its fields, as `T`.
    ///
    /// Returns `None` when there is no host, the key or field is missing, the record is not an
    /// object (field mode), or the stored text cannot be parsed into `T`. Parse failures are
    /// logged as errors.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str, field: Option<&str>) -> Option<T> {
        if !self.is_available() {
            return None;
        }
        match self.try_get_item(key, field) {
            Ok(value) => value,
            Err(err) => {
                self.report("Failed to get storage item", &err);
                None
            }
        }
    }

    /// Reads the record at `key`, or one of its fields, as an untyped JSON value.
    pub fn get_value(&self, key: &str, field: Option<&str>) -> Option<Value> {
        self.get_item(key, field)
    }

    /// Stores `value` as the whole record at `key`, or as one field of it.
    ///
    /// With a field, the existing record is read (an empty object when absent), the field is set,
    /// and the whole object is written back; sibling fields survive. Without a field the record is
    /// replaced. On success one [`StorageAction::Added`] event is broadcast.
    pub fn set_item<T: Serialize + ?Sized>(
        &self,
        key: &str,
        field: Option<&str>,
        value: &T,
        log: bool,
    ) -> bool {
        if !self.is_available() {
            return false;
        }
        match self.try_set_item(key, field, value) {
            Ok(()) => {
                if log {
                    self.logger.log(&LogEntry::new("setItem", describe_target(key, field)));
                }
                self.fire_change_event(key, StorageAction::Added);
                true
            }
            Err(err) => {
                self.report("Failed to set storage item", &err);
                false
            }
        }
    }

    /// Deletes the record at `key`, or one field of it.
    ///
    /// Deleting a field rewrites the record even when it ends up empty; the key itself stays. On
    /// success one [`StorageAction::Removed`] event is broadcast.
    pub fn remove_item(&self, key: &str, field: Option<&str>, log: bool) -> bool {
        if !self.is_available() {
            return false;
        }
        match self.try_remove_item(key, field) {
            Ok(()) => {
                if log {
                    self.logger.log(&LogEntry::new("removeItem", describe_target(key, field)));
                }
                self.fire_change_event(key, StorageAction::Removed);
                true
            }
            Err(err) => {
                self.report("Failed to remove storage item", &err);
                false
            }
        }
    }

    /// Erases every record in the area.
    ///
    /// No change event is broadcast for a clear.
    pub fn clear_storage(&self, log: bool) -> bool {
        if !self.is_available() {
            return false;
        }
        match self.area.clear() {
            Ok(()) => {
                if log {
                    self.logger.log(&LogEntry::new("clearAll", "Cleared all storage"));
                }
                true
            }
            Err(err) => {
                self.report("Failed to clear storage", &err);
                false
            }
        }
    }

    fn try_get_item<T: DeserializeOwned>(
        &self,
        key: &str,
        field: Option<&str>,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(None);
        };
        let parsed = parse_json_text(&raw)?;
        let value = match field_name(field) {
            Some(field) => match parsed {
                Value::Object(mut record) => record.remove(field),
                _ => None,
            },
            None => Some(parsed),
        };
        value.map(from_json_value).transpose()
    }

    fn try_set_item<T: Serialize + ?Sized>(
        &self,
        key: &str,
        field: Option<&str>,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = match field_name(field) {
            Some(field) => {
                // Serialize first so a bad value never touches the stored record.
                let value = to_json_value(value)?;
                let mut record = self.read_record(key)?;
                record.insert(field.to_string(), value);
                to_json_text(&record)?
            }
            None => to_json_text(value)?,
        };
        self.area.set_raw(key, &raw)
    }

    fn try_remove_item(&self, key: &str, field: Option<&str>) -> Result<(), StorageError> {
        match field_name(field) {
            Some(field) => {
                let mut record = self.read_record(key)?;
                record.remove(field);
                self.area.set_raw(key, &to_json_text(&record)?)
            }
            None => self.area.remove_raw(key),
        }
    }

    /// Raw text at `key`; empty text counts as absent.
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.area.get_raw(key)?.filter(|raw| !raw.is_empty()))
    }

    /// Record at `key` as an object, or an empty object when absent.
    fn read_record(&self, key: &str) -> Result<Map<String, Value>, StorageError> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(Map::new());
        };
        match parse_json_text(&raw)? {
            Value::Object(record) => Ok(record),
            _ => Err(StorageError::NotAnObject {
                key: key.to_string(),
            }),
        }
    }

    fn fire_change_event(&self, key: &str, action: StorageAction) {
        let value = self.area.get_raw(key).ok().flatten();
        self.changes.notify(&StorageChangeEvent::new(key, value, action));
    }

    fn report(&self, title: &str, err: &StorageError) {
        self.logger.error(&LogEntry::new(title, err.to_string()));
    }
}

/// An empty field name addresses the whole record.
fn field_name(field: Option<&str>) -> Option<&str> {
    field.filter(|name| !name.is_empty())
}

fn describe_target(key: &str, field: Option<&str>) -> String {
    format!("Key: {key}, Field: {}", field_name(field).unwrap_or("root"))
}
