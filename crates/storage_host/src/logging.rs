//! Logger collaborator contract and test adapters.

use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Diagnostic entry handed to a [`StorageLogger`].
pub struct LogEntry {
    /// Short label naming the operation or failure.
    pub title: String,
    /// Detail text.
    pub msg: String,
}

impl LogEntry {
    /// Creates a log entry.
    pub fn new(title: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            msg: msg.into(),
        }
    }
}

/// Fire-and-forget diagnostic sink used by storage operations.
pub trait StorageLogger {
    /// Records an informational entry.
    fn log(&self, entry: &LogEntry);

    /// Records an error entry.
    fn error(&self, entry: &LogEntry);
}

impl<L: StorageLogger + ?Sized> StorageLogger for Rc<L> {
    fn log(&self, entry: &LogEntry) {
        (**self).log(entry);
    }

    fn error(&self, entry: &LogEntry) {
        (**self).error(entry);
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Logger that drops every entry.
pub struct NoopLogger;

impl StorageLogger for NoopLogger {
    fn log(&self, _entry: &LogEntry) {}

    fn error(&self, _entry: &LogEntry) {}
}

#[derive(Debug, Clone, Default)]
/// Logger that keeps entries in memory so callers can inspect them.
pub struct MemoryLogger {
    logs: Rc<RefCell<Vec<LogEntry>>>,
    errors: Rc<RefCell<Vec<LogEntry>>>,
}

impl MemoryLogger {
    /// Informational entries recorded so far.
    pub fn logs(&self) -> Vec<LogEntry> {
        self.logs.borrow().clone()
    }

    /// Error entries recorded so far.
    pub fn errors(&self) -> Vec<LogEntry> {
        self.errors.borrow().clone()
    }

    /// Drops every recorded entry.
    pub fn reset(&self) {
        self.logs.borrow_mut().clear();
        self.errors.borrow_mut().clear();
    }
}

impl StorageLogger for MemoryLogger {
    fn log(&self, entry: &LogEntry) {
        self.logs.borrow_mut().push(entry.clone());
    }

    fn error(&self, entry: &LogEntry) {
        self.errors.borrow_mut().push(entry.clone());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_logger_separates_logs_and_errors() {
        let logger = MemoryLogger::default();
        let handle = logger.clone();
        let sink: &dyn StorageLogger = &logger;

        sink.log(&LogEntry::new("setItem", "Key: prefs, Field: root"));
        sink.error(&LogEntry::new("Failed to set storage item", "boom"));

        assert_eq!(
            handle.logs(),
            vec![LogEntry::new("setItem", "Key: prefs, Field: root")]
        );
        assert_eq!(handle.errors().len(), 1);

        handle.reset();
        assert!(logger.logs().is_empty());
        assert!(logger.errors().is_empty());
    }
}
