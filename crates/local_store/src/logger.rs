use storage_host::{LogEntry, StorageLogger};

#[derive(Debug, Clone, Copy, Default)]
/// Logger writing through `leptos::logging` (browser console under `csr` on `wasm32`, stdio
/// elsewhere).
pub struct ConsoleLogger;

impl StorageLogger for ConsoleLogger {
    fn log(&self, entry: &LogEntry) {
        leptos::logging::log!("[{}] {}", entry.title, entry.msg);
    }

    fn error(&self, entry: &LogEntry) {
        leptos::logging::error!("[{}] {}", entry.title, entry.msg);
    }
}
