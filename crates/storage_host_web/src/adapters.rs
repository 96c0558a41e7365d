use storage_host::{AbsentStorageArea, MemoryStorageArea, StorageArea, StorageError};

use crate::WebStorageArea;

#[cfg(all(feature = "host-memory", feature = "host-absent"))]
compile_error!("features `host-memory` and `host-absent` are mutually exclusive; enable only one");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Compile-time selected host strategy for `storage_host_web` adapters.
pub enum HostStrategy {
    /// Browser `localStorage` from `window`.
    Browser,
    /// Process-local in-memory area, for headless builds and native tooling.
    Memory,
    /// No storage host; every mutating operation reports failure.
    Absent,
}

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "host-memory")]
    {
        HostStrategy::Memory
    }

    #[cfg(feature = "host-absent")]
    {
        HostStrategy::Absent
    }

    #[cfg(not(any(feature = "host-memory", feature = "host-absent")))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    match selected_host_strategy() {
        HostStrategy::Browser => "browser",
        HostStrategy::Memory => "memory",
        HostStrategy::Absent => "absent",
    }
}

/// Adapter enum that erases the concrete storage backend behind [`StorageArea`].
#[derive(Debug, Clone)]
pub enum StorageAreaAdapter {
    /// Browser-backed `localStorage` area.
    Browser(WebStorageArea),
    /// In-memory area.
    Memory(MemoryStorageArea),
    /// Placeholder used when the execution context has no storage host.
    Absent(AbsentStorageArea),
}

impl StorageArea for StorageAreaAdapter {
    fn is_available(&self) -> bool {
        match self {
            Self::Browser(area) => area.is_available(),
            Self::Memory(area) => area.is_available(),
            Self::Absent(area) => area.is_available(),
        }
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Browser(area) => area.get_raw(key),
            Self::Memory(area) => area.get_raw(key),
            Self::Absent(area) => area.get_raw(key),
        }
    }

    fn set_raw(&self, key: &str, raw_json: &str) -> Result<(), StorageError> {
        match self {
            Self::Browser(area) => area.set_raw(key, raw_json),
            Self::Memory(area) => area.set_raw(key, raw_json),
            Self::Absent(area) => area.set_raw(key, raw_json),
        }
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        match self {
            Self::Browser(area) => area.remove_raw(key),
            Self::Memory(area) => area.remove_raw(key),
            Self::Absent(area) => area.remove_raw(key),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        match self {
            Self::Browser(area) => area.clear(),
            Self::Memory(area) => area.clear(),
            Self::Absent(area) => area.clear(),
        }
    }
}

/// Builds a storage-area adapter for an explicit host strategy.
pub fn storage_area_for(strategy: HostStrategy) -> StorageAreaAdapter {
    match strategy {
        HostStrategy::Browser => StorageAreaAdapter::Browser(WebStorageArea::local()),
        HostStrategy::Memory => StorageAreaAdapter::Memory(MemoryStorageArea::default()),
        HostStrategy::Absent => StorageAreaAdapter::Absent(AbsentStorageArea),
    }
}

/// Builds the storage-area adapter for the compile-time selected host strategy.
pub fn storage_area() -> StorageAreaAdapter {
    storage_area_for(selected_host_strategy())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn strategy_name_matches_selection() {
        let expected = match selected_host_strategy() {
            HostStrategy::Browser => "browser",
            HostStrategy::Memory => "memory",
            HostStrategy::Absent => "absent",
        };
        assert_eq!(host_strategy_name(), expected);
    }

    #[test]
    fn memory_adapter_forwards_to_memory_area() {
        let area = storage_area_for(HostStrategy::Memory);
        assert!(area.is_available());
        area.set_raw("k", "[1,2]").expect("save");
        assert_eq!(area.get_raw("k").expect("load"), Some("[1,2]".to_string()));
        area.remove_raw("k").expect("delete");
        assert_eq!(area.get_raw("k").expect("load"), None);
        area.clear().expect("clear");
    }

    #[test]
    fn absent_adapter_reports_no_host() {
        let area = storage_area_for(HostStrategy::Absent);
        assert!(!area.is_available());
        assert_eq!(area.set_raw("k", "1"), Err(StorageError::NoHost));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn browser_adapter_is_unavailable_off_wasm() {
        assert!(!storage_area_for(HostStrategy::Browser).is_available());
    }
}
