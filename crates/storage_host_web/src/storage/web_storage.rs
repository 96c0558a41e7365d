//! `localStorage` / `sessionStorage`-backed storage area.
//!
//! The browser `Storage` interface is synchronous, so this adapter calls straight through. Every
//! call re-resolves the area from `window`, which keeps the adapter `Copy` and lets it notice
//! storage being disabled mid-session.

use storage_host::{StorageArea, StorageError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which browser storage area a [`WebStorageArea`] targets.
pub enum WebStorageKind {
    /// `window.localStorage`, persisted across sessions.
    #[default]
    Local,
    /// `window.sessionStorage`, scoped to the current tab session.
    Session,
}

impl WebStorageKind {
    /// Returns the browser API name used in diagnostics.
    pub const fn api_name(self) -> &'static str {
        match self {
            Self::Local => "localStorage",
            Self::Session => "sessionStorage",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser storage area backed by `window.localStorage` or `window.sessionStorage`.
pub struct WebStorageArea {
    kind: WebStorageKind,
}

impl WebStorageArea {
    /// Area over `window.localStorage`.
    pub const fn local() -> Self {
        Self {
            kind: WebStorageKind::Local,
        }
    }

    /// Area over `window.sessionStorage`.
    pub const fn session() -> Self {
        Self {
            kind: WebStorageKind::Session,
        }
    }

    /// Returns the targeted browser area.
    pub const fn kind(self) -> WebStorageKind {
        self.kind
    }

    #[cfg(target_arch = "wasm32")]
    fn storage(self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        // Both getters throw when storage is disabled by the user agent.
        let storage = match self.kind {
            WebStorageKind::Local => window.local_storage(),
            WebStorageKind::Session => window.session_storage(),
        };
        storage.ok().flatten()
    }

    #[cfg(target_arch = "wasm32")]
    fn require_storage(self) -> Result<web_sys::Storage, StorageError> {
        self.storage().ok_or(StorageError::NoHost)
    }

    #[cfg(target_arch = "wasm32")]
    fn host_error(self, op: &str, err: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Host(format!("{} {op} failed: {err:?}", self.kind.api_name()))
    }
}

impl StorageArea for WebStorageArea {
    fn is_available(&self) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            self.storage().is_some()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }

    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.require_storage()?
                .get_item(key)
                .map_err(|e| self.host_error("get_item", e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(StorageError::NoHost)
        }
    }

    fn set_raw(&self, key: &str, raw_json: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.require_storage()?
                .set_item(key, raw_json)
                .map_err(|e| self.host_error("set_item", e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Err(StorageError::NoHost)
        }
    }

    fn remove_raw(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.require_storage()?
                .remove_item(key)
                .map_err(|e| self.host_error("remove_item", e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Err(StorageError::NoHost)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.require_storage()?
                .clear()
                .map_err(|e| self.host_error("clear", e))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(StorageError::NoHost)
        }
    }
}
