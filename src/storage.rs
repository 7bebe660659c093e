//! Persistence Backends
//!
//! Key-value slot abstraction over browser localStorage.
//! Implementations can use localStorage, in-memory, etc.

use std::sync::Mutex;

/// localStorage key for the persisted recipe collection
pub const STORAGE_KEY: &str = "recipes";

/// A single key-value storage slot holding the JSON-serialized collection
///
/// Reads and writes are synchronous; failures are absorbed silently since
/// the widget has no user-visible error state.
pub trait StorageSlot: Send + Sync {
    /// Current payload, or None when nothing has been stored yet
    fn read(&self) -> Option<String>;

    /// Replace the whole payload
    fn write(&self, payload: &str);
}

/// Browser localStorage under a fixed key
pub struct LocalStorageSlot {
    key: String,
}

impl LocalStorageSlot {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl StorageSlot for LocalStorageSlot {
    fn read(&self) -> Option<String> {
        Self::local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn write(&self, payload: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(&self.key, payload);
        }
    }
}

/// In-memory slot, used in tests in place of real browser storage
#[derive(Default)]
pub struct MemorySlot {
    payload: Mutex<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Option<String> {
        self.payload.lock().ok()?.clone()
    }

    fn write(&self, payload: &str) {
        if let Ok(mut slot) = self.payload.lock() {
            *slot = Some(payload.to_string());
        }
    }
}
