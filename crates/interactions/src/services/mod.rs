//! Shared services the components compose with.

pub mod notify;
pub mod storage;

pub use notify::{Notification, NotificationArea, NotificationService, Severity};
pub use storage::{KeyValueStore, KeyValueStoreExt, MemoryStore, StorageError};
