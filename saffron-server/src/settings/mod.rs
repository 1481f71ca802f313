//! 连接设置持久化
//!
//! The one piece of persisted state: per-service API connection settings
//! (service name → enabled/key/url), the server-side equivalent of the
//! browser local-storage settings entry.

mod storage;

pub use storage::{SettingsStorage, StorageError, StorageResult};
