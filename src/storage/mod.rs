//! Preference persistence.
//!
//! [`PreferenceStore`] keeps favorites and price alerts on top of any
//! [`KeyValueStore`]: [`JsonFileStore`] on disk, [`MemoryStore`] in tests.

mod error;
mod file;
mod kv;
mod preferences;

pub use error::{PreferenceError, StorageError};
pub use file::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use preferences::{parse_alert_price, PreferenceStore, ALERTS_KEY, FAVORITES_KEY};
