pub mod file;
pub mod memory;
pub mod prefs;

use anyhow::Result;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use prefs::{Preference, Preferences, Theme};

/// Small string key/value store holding per-user preferences.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
