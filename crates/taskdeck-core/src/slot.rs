//! Key-value persistence cells.
//!
//! The tracker stores its whole task list as one serialized value under one
//! key. Anything that can get and set a string by key can back the store.

use std::collections::HashMap;

#[cfg(feature = "fs")]
pub use file::FileSlot;

pub trait KeyValueSlot {
    /// `Ok(None)` when nothing has been stored under `key` yet.
    fn read(&self, key: &str) -> anyhow::Result<Option<String>>;

    /// Replaces whatever was stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut slot = Self::new();
        slot.entries.insert(key.to_string(), value.to_string());
        slot
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(feature = "fs")]
mod file {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, anyhow};
    use tempfile::NamedTempFile;
    use tracing::{debug, info};

    use super::KeyValueSlot;

    /// One `<key>.json` file per key inside a data directory.
    #[derive(Debug, Clone)]
    pub struct FileSlot {
        pub data_dir: PathBuf,
    }

    impl FileSlot {
        #[tracing::instrument(skip(data_dir))]
        pub fn open(data_dir: &Path) -> anyhow::Result<Self> {
            let data_dir = data_dir.to_path_buf();
            fs::create_dir_all(&data_dir)
                .with_context(|| format!("failed to create {}", data_dir.display()))?;

            info!(data_dir = %data_dir.display(), "opened file slot");
            Ok(Self { data_dir })
        }

        pub fn path_for(&self, key: &str) -> PathBuf {
            self.data_dir.join(format!("{key}.json"))
        }
    }

    impl KeyValueSlot for FileSlot {
        #[tracing::instrument(skip(self))]
        fn read(&self, key: &str) -> anyhow::Result<Option<String>> {
            let path = self.path_for(key);
            if !path.exists() {
                debug!(file = %path.display(), "slot file absent");
                return Ok(None);
            }

            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed reading {}", path.display()))?;
            Ok(Some(raw))
        }

        #[tracing::instrument(skip(self, value), fields(bytes = value.len()))]
        fn write(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
            let path = self.path_for(key);
            debug!(file = %path.display(), "writing slot atomically");

            let mut temp = NamedTempFile::new_in(&self.data_dir)?;
            temp.write_all(value.as_bytes())?;
            temp.flush()?;

            temp.persist(&path)
                .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;
            Ok(())
        }
    }
}
