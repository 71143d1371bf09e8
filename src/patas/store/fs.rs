use std::fs;
use std::path::{Path, PathBuf};

use super::{Persister, Snapshot, Store};
use crate::error::{PatasError, Result};

/// Production persistence: the whole store serialized to one JSON file.
pub struct FilePersister {
    path: PathBuf,
}

impl FilePersister {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persister for FilePersister {
    fn load(&self) -> Result<Store> {
        if !self.path.exists() {
            return Ok(Store::default());
        }
        let content = fs::read_to_string(&self.path).map_err(PatasError::Io)?;
        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(PatasError::Serialization)?;
        snapshot.into_store()
    }

    fn save(&mut self, store: &Store) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(PatasError::Io)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&Snapshot::of(store)).map_err(PatasError::Serialization)?;
        fs::write(&self.path, content).map_err(PatasError::Io)?;
        Ok(())
    }
}
