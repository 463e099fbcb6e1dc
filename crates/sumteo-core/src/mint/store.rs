use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::BoxError;
use crate::storage::data_dir;

const TREE_FILE: &str = "tree_address";

/// Remembers the reader's collection tree between runs.
pub trait TreeStore: Send + Sync {
    fn load(&self) -> Result<Option<String>, BoxError>;
    fn save(&self, address: &str) -> Result<(), BoxError>;
}

/// Plain-text file holding one tree address.
#[derive(Debug, Clone)]
pub struct FileTreeStore {
    path: PathBuf,
}

impl FileTreeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<data dir>/tree_address`
    pub fn in_data_dir() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(data_dir()?.join(TREE_FILE)))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl TreeStore for FileTreeStore {
    fn load(&self) -> Result<Option<String>, BoxError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let address = content.trim();
                Ok((!address.is_empty()).then(|| address.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, address: &str) -> Result<(), BoxError> {
        std::fs::write(&self.path, address)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryTreeStore {
    address: Mutex<Option<String>>,
}

impl MemoryTreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: Mutex::new(Some(address.into())),
        }
    }
}

impl TreeStore for MemoryTreeStore {
    fn load(&self) -> Result<Option<String>, BoxError> {
        let guard = self.address.lock().map_err(|e| e.to_string())?;
        Ok(guard.clone())
    }

    fn save(&self, address: &str) -> Result<(), BoxError> {
        let mut guard = self.address.lock().map_err(|e| e.to_string())?;
        *guard = Some(address.to_string());
        Ok(())
    }
}
