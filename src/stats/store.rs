//! Storage backends for the statistics document
//!
//! The whole store is one JSON string, read and written by document.
//! Backends only move bytes; interpretation stays in the recorder.

use crate::io::configuration::STATS_FILE_NAME;
use crate::io::error::{GameError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Persistence seam for the statistics document
pub trait StatsBackend {
    /// Read the stored document, `None` when nothing is stored yet
    ///
    /// # Errors
    ///
    /// Returns an error when the store exists but cannot be read.
    fn load(&self) -> Result<Option<String>>;

    /// Replace the stored document
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be written.
    fn save(&mut self, document: &str) -> Result<()>;

    /// Delete the stored document
    ///
    /// Deleting an absent document succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when an existing document cannot be removed.
    fn clear(&mut self) -> Result<()>;
}

/// File-backed store under the platform's local data directory
///
/// Writes are last-writer-wins. The engine assumes one session per
/// store; concurrent writers are not coordinated.
#[derive(Clone, Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend at the platform default location
    pub fn new() -> Self {
        let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: base.join(STATS_FILE_NAME),
        }
    }

    /// Create a backend at an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the store document
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsBackend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(document) => Ok(Some(document)),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(GameError::StatsStore {
                path: self.path.clone(),
                operation: "read",
                source,
            }),
        }
    }

    fn save(&mut self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| GameError::StatsStore {
                path: parent.to_path_buf(),
                operation: "create directory",
                source,
            })?;
        }
        fs::write(&self.path, document).map_err(|source| GameError::StatsStore {
            path: self.path.clone(),
            operation: "write",
            source,
        })
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(GameError::StatsStore {
                path: self.path.clone(),
                operation: "remove",
                source,
            }),
        }
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    document: Option<String>,
}

impl MemoryBackend {
    /// Create an empty in-memory store
    pub const fn new() -> Self {
        Self { document: None }
    }
}

impl StatsBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &str) -> Result<()> {
        self.document = Some(document.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.document = None;
        Ok(())
    }
}
