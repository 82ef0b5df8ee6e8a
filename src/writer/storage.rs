//! Local filesystem storage.
//!
//! Blocking I/O, rooted at a base directory. Files are written to a
//! temporary sibling and renamed into place, so a partition file is either the
//! previous version or the complete new one.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::error::{Result, WriterError};

const TEMP_SUFFIX: &str = ".tmp";

pub struct FilesystemStorage {
    base_path: PathBuf,
}

impl FilesystemStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Absolute (or base-relative) location of `path`
    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }

    /// Create a directory and all parents; succeeds if it already exists.
    pub fn ensure_dir(&self, path: &str) -> Result<PathBuf> {
        let full_path = self.resolve(path);
        fs::create_dir_all(&full_path).map_err(|e| WriterError::write_failure(&full_path, e))?;
        Ok(full_path)
    }

    /// Write data to `path`, replacing any existing file atomically.
    pub fn write(&self, path: &str, data: &[u8]) -> Result<PathBuf> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| WriterError::write_failure(parent, e))?;
        }

        let temp_path = temp_path_for(&full_path);
        if let Err(e) = write_file(&temp_path, data) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, &full_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            WriterError::write_failure(&full_path, e)
        })?;

        Ok(full_path)
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(TEMP_SUFFIX);
    PathBuf::from(name)
}

fn write_file(path: &Path, data: &[u8]) -> Result<()> {
    let file = File::create(path).map_err(|e| WriterError::write_failure(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(data)
        .and_then(|_| writer.flush())
        .map_err(|e| WriterError::write_failure(path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WriterError::write_failure(path, e))
}
