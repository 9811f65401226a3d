//! Single-instance guard backed by an exclusive lock file.
//!
//! The lock is acquired with create-new semantics and released on `Drop`,
//! so every exit path (success, failure, panic unwind) removes the marker.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const LOCK_FILE_NAME: &str = "gemsmith.lock";

#[derive(Debug)]
pub struct InstanceLock {
    path: PathBuf,
}

impl InstanceLock {
    /// Acquire the lock at `path`, failing if another instance holds it.
    pub fn acquire(path: &Path) -> Result<Self> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(_) => Ok(Self {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                Err(Error::lock_already_held(path.display().to_string()))
            }
            Err(e) => Err(Error::internal_io(
                e.to_string(),
                Some(format!("create lock file {}", path.display())),
            )),
        }
    }

    /// Acquire the process-wide lock in the system temp directory.
    pub fn acquire_default() -> Result<Self> {
        Self::acquire(&std::env::temp_dir().join(LOCK_FILE_NAME))
    }
}

impl Drop for InstanceLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
