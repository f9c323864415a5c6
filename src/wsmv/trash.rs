//! Retirement of old storage bundles.
//!
//! Disposal is a capability handed to the orchestrator, never a direct
//! delete: production sends bundles to the platform's reversible trash,
//! tests substitute a recording stand-in.

use crate::error::{Result, WsmvError};
use std::cell::RefCell;
use std::path::{Path, PathBuf};

pub trait Trash {
    /// Retire `path` reversibly.
    fn dispose(&self, path: &Path) -> Result<()>;
}

impl<T: Trash + ?Sized> Trash for &T {
    fn dispose(&self, path: &Path) -> Result<()> {
        (**self).dispose(path)
    }
}

/// Moves paths to the platform trash / recycle bin.
pub struct SystemTrash;

impl Trash for SystemTrash {
    fn dispose(&self, path: &Path) -> Result<()> {
        trash::delete(path).map_err(|e| WsmvError::Trash(e.to_string()))
    }
}

/// Records disposals without touching the filesystem.
#[derive(Debug, Default)]
pub struct RecordingTrash {
    disposed: RefCell<Vec<PathBuf>>,
}

impl RecordingTrash {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disposed(&self) -> Vec<PathBuf> {
        self.disposed.borrow().clone()
    }
}

impl Trash for RecordingTrash {
    fn dispose(&self, path: &Path) -> Result<()> {
        self.disposed.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}
