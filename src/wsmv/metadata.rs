//! The `workspace.json` record inside every storage bundle.
//!
//! Single-folder workspaces carry a `folder` URI, multi-root ones a
//! `workspace` URI. Anything else the editor may have written is kept
//! verbatim across a rewrite; enumeration reports such keys as warnings.

use crate::error::Result;
use crate::uri;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const METADATA_FILE: &str = "workspace.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WorkspaceMetadata {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Persist the record, rewriting the file whole.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Point the record at `new_folder`, re-encoding the path fields.
    pub fn set_folder(&mut self, new_folder: &Path) {
        self.folder = Some(uri::encode_path(new_folder));
        if self.workspace.is_some() {
            self.workspace = Some(uri::encode_path(new_folder));
        }
    }

    pub fn unknown_keys(&self) -> Vec<&str> {
        self.extra.keys().map(String::as_str).collect()
    }
}
