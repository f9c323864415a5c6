use std::fmt;
use std::path::PathBuf;

/// Identifier the editor derives for a workspace folder (lowercase hex).
///
/// The derivation is an external contract, see [`crate::ident::workspace_id`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkspaceId(String);

impl WorkspaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One enumerated workspace: its storage identifier and the folder the
/// storage bundle is attached to (decoded to a native path).
#[derive(Debug, Clone)]
pub struct WorkspaceRecord {
    pub id: WorkspaceId,
    pub folder: PathBuf,
}
