use crate::model::WorkspaceId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsmvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Table '{0}' not found in the state database")]
    StateTableMissing(String),

    #[error("Column '{column}' not found in table '{table}'")]
    StateColumnMissing { table: String, column: String },

    #[error("Not a file URI: {0}")]
    NotFileUri(String),

    #[error("Invalid percent-encoding in URI: {0}")]
    UriDecode(String),

    #[error("Workspace folder {} exists when it should already have been moved away", .0.display())]
    OldFolderPresent(PathBuf),

    #[error("Workspace folder {} does not exist when it should already have been created", .0.display())]
    NewFolderMissing(PathBuf),

    #[error("Workspace folder {} does not recompute to identifier {}; creation time may differ, migrate manually", .folder.display(), .expected)]
    IdentityMismatch {
        folder: PathBuf,
        expected: WorkspaceId,
    },

    #[error("Storage bundle {} already exists; refusing to overwrite", .0.display())]
    BundleExists(PathBuf),

    #[error("Trash error: {0}")]
    Trash(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, WsmvError>;
