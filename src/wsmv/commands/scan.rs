//! Enumeration of storage bundles under a storage root.
//!
//! A bundle is any directory containing a `workspace.json`. Enumeration
//! yields them in directory-name order; candidate selection narrows them
//! to the records a migration run actually consumes (local `file:` URI,
//! decoded folder containing the find-prefix).

use crate::commands::{CmdMessage, CmdResult, ListedBundle};
use crate::error::{Result, WsmvError};
use crate::metadata::{WorkspaceMetadata, METADATA_FILE};
use crate::model::{WorkspaceId, WorkspaceRecord};
use crate::uri;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ScannedBundle {
    pub id: WorkspaceId,
    pub metadata: WorkspaceMetadata,
}

#[derive(Debug, Default)]
pub struct Enumeration {
    pub bundles: Vec<ScannedBundle>,
    pub messages: Vec<CmdMessage>,
}

pub fn enumerate(root: &Path) -> Result<Enumeration> {
    if !root.is_dir() {
        return Err(WsmvError::Storage(format!(
            "storage root {} does not exist",
            root.display()
        )));
    }

    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut enumeration = Enumeration::default();
    for entry in entries {
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let metadata_path = entry.path().join(METADATA_FILE);
        if !metadata_path.exists() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let metadata = match WorkspaceMetadata::load(&metadata_path) {
            Ok(metadata) => metadata,
            Err(e) => {
                enumeration.messages.push(CmdMessage::warning(format!(
                    "{}: unreadable {}: {}",
                    name, METADATA_FILE, e
                )));
                continue;
            }
        };
        if !metadata.extra.is_empty() {
            enumeration.messages.push(CmdMessage::warning(format!(
                "{}: unexpected keys in {}: {}",
                name,
                METADATA_FILE,
                metadata.unknown_keys().join(", ")
            )));
        }
        enumeration.bundles.push(ScannedBundle {
            id: WorkspaceId::new(name),
            metadata,
        });
    }

    Ok(enumeration)
}

/// Narrow an enumeration to the records a migration run operates on.
pub fn candidates(
    enumeration: &Enumeration,
    find: &str,
) -> (Vec<WorkspaceRecord>, Vec<CmdMessage>) {
    let find_native = uri::native_separators(find);
    let mut records = Vec::new();
    let mut messages = Vec::new();

    for bundle in &enumeration.bundles {
        let Some(folder_uri) = bundle.metadata.folder.as_deref() else {
            if bundle.metadata.workspace.is_some() {
                messages.push(CmdMessage::info(format!(
                    "{}: multi-root workspace, skipped",
                    bundle.id
                )));
            }
            continue;
        };
        match uri::uri_scheme(folder_uri) {
            Some("file") => {}
            Some(scheme) => {
                messages.push(CmdMessage::info(format!(
                    "{}: {} workspace, skipped",
                    bundle.id, scheme
                )));
                continue;
            }
            None => {
                messages.push(CmdMessage::warning(format!(
                    "{}: folder is not a URI, run `wsmv repair` first",
                    bundle.id
                )));
                continue;
            }
        }
        let folder = match uri::decode_uri(folder_uri) {
            Ok(folder) => folder,
            Err(e) => {
                messages.push(CmdMessage::warning(format!("{}: {}", bundle.id, e)));
                continue;
            }
        };
        if !folder.to_string_lossy().contains(&find_native) {
            continue;
        }
        records.push(WorkspaceRecord {
            id: bundle.id.clone(),
            folder,
        });
    }

    (records, messages)
}

/// The `list` command: every bundle under the root, optionally narrowed
/// to those whose location contains `find`.
pub fn run(root: &Path, find: Option<&str>) -> Result<CmdResult> {
    let enumeration = enumerate(root)?;
    let mut result = CmdResult {
        messages: enumeration.messages.clone(),
        ..Default::default()
    };

    for bundle in &enumeration.bundles {
        let location = bundle
            .metadata
            .folder
            .clone()
            .or_else(|| {
                bundle
                    .metadata
                    .workspace
                    .as_ref()
                    .map(|w| format!("workspace: {}", w))
            })
            .unwrap_or_else(|| "(no path field)".to_string());
        if let Some(find) = find {
            if !location.contains(find) {
                continue;
            }
        }
        result.listed.push(ListedBundle {
            id: bundle.id.clone(),
            location,
        });
    }

    if result.listed.is_empty() {
        result.add_message(CmdMessage::info("No workspace storage bundles found."));
    }
    Ok(result)
}
