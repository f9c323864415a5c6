//! The migration engine: one workspace record at a time, strictly in
//! order, each record isolated from the next.
//!
//! Per record the sequence is fixed:
//!
//! 1. resolve the new folder by prefix substitution (equal paths: no-op)
//! 2. check preconditions (old folder gone, new folder present)
//! 3. verify identity: the old path string under the new folder's
//!    creation time must hash back to the record's identifier
//! 4. discover the new identity from the new folder itself
//! 5. copy the bundle into a directory named by the new identifier,
//!    refusing to overwrite, skipping the stale store backup
//! 6. rewrite `workspace.json` and `state.vscdb`
//! 7. hand the old bundle to the trash capability
//!
//! A failure at any step reports its reason and skips to the next record;
//! nothing rolls back. If relocation succeeded but a rewrite failed, the
//! half-migrated bundle surfaces on re-run as an already-exists refusal.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::MigrationConfig;
use crate::error::{Result, WsmvError};
use crate::ident;
use crate::metadata::{WorkspaceMetadata, METADATA_FILE};
use crate::model::{WorkspaceId, WorkspaceRecord};
use crate::statedb::{self, STATE_DB_BACKUP_FILE, STATE_DB_FILE};
use crate::trash::Trash;
use crate::uri;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Outcome {
    /// The folder already lives at the target location.
    AlreadyInPlace,
    /// The new location hashes to the record's own identifier.
    SameIdentity,
    Migrated {
        new_id: WorkspaceId,
        copied: usize,
        rows: usize,
    },
    Planned {
        new_id: WorkspaceId,
        copied: usize,
    },
}

pub fn run(
    root: &Path,
    records: &[WorkspaceRecord],
    config: &MigrationConfig,
    trash: &dyn Trash,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if records.is_empty() {
        result.add_message(CmdMessage::info("No matching workspace records."));
    }

    for record in records {
        match migrate_record(root, record, config, trash) {
            Ok(Outcome::AlreadyInPlace) => {
                result.skipped += 1;
                result.add_message(CmdMessage::info(format!(
                    "{}: {} is already in the new location",
                    record.id,
                    record.folder.display()
                )));
            }
            Ok(Outcome::SameIdentity) => {
                result.skipped += 1;
                result.add_message(CmdMessage::warning(format!(
                    "{}: new location hashes to the same identifier, stopping",
                    record.id
                )));
            }
            Ok(Outcome::Migrated {
                new_id,
                copied,
                rows,
            }) => {
                result.migrated += 1;
                result.add_message(CmdMessage::success(format!(
                    "{}: migrated to {} ({} objects copied, {} rows rewritten, old bundle trashed)",
                    record.id, new_id, copied, rows
                )));
            }
            Ok(Outcome::Planned { new_id, copied }) => {
                result.migrated += 1;
                result.add_message(CmdMessage::info(format!(
                    "{}: would migrate to {} ({} objects, then rewrite {} and {})",
                    record.id, new_id, copied, METADATA_FILE, STATE_DB_FILE
                )));
            }
            Err(e) => {
                result.failed += 1;
                result.add_message(CmdMessage::error(format!("{}: {}", record.id, e)));
            }
        }
    }

    let verb = if config.dry_run {
        "would migrate"
    } else {
        "migrated"
    };
    result.add_message(CmdMessage::info(format!(
        "{} {}, {} skipped, {} failed",
        result.migrated, verb, result.skipped, result.failed
    )));
    Ok(result)
}

fn migrate_record(
    root: &Path,
    record: &WorkspaceRecord,
    config: &MigrationConfig,
    trash: &dyn Trash,
) -> Result<Outcome> {
    let old_folder = &record.folder;
    let find = uri::native_separators(&config.find);
    let replace = uri::native_separators(&config.replace);
    let new_folder = PathBuf::from(
        old_folder
            .to_string_lossy()
            .replace(&find, &replace),
    );

    if *old_folder == new_folder {
        return Ok(Outcome::AlreadyInPlace);
    }

    if old_folder.exists() {
        return Err(WsmvError::OldFolderPresent(old_folder.clone()));
    }
    if !new_folder.exists() {
        return Err(WsmvError::NewFolderMissing(new_folder.clone()));
    }

    // The old path string under the new folder's on-disk creation time
    // must reproduce the identifier this bundle is stored under.
    let verification = ident::workspace_id(&new_folder, Some(old_folder))?;
    if verification != record.id {
        return Err(WsmvError::IdentityMismatch {
            folder: new_folder,
            expected: record.id.clone(),
        });
    }

    let new_id = ident::workspace_id(&new_folder, None)?;
    if new_id == record.id {
        return Ok(Outcome::SameIdentity);
    }

    let old_bundle = root.join(record.id.as_str());
    let new_bundle = root.join(new_id.as_str());
    if new_bundle.exists() {
        return Err(WsmvError::BundleExists(new_bundle));
    }

    if config.dry_run {
        let copied = count_objects(&old_bundle)?;
        return Ok(Outcome::Planned { new_id, copied });
    }

    fs::create_dir_all(&new_bundle)?;
    let copied = copy_bundle(&old_bundle, &new_bundle)?;

    let metadata_path = new_bundle.join(METADATA_FILE);
    let mut metadata = WorkspaceMetadata::load(&metadata_path)?;
    metadata.set_folder(&new_folder);
    metadata.save(&metadata_path)?;

    let rows = statedb::replace_paths(
        &new_bundle.join(STATE_DB_FILE),
        &config.find,
        &config.replace,
    )?;

    trash.dispose(&old_bundle)?;

    Ok(Outcome::Migrated {
        new_id,
        copied,
        rows,
    })
}

/// Copy every entry of `src` into `dst`, preserving structure and
/// skipping the stale store backup wherever it appears. Returns the
/// number of objects (files and directories) copied.
fn copy_bundle(src: &Path, dst: &Path) -> Result<usize> {
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        if entry.file_name() == STATE_DB_BACKUP_FILE {
            continue;
        }
        let target = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            fs::create_dir(&target)?;
            copied += 1 + copy_bundle(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn count_objects(src: &Path) -> Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        if entry.file_name() == STATE_DB_BACKUP_FILE {
            continue;
        }
        if entry.file_type()?.is_dir() {
            count += 1 + count_objects(&entry.path())?;
        } else {
            count += 1;
        }
    }
    Ok(count)
}
