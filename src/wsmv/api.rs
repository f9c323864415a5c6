//! The API facade — entry point for all operations.
//!
//! Thin dispatch over the command modules: enumeration feeds the
//! orchestrator, results come back as structured [`CmdResult`] values,
//! and nothing here touches stdout. Generic over [`Trash`] so clients
//! choose between the platform trash and a test stand-in.

use crate::commands::{self, CmdResult};
use crate::config::MigrationConfig;
use crate::error::Result;
use crate::trash::Trash;
use std::path::{Path, PathBuf};

pub struct WsmvApi<T: Trash> {
    root: PathBuf,
    trash: T,
}

impl<T: Trash> WsmvApi<T> {
    pub fn new(root: PathBuf, trash: T) -> Self {
        Self { root, trash }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn list(&self, find: Option<&str>) -> Result<CmdResult> {
        commands::scan::run(&self.root, find)
    }

    pub fn migrate(&self, config: &MigrationConfig) -> Result<CmdResult> {
        let enumeration = commands::scan::enumerate(&self.root)?;
        let (records, mut selection_messages) =
            commands::scan::candidates(&enumeration, &config.find);

        let mut messages = enumeration.messages;
        messages.append(&mut selection_messages);

        let mut result = commands::migrate::run(&self.root, &records, config, &self.trash)?;
        messages.append(&mut result.messages);
        result.messages = messages;
        Ok(result)
    }

    pub fn repair(&self, dry_run: bool) -> Result<CmdResult> {
        commands::repair::run(&self.root, dry_run)
    }
}
