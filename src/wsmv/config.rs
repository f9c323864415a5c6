use directories::BaseDirs;
use std::path::PathBuf;

pub const DEFAULT_PRODUCT: &str = "Code";

/// What a migration run substitutes: every candidate folder whose native
/// path contains `find` is expected to have been moved to the same path
/// with `find` replaced by `replace`.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub find: String,
    pub replace: String,
    pub dry_run: bool,
}

impl MigrationConfig {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// The per-user `workspaceStorage` root for an editor product
/// ("Code", "Cursor", "VSCodium", ...), if the platform config dir is
/// known.
pub fn default_storage_root(product: &str) -> Option<PathBuf> {
    let base = BaseDirs::new()?;
    Some(
        base.config_dir()
            .join(product)
            .join("User")
            .join("workspaceStorage"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_defaults_off() {
        let config = MigrationConfig::new("a", "b");
        assert!(!config.dry_run);
        assert!(config.with_dry_run(true).dry_run);
    }

    #[test]
    fn storage_root_ends_with_the_editor_layout() {
        if let Some(root) = default_storage_root(DEFAULT_PRODUCT) {
            assert!(root.ends_with("Code/User/workspaceStorage"));
        }
    }
}
