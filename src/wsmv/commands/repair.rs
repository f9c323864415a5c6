//! One-off repair for malformed `workspace.json` path fields.
//!
//! Two defects show up in the wild: a raw native path where a `file:`
//! URI belongs, and `%5C` escapes left over from an encoder that was fed
//! backslash separators. Both are normalized in place; remote-scheme
//! URIs are never touched.

use crate::commands::{CmdMessage, CmdResult};
use crate::commands::scan;
use crate::error::Result;
use crate::metadata::METADATA_FILE;
use crate::uri;
use std::path::Path;

pub fn run(root: &Path, dry_run: bool) -> Result<CmdResult> {
    let enumeration = scan::enumerate(root)?;
    let mut result = CmdResult {
        messages: enumeration.messages.clone(),
        ..Default::default()
    };

    for bundle in &enumeration.bundles {
        let mut metadata = bundle.metadata.clone();
        let mut fixes = 0;
        if let Some(folder) = metadata.folder.as_mut() {
            fixes += repair_field(folder);
        }
        if let Some(workspace) = metadata.workspace.as_mut() {
            fixes += repair_field(workspace);
        }
        if fixes == 0 {
            continue;
        }

        if !dry_run {
            metadata.save(root.join(bundle.id.as_str()).join(METADATA_FILE))?;
        }
        result.repaired += 1;
        let verb = if dry_run { "would fix" } else { "fixed" };
        result.add_message(CmdMessage::success(format!(
            "{}: {} {} path field issue(s)",
            bundle.id, verb, fixes
        )));
    }

    result.add_message(CmdMessage::info(format!(
        "{} of {} bundles needed repair",
        result.repaired,
        enumeration.bundles.len()
    )));
    Ok(result)
}

fn repair_field(value: &mut String) -> usize {
    let mut fixes = 0;
    if uri::uri_scheme(value).is_none() {
        *value = uri::encode_path(Path::new(value.as_str()));
        fixes += 1;
    }
    if value.contains("%5C") {
        *value = value.replace("%5C", "/");
        fixes += 1;
    }
    fixes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::WorkspaceMetadata;
    use std::fs;

    fn write_bundle(root: &Path, id: &str, json: &str) {
        let dir = root.join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(METADATA_FILE), json).unwrap();
    }

    #[test]
    fn encodes_raw_paths_and_flattens_backslash_escapes() {
        let root = tempfile::tempdir().unwrap();
        write_bundle(root.path(), "raw", r#"{"folder":"C:/Users/alice/proj"}"#);
        write_bundle(
            root.path(),
            "mangled",
            r#"{"workspace":"file:///C%3A%5CUsers%5Calice%5Call.code-workspace"}"#,
        );
        write_bundle(root.path(), "fine", r#"{"folder":"file:///C%3A/Users/x"}"#);

        let result = run(root.path(), false).unwrap();
        assert_eq!(result.repaired, 2);

        let raw = WorkspaceMetadata::load(root.path().join("raw").join(METADATA_FILE)).unwrap();
        assert_eq!(raw.folder.as_deref(), Some("file:///C%3A/Users/alice/proj"));

        let mangled =
            WorkspaceMetadata::load(root.path().join("mangled").join(METADATA_FILE)).unwrap();
        assert_eq!(
            mangled.workspace.as_deref(),
            Some("file:///C%3A/Users/alice/all.code-workspace")
        );
    }

    #[test]
    fn remote_uris_are_left_alone() {
        let root = tempfile::tempdir().unwrap();
        let json = r#"{"folder":"vscode-remote://wsl%2Bubuntu/home/alice"}"#;
        write_bundle(root.path(), "remote", json);

        let result = run(root.path(), false).unwrap();
        assert_eq!(result.repaired, 0);
        assert_eq!(
            fs::read_to_string(root.path().join("remote").join(METADATA_FILE)).unwrap(),
            json
        );
    }

    #[test]
    fn dry_run_reports_but_does_not_write() {
        let root = tempfile::tempdir().unwrap();
        let json = r#"{"folder":"C:/Users/alice/proj"}"#;
        write_bundle(root.path(), "raw", json);

        let result = run(root.path(), true).unwrap();
        assert_eq!(result.repaired, 1);
        assert_eq!(
            fs::read_to_string(root.path().join("raw").join(METADATA_FILE)).unwrap(),
            json
        );
    }
}
