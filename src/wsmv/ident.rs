//! Workspace identifier derivation.
//!
//! The editor names each storage bundle after an MD5 over the folder's
//! normalized path string concatenated with its creation timestamp in
//! milliseconds. The scheme is externally fixed and reproduced here
//! bit-for-bit: the drive/root prefix of the path string is lower-cased,
//! the rest keeps its casing, and the timestamp is appended as a decimal
//! string before hashing.

use crate::error::Result;
use crate::model::WorkspaceId;
use chrono::{DateTime, Utc};
use md5::{Digest, Md5};
use std::fs;
use std::path::{Component, Path};

/// Compute the identifier for `folder`.
///
/// The creation timestamp is always read from `folder` on disk. When
/// `alt_path` is given, its string (not `folder`'s) is hashed — used to
/// validate that a moved folder still matches the identifier recorded for
/// its old location, whose own timestamp is no longer readable.
pub fn workspace_id(folder: &Path, alt_path: Option<&Path>) -> Result<WorkspaceId> {
    let created: DateTime<Utc> = fs::metadata(folder)?.created()?.into();
    let millis = created.timestamp_millis();

    let p_str = normalized_path_string(alt_path.unwrap_or(folder));

    let mut digest = Md5::new();
    digest.update(p_str.as_bytes());
    digest.update(millis.to_string().as_bytes());
    Ok(WorkspaceId::new(hex::encode(digest.finalize())))
}

/// Path string with the drive/root prefix forced to lower case.
///
/// On Windows `C:\Users\Foo` becomes `c:\Users\Foo`; paths without a
/// prefix component are returned unchanged.
fn normalized_path_string(path: &Path) -> String {
    let s = path.to_string_lossy().into_owned();
    let prefix_len = match path.components().next() {
        Some(Component::Prefix(prefix)) => prefix.as_os_str().to_string_lossy().len(),
        _ => 0,
    };
    if prefix_len == 0 {
        return s;
    }
    let (prefix, rest) = s.split_at(prefix_len);
    format!("{}{}", prefix.to_lowercase(), rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_for_same_folder() {
        let dir = tempfile::tempdir().unwrap();
        let a = workspace_id(dir.path(), None).unwrap();
        let b = workspace_id(dir.path(), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn alt_path_changes_the_identifier() {
        let dir = tempfile::tempdir().unwrap();
        let own = workspace_id(dir.path(), None).unwrap();
        let alt = workspace_id(dir.path(), Some(Path::new("/somewhere/else"))).unwrap();
        assert_ne!(own, alt);
    }

    #[test]
    fn matches_the_documented_formula() {
        let dir = tempfile::tempdir().unwrap();
        let created: DateTime<Utc> = fs::metadata(dir.path())
            .unwrap()
            .created()
            .unwrap()
            .into();
        let input = format!(
            "{}{}",
            dir.path().to_string_lossy(),
            created.timestamp_millis()
        );
        let expected = hex::encode(Md5::digest(input.as_bytes()));

        let id = workspace_id(dir.path(), None).unwrap();
        assert_eq!(id.as_str(), expected);
        assert_eq!(id.as_str().len(), 32);
    }

    #[test]
    fn plain_paths_are_hashed_verbatim() {
        // No drive prefix on posix-style paths, so casing is untouched.
        assert_eq!(
            normalized_path_string(Path::new("/Users/Alice/Proj")),
            "/Users/Alice/Proj"
        );
    }
}
