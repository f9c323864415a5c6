//! Conversion between native paths and the `file:` URIs the editor
//! persists in `workspace.json`.
//!
//! Encoding prepends exactly one separator to the forward-slash form of
//! the native path, so a Windows path `C:\Users\x` becomes
//! `file:///C:/Users/x`. Decoding strips exactly that one separator back
//! off before unescaping, which makes the two operations inverses:
//! `decode(encode(p)) == p` and `encode(decode(u)) == u`.

use crate::error::{Result, WsmvError};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Encode a native path as a `file:` URI with posix separators and
/// percent-encoded segments.
pub fn encode_path(path: &Path) -> String {
    let native = path.to_string_lossy().replace('\\', "/");
    let mut uri = String::from("file:///");
    for (i, segment) in native.split('/').enumerate() {
        if i > 0 {
            uri.push('/');
        }
        uri.push_str(&urlencoding::encode(segment));
    }
    uri
}

/// Decode a local `file:` URI back to a native path.
///
/// URIs with any other scheme are rejected; callers pass those through
/// untouched rather than decoding them.
pub fn decode_uri(uri: &str) -> Result<PathBuf> {
    let path = uri
        .strip_prefix("file://")
        .ok_or_else(|| WsmvError::NotFileUri(uri.to_string()))?;
    // Encoding introduced exactly one leading separator; take it back off.
    let path = path.strip_prefix('/').unwrap_or(path);
    let decoded = urlencoding::decode(path)
        .map_err(|_| WsmvError::UriDecode(uri.to_string()))?;
    Ok(PathBuf::from(decoded.into_owned()))
}

/// The scheme of `value`, if it reads as a URI at all.
pub fn uri_scheme(value: &str) -> Option<&str> {
    let idx = value.find("://")?;
    let scheme = &value[..idx];
    let valid = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
    valid.then_some(scheme)
}

/// A find/replace prefix in the platform's native separator convention.
pub fn native_separators(prefix: &str) -> String {
    if MAIN_SEPARATOR == '/' {
        prefix.replace('\\', "/")
    } else {
        prefix.replace('/', "\\")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_one_leading_separator() {
        assert_eq!(
            encode_path(Path::new("C:\\Users\\alice\\proj")),
            "file:///C%3A/Users/alice/proj"
        );
        assert_eq!(
            encode_path(Path::new("/home/alice/proj")),
            "file:////home/alice/proj"
        );
    }

    #[test]
    fn percent_encodes_reserved_characters() {
        assert_eq!(
            encode_path(Path::new("/home/alice/my proj#1")),
            "file:////home/alice/my%20proj%231"
        );
    }

    #[test]
    fn decode_rejects_other_schemes() {
        assert!(matches!(
            decode_uri("vscode-remote://ssh-remote%2Bbox/home/alice"),
            Err(WsmvError::NotFileUri(_))
        ));
        assert!(decode_uri("https://example.com/x").is_err());
    }

    #[test]
    fn round_trips_native_paths() {
        for p in ["/home/alice/proj", "/srv/data/my proj", "C:/Users/x"] {
            let path = Path::new(p);
            assert_eq!(decode_uri(&encode_path(path)).unwrap(), path);
        }
    }

    #[test]
    fn round_trips_file_uris() {
        for u in [
            "file:///C%3A/Users/alice/proj",
            "file:////home/alice/my%20proj",
        ] {
            assert_eq!(encode_path(&decode_uri(u).unwrap()), u);
        }
    }

    #[test]
    fn scheme_detection() {
        assert_eq!(uri_scheme("file:///x"), Some("file"));
        assert_eq!(uri_scheme("vscode-remote://wsl/x"), Some("vscode-remote"));
        assert_eq!(uri_scheme("C:\\Users\\alice"), None);
        assert_eq!(uri_scheme("/home/alice"), None);
    }
}
