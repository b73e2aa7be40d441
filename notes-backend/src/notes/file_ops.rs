//! File operations for the note cache
//!
//! Path resolution, note-name checks, and the "is this a note" check shared by
//! the file-backed store.

use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Resolve a note name to its file path. The name is joined verbatim.
pub fn note_path(cache_dir: &Path, name: &str) -> PathBuf {
    cache_dir.join(name)
}

/// Strict-mode name check: a single, non-empty path component.
pub fn is_safe_note_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains('/')
        && !name.contains('\\')
        && !name.contains('\0')
}

/// True if a regular file exists at `path` (symlinks are followed).
pub async fn is_note_file(path: &Path) -> io::Result<bool> {
    match fs::metadata(path).await {
        Ok(metadata) => Ok(metadata.is_file()),
        Err(e) if is_missing(&e) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Errors that mean "nothing there" rather than "something broke".
pub fn is_missing(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}

/// Decode note bytes; invalid UTF-8 is replaced rather than rejected.
pub fn decode_text(raw: Vec<u8>) -> String {
    match String::from_utf8(raw) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_safe_note_names() {
        assert!(is_safe_note_name("foo"));
        assert!(is_safe_note_name("foo.txt"));
        assert!(is_safe_note_name(".hidden"));
        assert!(!is_safe_note_name(""));
        assert!(!is_safe_note_name("."));
        assert!(!is_safe_note_name(".."));
        assert!(!is_safe_note_name("../etc/passwd"));
        assert!(!is_safe_note_name("a/b"));
        assert!(!is_safe_note_name("a\\b"));
    }

    #[test]
    fn test_note_path_is_verbatim_join() {
        let dir = Path::new("/tmp/cache");
        assert_eq!(note_path(dir, "foo"), PathBuf::from("/tmp/cache/foo"));
        assert_eq!(note_path(dir, "../x"), PathBuf::from("/tmp/cache/../x"));
    }

    #[tokio::test]
    async fn test_is_note_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("note"), "content").unwrap();
        std::fs::create_dir(dir.path().join("folder")).unwrap();

        assert!(is_note_file(&dir.path().join("note")).await.unwrap());
        assert!(!is_note_file(&dir.path().join("folder")).await.unwrap());
        assert!(!is_note_file(&dir.path().join("missing")).await.unwrap());
        // Parent component is a file, not a directory
        assert!(!is_note_file(&dir.path().join("note/child")).await.unwrap());
    }

    #[test]
    fn test_decode_text_lossy() {
        assert_eq!(decode_text(b"hello".to_vec()), "hello");
        assert_eq!(decode_text(vec![b'a', 0xff, b'b']), "a\u{fffd}b");
    }
}
