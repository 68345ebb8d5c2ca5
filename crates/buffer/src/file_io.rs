//! File persistence for documents.

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;

use crate::TextBuffer;

/// Storage backend for documents.
pub trait Persistence {
    /// Read the raw contents of `path`; `Ok(None)` when the file does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Write `content` to `path`, replacing any previous contents.
    fn write(&self, path: &Path, content: &str) -> Result<()>;
}

/// Decode file bytes as UTF-8, replacing invalid sequences. The flag is true
/// when a replacement happened.
fn decode(bytes: Vec<u8>) -> (String, bool) {
    match String::from_utf8(bytes) {
        Ok(content) => (content, false),
        Err(err) => (String::from_utf8_lossy(err.as_bytes()).into_owned(), true),
    }
}

/// Persistence on the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPersistence;

impl Persistence for FsPersistence {
    fn read(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read(path) {
            Ok(bytes) => {
                let (content, lossy) = decode(bytes);
                if lossy {
                    pow_logger::warn(format!(
                        "{} is not valid UTF-8; invalid bytes were replaced",
                        path.display()
                    ));
                }
                Ok(Some(content))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Result of opening a document
#[derive(Debug)]
pub struct LoadedDocument {
    pub buffer: TextBuffer,
    /// False when the file did not exist yet
    pub existed: bool,
}

/// Open `path` through `persistence`.
///
/// A missing file yields an empty, unmodified buffer.
pub fn load_document(persistence: &dyn Persistence, path: &Path) -> Result<LoadedDocument> {
    match persistence.read(path)? {
        Some(content) => Ok(LoadedDocument {
            buffer: TextBuffer::from_text(&content),
            existed: true,
        }),
        None => Ok(LoadedDocument {
            buffer: TextBuffer::new(),
            existed: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_load_existing_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Line 1\nLine 2\n").unwrap();

        let doc = load_document(&FsPersistence, file.path()).unwrap();
        assert!(doc.existed);
        assert_eq!(doc.buffer.lines(), &["Line 1", "Line 2", ""]);
        assert!(!doc.buffer.is_modified());
    }

    #[test]
    fn test_missing_file_starts_empty_document() {
        let dir = TempDir::new().unwrap();
        let doc = load_document(&FsPersistence, &dir.path().join("new.txt")).unwrap();
        assert!(!doc.existed);
        assert_eq!(doc.buffer.line_count(), 1);
        assert!(!doc.buffer.is_modified());
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[b'o', b'k', 0xff, b'\n', b'x']).unwrap();

        let doc = load_document(&FsPersistence, file.path()).unwrap();
        assert_eq!(doc.buffer.line_count(), 2);
        assert_eq!(doc.buffer.line(1), Some("x"));
    }

    #[test]
    fn test_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        let buffer = TextBuffer::from_text("alpha\nbeta\n\n");

        FsPersistence.write(&path, &buffer.to_text()).unwrap();
        let reloaded = load_document(&FsPersistence, &path).unwrap();
        assert_eq!(reloaded.buffer.lines(), buffer.lines());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "alpha\nbeta\n\n");
    }

    #[test]
    fn test_unedited_save_keeps_bytes() {
        let dir = TempDir::new().unwrap();
        for (name, text) in [
            ("crlf.txt", "one\r\ntwo\r\n"),
            ("mixed.txt", "a\r\nb\nc"),
            ("stray.txt", "x\ry\nz\r"),
        ] {
            let path = dir.path().join(name);
            std::fs::write(&path, text).unwrap();

            let doc = load_document(&FsPersistence, &path).unwrap();
            FsPersistence.write(&path, &doc.buffer.to_text()).unwrap();
            assert_eq!(std::fs::read(&path).unwrap(), text.as_bytes(), "{name}");
        }
    }

    #[test]
    fn test_decode_reports_replacement() {
        assert_eq!(decode(b"plain".to_vec()), ("plain".to_string(), false));
        let (text, lossy) = decode(vec![b'a', 0xe9, b'b']);
        assert!(lossy);
        assert_eq!(text, "a\u{fffd}b");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/file.txt");
        let err = FsPersistence.write(&path, "x").unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
