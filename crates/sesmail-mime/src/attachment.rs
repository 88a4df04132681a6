//! File attachments.

use crate::error::{Error, Result};
use std::path::Path;

/// A file attached to an outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name announced in the part header (basename of the source path).
    pub filename: String,
    /// Raw file contents.
    pub data: Vec<u8>,
}

impl Attachment {
    /// Creates an attachment from in-memory data.
    #[must_use]
    pub fn new(filename: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Reads a whole file into an attachment named after its basename.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has no file name or cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .ok_or_else(|| Error::InvalidAttachmentPath(path.to_path_buf()))?
            .to_string_lossy()
            .into_owned();

        let data = std::fs::read(path).map_err(|source| Error::Attachment {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self { filename, data })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_file_uses_basename() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"a,b\n1,2\n")
            .unwrap();

        let attachment = Attachment::from_file(&path).unwrap();
        assert_eq!(attachment.filename, "report.csv");
        assert_eq!(attachment.data, b"a,b\n1,2\n");
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.bin");

        let err = Attachment::from_file(&path).unwrap_err();
        assert!(matches!(err, Error::Attachment { .. }));
        assert!(err.to_string().contains("missing.bin"));
    }

    #[test]
    fn test_from_file_without_name() {
        let err = Attachment::from_file("/").unwrap_err();
        assert!(matches!(err, Error::InvalidAttachmentPath(_)));
    }
}
