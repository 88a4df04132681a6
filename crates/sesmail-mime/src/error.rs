//! Error types for MIME operations.

use std::io;
use std::path::PathBuf;

/// Result type alias for MIME operations.
pub type Result<T> = std::result::Result<T, Error>;

/// MIME error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Attachment file could not be read.
    #[error("Cannot read attachment {}: {source}", path.display())]
    Attachment {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Attachment path has no file name component.
    #[error("Attachment path has no file name: {}", .0.display())]
    InvalidAttachmentPath(PathBuf),

    /// Base64 decode error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}
