//! Error types for the dispatcher.

use crate::provider::ProviderError;
use thiserror::Error;

/// Errors that can occur while dispatching mail.
///
/// [`crate::MailDispatcher::send`] reduces all of these to `false`.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider call or client creation failed.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Message could not be assembled (e.g. unreadable attachment).
    #[error("MIME error: {0}")]
    Mime(#[from] sesmail_mime::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
