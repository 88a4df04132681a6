//! Provider client collaborators.
//!
//! The dispatcher never talks to the network itself. A [`ClientFactory`]
//! supplied by the host creates a [`ProviderClient`] that performs the two
//! send operations.

mod model;

pub use model::{
    Body, Content, Destination, RawMessage, SUBJECT_CHARSET, SendEmailRequest,
    SendRawEmailRequest, SimpleMessage,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Errors reported by a provider client or its factory.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport failure.
    #[error("Network error: {0}")]
    Network(String),

    /// Credentials rejected.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Sending rate exceeded.
    #[error("Throttled: {0}")]
    Throttled(String),

    /// Request rejected by the provider.
    #[error("Provider rejected request ({code}): {message}")]
    Rejected {
        /// Provider error code (e.g. `MessageRejected`).
        code: String,
        /// Provider message.
        message: String,
    },

    /// Client could not be created.
    #[error("Client error: {0}")]
    Client(String),
}

/// Request signature scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureVersion {
    /// Signature version 4.
    #[default]
    V4,
}

impl fmt::Display for SignatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "v4"),
        }
    }
}

/// Options passed to a [`ClientFactory`].
///
/// Empty options mean "use the provider defaults".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Region to bind the client to.
    pub region: Option<String>,
    /// Signature scheme, set together with an explicit region.
    pub signature: Option<SignatureVersion>,
}

impl ClientOptions {
    /// Options for an explicit region.
    #[must_use]
    pub fn for_region(region: impl Into<String>, signature: SignatureVersion) -> Self {
        Self {
            region: Some(region.into()),
            signature: Some(signature),
        }
    }
}

/// A handle able to submit both send operations.
///
/// Response bodies are not modelled; `Ok(())` means the provider accepted
/// the request.
pub trait ProviderClient: Send + Sync {
    /// Submits a structured send.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails for any reason.
    fn send_email(&self, request: &SendEmailRequest) -> Result<(), ProviderError>;

    /// Submits a raw MIME send.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider call fails for any reason.
    fn send_raw_email(&self, request: &SendRawEmailRequest) -> Result<(), ProviderError>;
}

/// Creates provider clients.
pub trait ClientFactory: Send + Sync {
    /// Creates a client for the given options.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be configured.
    fn create(&self, options: &ClientOptions) -> Result<Arc<dyn ProviderClient>, ProviderError>;
}

impl<F> ClientFactory for F
where
    F: Fn(&ClientOptions) -> Result<Arc<dyn ProviderClient>, ProviderError> + Send + Sync,
{
    fn create(&self, options: &ClientOptions) -> Result<Arc<dyn ProviderClient>, ProviderError> {
        self(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_options_for_region() {
        let options = ClientOptions::for_region("eu-west-1", SignatureVersion::V4);
        assert_eq!(options.region.as_deref(), Some("eu-west-1"));
        assert_eq!(options.signature, Some(SignatureVersion::V4));
        assert_eq!(ClientOptions::default().region, None);
    }

    #[test]
    fn test_signature_version_display_matches_config_label() {
        assert_eq!(SignatureVersion::V4.to_string(), "v4");
        assert_eq!(
            serde_json::to_string(&SignatureVersion::V4).unwrap_or_default(),
            "\"v4\""
        );
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Rejected {
            code: "MessageRejected".into(),
            message: "Email address is not verified".into(),
        };
        assert_eq!(
            err.to_string(),
            "Provider rejected request (MessageRejected): Email address is not verified"
        );
    }
}
