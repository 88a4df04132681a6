//! Dispatcher configuration and the default-sender source.

use crate::provider::{ClientOptions, SignatureVersion};
use serde::{Deserialize, Serialize};

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-west-2";

/// Dispatcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Region every send is bound to.
    pub region: String,
    /// Signature scheme requested with the region.
    pub signature: SignatureVersion,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            signature: SignatureVersion::default(),
        }
    }
}

impl DispatcherConfig {
    /// Creates a configuration bound to `region`.
    #[must_use]
    pub fn with_region(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Self::default()
        }
    }

    /// Client options for the configured region.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions::for_region(self.region.clone(), self.signature)
    }
}

/// Read-only source of the host's fallback sender address.
pub trait SenderSource: Send + Sync {
    /// Returns the fallback sender.
    fn default_sender(&self) -> String;
}

/// A fixed fallback sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSender(pub String);

impl StaticSender {
    /// Creates a fixed sender.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }
}

impl SenderSource for StaticSender {
    fn default_sender(&self) -> String {
        self.0.clone()
    }
}

impl<F> SenderSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn default_sender(&self) -> String {
        self()
    }
}
