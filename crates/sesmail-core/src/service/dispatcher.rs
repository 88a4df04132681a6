//! Mail dispatcher.
//!
//! Chooses between the structured and the raw provider operation and owns
//! the lazily created provider client.

use super::message::{OutgoingMail, Recipients};
use crate::config::{DispatcherConfig, SenderSource};
use crate::error::Result;
use crate::provider::{ClientFactory, ClientOptions, ProviderClient};
use sesmail_mime::HeaderLines;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// Provider operation used for a send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendPath {
    /// Structured send (no attachments).
    Structured,
    /// Raw MIME send (attachments present).
    Raw,
}

/// Routes outgoing mail through the provider.
pub struct MailDispatcher {
    factory: Arc<dyn ClientFactory>,
    sender: Arc<dyn SenderSource>,
    config: DispatcherConfig,
    client: Mutex<Option<Arc<dyn ProviderClient>>>,
}

impl fmt::Debug for MailDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cached = self.client.try_lock().is_ok_and(|client| client.is_some());
        f.debug_struct("MailDispatcher")
            .field("config", &self.config)
            .field("client_cached", &cached)
            .finish_non_exhaustive()
    }
}

impl MailDispatcher {
    /// Creates a dispatcher with the default configuration.
    #[must_use]
    pub fn new(
        factory: impl ClientFactory + 'static,
        sender: impl SenderSource + 'static,
    ) -> Self {
        Self {
            factory: Arc::new(factory),
            sender: Arc::new(sender),
            config: DispatcherConfig::default(),
            client: Mutex::new(None),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DispatcherConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Returns the cached provider client, creating it if needed.
    ///
    /// A new client is created when none is cached or when `force` is set.
    /// An explicit `region` requests a client bound to that region with
    /// signature v4; `None` leaves the choice to the factory. A cached client
    /// is returned as is, whatever its region.
    ///
    /// # Errors
    ///
    /// Returns an error if the factory fails; the cache is left unchanged.
    pub fn client(&self, region: Option<&str>, force: bool) -> Result<Arc<dyn ProviderClient>> {
        // Held across creation so concurrent first sends build one client.
        let mut cached = self.client.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(client) = cached.as_ref().filter(|_| !force) {
            return Ok(Arc::clone(client));
        }

        let options = region.map_or_else(ClientOptions::default, |region| {
            ClientOptions::for_region(region, self.config.signature)
        });
        debug!(
            region = ?options.region,
            signature = %self.config.signature,
            force,
            "Creating provider client"
        );

        let client = self.factory.create(&options)?;
        *cached = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Replaces the cached provider client.
    pub fn set_client(&self, client: Arc<dyn ProviderClient>) {
        *self.client.lock().unwrap_or_else(PoisonError::into_inner) = Some(client);
    }

    /// Sends a message, reporting the cause of any failure.
    ///
    /// Exactly one provider operation runs, picked by whether the message
    /// has attachments.
    ///
    /// # Errors
    ///
    /// Returns an error if an attachment cannot be read, the client cannot
    /// be created, or the provider rejects the request.
    pub fn try_send(&self, mail: &OutgoingMail) -> Result<SendPath> {
        let default_sender = self.sender.default_sender();

        if mail.has_attachments() {
            let request = mail.to_send_raw_email_request(&default_sender)?;
            let client = self.client(Some(&self.config.region), false)?;
            debug!(
                recipients = request.destinations.len(),
                attachments = mail.attachments.len(),
                "Sending raw email"
            );
            client.send_raw_email(&request)?;
            Ok(SendPath::Raw)
        } else {
            let request = mail.to_send_email_request(&default_sender);
            let client = self.client(Some(&self.config.region), false)?;
            debug!(
                recipients = request.destination.to_addresses.len(),
                "Sending structured email"
            );
            client.send_email(&request)?;
            Ok(SendPath::Structured)
        }
    }

    /// Sends a message, returning whether the provider accepted it.
    pub fn deliver(&self, mail: &OutgoingMail) -> bool {
        match self.try_send(mail) {
            Ok(path) => {
                debug!(?path, "Mail dispatched");
                true
            }
            Err(e) => {
                warn!(?e, subject = %mail.subject, "Mail dispatch failed");
                false
            }
        }
    }

    /// Sends mail with the legacy call shape.
    ///
    /// `headers` may be a raw header block or a sequence of lines;
    /// `attachments` are file paths. Any failure yields `false`.
    pub fn send(
        &self,
        to: impl Into<Recipients>,
        subject: &str,
        body: &str,
        headers: impl Into<HeaderLines>,
        attachments: &[&str],
    ) -> bool {
        let mail = OutgoingMail::new(to, subject, body)
            .headers(headers)
            .attachments(attachments.iter().copied());
        self.deliver(&mail)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StaticSender;
    use crate::provider::{ProviderError, SendEmailRequest, SendRawEmailRequest};
    use std::result::Result as StdResult;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct NullClient;

    impl ProviderClient for NullClient {
        fn send_email(&self, _: &SendEmailRequest) -> StdResult<(), ProviderError> {
            Ok(())
        }

        fn send_raw_email(&self, _: &SendRawEmailRequest) -> StdResult<(), ProviderError> {
            Ok(())
        }
    }

    fn counting_factory(
        created: Arc<AtomicUsize>,
        seen: Arc<Mutex<Vec<ClientOptions>>>,
    ) -> impl ClientFactory {
        move |options: &ClientOptions| -> StdResult<Arc<dyn ProviderClient>, ProviderError> {
            created.fetch_add(1, Ordering::SeqCst);
            seen.lock().unwrap().push(options.clone());
            Ok(Arc::new(NullClient))
        }
    }

    #[test]
    fn test_client_is_cached() {
        let created = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = MailDispatcher::new(
            counting_factory(Arc::clone(&created), Arc::clone(&seen)),
            StaticSender::new("admin@x.com"),
        );

        dispatcher.client(Some("us-west-2"), false).unwrap();
        dispatcher.client(Some("eu-west-1"), false).unwrap();
        assert_eq!(created.load(Ordering::SeqCst), 1);

        dispatcher.client(Some("eu-west-1"), true).unwrap();
        assert_eq!(created.load(Ordering::SeqCst), 2);

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0].region.as_deref(), Some("us-west-2"));
        assert_eq!(seen[1].region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_client_without_region_uses_empty_options() {
        let created = Arc::new(AtomicUsize::new(0));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = MailDispatcher::new(
            counting_factory(created, Arc::clone(&seen)),
            StaticSender::new("admin@x.com"),
        );

        dispatcher.client(None, false).unwrap();
        assert_eq!(seen.lock().unwrap()[0], ClientOptions::default());
    }

    #[test]
    fn test_set_client_replaces_cache() {
        let created = Arc::new(AtomicUsize::new(0));
        let dispatcher = MailDispatcher::new(
            counting_factory(Arc::clone(&created), Arc::new(Mutex::new(Vec::new()))),
            StaticSender::new("admin@x.com"),
        );

        dispatcher.set_client(Arc::new(NullClient));
        assert!(dispatcher.send("a@x.com", "Hi", "Hello", "", &[]));
        assert_eq!(created.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_factory_failure_is_false() {
        let dispatcher = MailDispatcher::new(
            |_: &ClientOptions| -> StdResult<Arc<dyn ProviderClient>, ProviderError> {
                Err(ProviderError::Client("no credentials".into()))
            },
            StaticSender::new("admin@x.com"),
        );

        assert!(!dispatcher.send("a@x.com", "Hi", "Hello", "", &[]));
        assert!(dispatcher.client(None, false).is_err());
    }

    #[test]
    fn test_send_uses_configured_region() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = MailDispatcher::new(
            counting_factory(Arc::new(AtomicUsize::new(0)), Arc::clone(&seen)),
            StaticSender::new("admin@x.com"),
        )
        .with_config(DispatcherConfig::with_region("eu-central-1"));

        assert!(dispatcher.send("a@x.com", "Hi", "Hello", "", &[]));
        assert_eq!(seen.lock().unwrap()[0].region.as_deref(), Some("eu-central-1"));
        assert_eq!(dispatcher.config().region, "eu-central-1");
    }

    #[test]
    fn test_debug_reports_cache_state() {
        let dispatcher = MailDispatcher::new(
            counting_factory(Arc::new(AtomicUsize::new(0)), Arc::new(Mutex::new(Vec::new()))),
            StaticSender::new("admin@x.com"),
        );
        assert!(format!("{dispatcher:?}").contains("client_cached: false"));

        dispatcher.client(None, false).unwrap();
        assert!(format!("{dispatcher:?}").contains("client_cached: true"));
    }
}
