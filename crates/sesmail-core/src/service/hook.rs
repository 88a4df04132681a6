//! Host mail hook.
//!
//! The host's "send mail" call site holds a [`MailHook`] and installs a
//! dispatcher into it once. Calls made before installation fail softly.

use super::dispatcher::MailDispatcher;
use super::message::Recipients;
use sesmail_mime::HeaderLines;
use std::sync::{Arc, OnceLock};
use tracing::debug;

/// Registration point for the dispatcher serving the host's mail calls.
#[derive(Debug, Default)]
pub struct MailHook {
    dispatcher: OnceLock<Arc<MailDispatcher>>,
}

impl MailHook {
    /// Creates a hook with no dispatcher installed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dispatcher: OnceLock::new(),
        }
    }

    /// Installs the dispatcher.
    ///
    /// The first installation wins.
    ///
    /// # Errors
    ///
    /// Returns the rejected dispatcher if one is already installed.
    pub fn install(&self, dispatcher: Arc<MailDispatcher>) -> Result<(), Arc<MailDispatcher>> {
        self.dispatcher.set(dispatcher)
    }

    /// Returns true once a dispatcher is installed.
    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.dispatcher.get().is_some()
    }

    /// Returns the installed dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> Option<&Arc<MailDispatcher>> {
        self.dispatcher.get()
    }

    /// Host-facing send entry point.
    ///
    /// Returns `false` without a dispatcher, otherwise whatever
    /// [`MailDispatcher::send`] reports.
    pub fn mail(
        &self,
        to: impl Into<Recipients>,
        subject: &str,
        message: &str,
        headers: impl Into<HeaderLines>,
        attachments: &[&str],
    ) -> bool {
        let Some(dispatcher) = self.dispatcher.get() else {
            debug!("No mail dispatcher installed");
            return false;
        };
        dispatcher.send(to, subject, message, headers, attachments)
    }
}
