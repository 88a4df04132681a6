//! # sesmail-core
//!
//! Routes an application's outgoing mail through a transactional email
//! provider instead of local mail transport.
//!
//! This crate provides:
//! - A dispatcher choosing a structured send (no attachments) or a raw MIME
//!   send (attachments present)
//! - Provider collaborator traits and request payloads
//! - Configuration and the default-sender source
//! - A host hook replacing the conventional "send mail" entry point
//!
//! ```ignore
//! use std::sync::Arc;
//! use sesmail_core::{MailDispatcher, MailHook, StaticSender};
//!
//! let hook = MailHook::new();
//! let dispatcher = MailDispatcher::new(my_factory, StaticSender::new("admin@example.com"));
//! hook.install(Arc::new(dispatcher)).ok();
//!
//! let sent = hook.mail("user@example.com", "Welcome", "Hello!", "", &[]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod config;
mod error;
pub mod provider;
pub mod service;

pub use config::{DEFAULT_REGION, DispatcherConfig, SenderSource, StaticSender};
pub use error::{Error, Result};
pub use provider::{
    ClientFactory, ClientOptions, ProviderClient, ProviderError, SendEmailRequest,
    SendRawEmailRequest, SignatureVersion,
};
pub use service::{MailDispatcher, MailHook, OutgoingMail, Recipients, SendPath};
