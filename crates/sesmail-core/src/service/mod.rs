//! Dispatch services.
//!
//! This module turns host mail calls into provider requests.

pub mod dispatcher;
pub mod hook;
pub mod message;

pub use dispatcher::{MailDispatcher, SendPath};
pub use hook::MailHook;
pub use message::{OutgoingMail, Recipients};
