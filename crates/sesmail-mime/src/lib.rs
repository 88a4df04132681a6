//! # sesmail-mime
//!
//! Message formatting for provider sends.
//!
//! ## Features
//!
//! - **Header lines**: prefix-matched lookups over raw `Name: Value` lines
//! - **Attachments**: whole-file loading with basename naming
//! - **Multipart documents**: `Multipart/Mixed` with a nested alternative
//!   body part and base64 attachments
//!
//! ## Quick Start
//!
//! ```ignore
//! use sesmail_mime::{Attachment, HeaderLines, MessageBuilder};
//!
//! let headers = HeaderLines::parse("From: me@example.com\n");
//!
//! let document = MessageBuilder::new()
//!     .to("recipient@example.com")
//!     .default_sender("admin@example.com")
//!     .subject("Report")
//!     .text_body("See attached.")
//!     .headers(headers)
//!     .attach(Attachment::from_file("report.pdf")?)
//!     .build();
//!
//! let envelope = document.to_base64();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod attachment;
mod builder;
mod error;

pub mod encoding;
pub mod header;

pub use attachment::Attachment;
pub use builder::{Boundary, MessageBuilder, RawEmailDocument};
pub use error::{Error, Result};
pub use header::{
    HeaderLines, extract_charset, extract_content_type, extract_from, filter_headers,
};
