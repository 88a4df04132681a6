//! Multipart MIME document generation for raw sends.
//!
//! The layout is fixed: a `Multipart/Mixed` envelope holding one
//! `Multipart/Alternative` part for the body text followed by one base64 part
//! per attachment. Lines end with a bare `\n`.

use crate::attachment::Attachment;
use crate::encoding::{encode_base64, encode_base64_wrapped};
use crate::header::HeaderLines;
use rand::Rng;
use std::fmt::{self, Write as _};

/// Multipart boundary token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary(String);

impl Boundary {
    /// Generates a random boundary.
    ///
    /// The token is digits, hex and a dot, so it never needs quoting beyond
    /// the enclosing `"` and cannot collide with the derived `alt-` token.
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let seed: u32 = rng.r#gen();
        let unique: u64 = rng.r#gen::<u64>() & 0x000f_ffff_ffff_ffff;
        let entropy: u32 = rng.gen_range(10_000_000..100_000_000);
        Self(format!("{seed}{unique:013x}.{entropy}"))
    }

    /// Uses a caller-chosen token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token of the nested alternative part.
    #[must_use]
    pub fn alternative(&self) -> String {
        format!("alt-{}", self.0)
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fully serialized multipart document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEmailDocument {
    boundary: Boundary,
    text: String,
}

impl RawEmailDocument {
    /// Returns the boundary used by the envelope.
    #[must_use]
    pub const fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    /// Returns the document text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the document bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Encodes the whole document as unwrapped Base64 for transport.
    #[must_use]
    pub fn to_base64(&self) -> String {
        encode_base64(self.text.as_bytes())
    }
}

/// Builder for [`RawEmailDocument`].
///
/// `From`, the body content type and its charset all come from the caller's
/// header lines, falling back to the default sender, `text/plain` and UTF-8.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    to: Vec<String>,
    default_sender: String,
    subject: String,
    body: Option<String>,
    headers: HeaderLines,
    attachments: Vec<Attachment>,
    boundary: Option<Boundary>,
}

impl MessageBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recipient.
    #[must_use]
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    /// Adds several recipients, keeping their order.
    #[must_use]
    pub fn recipients<I, S>(mut self, recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.to.extend(recipients.into_iter().map(Into::into));
        self
    }

    /// Sets the sender used when no `From: ` line is present.
    #[must_use]
    pub fn default_sender(mut self, sender: impl Into<String>) -> Self {
        self.default_sender = sender.into();
        self
    }

    /// Sets the subject.
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    /// Sets the plain body text.
    #[must_use]
    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the caller's header lines.
    #[must_use]
    pub fn headers(mut self, headers: impl Into<HeaderLines>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Appends an attachment.
    #[must_use]
    pub fn attach(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Pins the boundary instead of generating one.
    #[must_use]
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Serializes the message.
    #[must_use]
    pub fn build(self) -> RawEmailDocument {
        let boundary = self.boundary.unwrap_or_else(Boundary::generate);
        let alternative = boundary.alternative();
        let mut doc = String::new();

        let _ = writeln!(doc, "To: {}", self.to.join(", "));
        let _ = writeln!(doc, "From: {}", self.headers.from_address(&self.default_sender));
        let _ = writeln!(doc, "Subject: {}", self.subject);
        doc.push_str("MIME-Version: 1.0\n");
        let _ = writeln!(doc, "Content-type: Multipart/Mixed; boundary=\"{boundary}\"");
        let _ = write!(doc, "\n--{boundary}\n");
        let _ = writeln!(
            doc,
            "Content-type: Multipart/Alternative; boundary=\"{alternative}\""
        );

        // An empty body still gets the alternative wrapper above.
        if let Some(body) = self.body.as_deref().filter(|b| !b.is_empty()) {
            let _ = write!(doc, "\n--{alternative}\n");
            let _ = write!(
                doc,
                "{}; {}\n\n",
                self.headers.content_type(),
                self.headers.charset()
            );
            doc.push_str(body);
            doc.push('\n');
        }

        let _ = write!(doc, "\n--{boundary}\n");

        for attachment in &self.attachments {
            let _ = write!(doc, "\n--{boundary}\n");
            let _ = writeln!(
                doc,
                "Content-Type: application/octet-stream; name=\"{}\"",
                attachment.filename
            );
            doc.push_str("Content-Disposition: attachment\n");
            doc.push_str("Content-Transfer-Encoding: base64\n");
            doc.push('\n');
            doc.push_str(&encode_base64_wrapped(&attachment.data));
            doc.push('\n');
        }

        let _ = write!(doc, "\n--{boundary}--\n");

        RawEmailDocument {
            boundary,
            text: doc,
        }
    }
}
