//! Outgoing mail model and its provider request forms.

use crate::error::Result;
use crate::provider::{
    Body, Content, Destination, RawMessage, SUBJECT_CHARSET, SendEmailRequest,
    SendRawEmailRequest, SimpleMessage,
};
use sesmail_mime::{Attachment, HeaderLines, MessageBuilder, RawEmailDocument};
use std::path::PathBuf;

/// Ordered recipient list.
///
/// Built from a single address or a sequence; an empty list is passed through
/// for the provider to reject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients(Vec<String>);

impl Recipients {
    /// Returns the addresses.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Recipients {
    fn from(address: &str) -> Self {
        Self(vec![address.to_string()])
    }
}

impl From<String> for Recipients {
    fn from(address: String) -> Self {
        Self(vec![address])
    }
}

impl From<Vec<String>> for Recipients {
    fn from(addresses: Vec<String>) -> Self {
        Self(addresses)
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(addresses: Vec<&str>) -> Self {
        Self(addresses.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Recipients {
    fn from(addresses: &[&str]) -> Self {
        Self(addresses.iter().map(|a| (*a).to_string()).collect())
    }
}

impl From<&[String]> for Recipients {
    fn from(addresses: &[String]) -> Self {
        Self(addresses.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Recipients {
    fn from(addresses: [&str; N]) -> Self {
        Self(addresses.into_iter().map(str::to_string).collect())
    }
}

/// An email message to dispatch.
#[derive(Debug, Clone, Default)]
pub struct OutgoingMail {
    /// Recipient addresses.
    pub to: Vec<String>,
    /// Subject line.
    pub subject: String,
    /// Plain text body.
    pub body: Option<String>,
    /// Caller-supplied header lines.
    pub headers: HeaderLines,
    /// Files to attach, in order.
    pub attachments: Vec<PathBuf>,
}

impl OutgoingMail {
    /// Creates a new outgoing message.
    #[must_use]
    pub fn new(
        to: impl Into<Recipients>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into().into_vec(),
            subject: subject.into(),
            body: Some(body.into()),
            headers: HeaderLines::new(),
            attachments: Vec::new(),
        }
    }

    /// Appends a header line.
    #[must_use]
    pub fn header(mut self, line: impl Into<String>) -> Self {
        self.headers.push(line);
        self
    }

    /// Replaces the header lines.
    #[must_use]
    pub fn headers(mut self, headers: impl Into<HeaderLines>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Adds a file attachment.
    #[must_use]
    pub fn attach(mut self, path: impl Into<PathBuf>) -> Self {
        self.attachments.push(path.into());
        self
    }

    /// Adds several file attachments.
    #[must_use]
    pub fn attachments<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.attachments.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Returns true if the message goes out as a raw MIME send.
    #[must_use]
    pub fn has_attachments(&self) -> bool {
        !self.attachments.is_empty()
    }

    /// Builds the structured send request.
    ///
    /// `Source` honours a `From: ` header. The body charset is the raw
    /// header fragment (`charset=...`), forwarded as is.
    #[must_use]
    pub fn to_send_email_request(&self, default_sender: &str) -> SendEmailRequest {
        SendEmailRequest {
            source: self.headers.from_address(default_sender).to_string(),
            destination: Destination {
                to_addresses: self.to.clone(),
            },
            message: SimpleMessage {
                subject: Content::new(self.subject.clone(), SUBJECT_CHARSET),
                body: Body {
                    text: Content::new(
                        self.body.clone().unwrap_or_default(),
                        self.headers.charset(),
                    ),
                },
            },
        }
    }

    /// Reads every attachment and serializes the multipart document.
    ///
    /// # Errors
    ///
    /// Returns an error if any attachment cannot be read; no document is
    /// produced in that case.
    pub fn to_raw_document(&self, default_sender: &str) -> Result<RawEmailDocument> {
        let mut builder = MessageBuilder::new()
            .recipients(self.to.iter().cloned())
            .default_sender(default_sender)
            .subject(self.subject.clone())
            .headers(self.headers.clone());

        if let Some(body) = &self.body {
            builder = builder.text_body(body.clone());
        }

        for path in &self.attachments {
            builder = builder.attach(Attachment::from_file(path)?);
        }

        Ok(builder.build())
    }

    /// Builds the raw send request.
    ///
    /// The envelope `Source` is always `default_sender`, even when a
    /// `From: ` header is present; the header only shapes the document's
    /// own `From` line.
    ///
    /// # Errors
    ///
    /// Returns an error if any attachment cannot be read.
    pub fn to_send_raw_email_request(&self, default_sender: &str) -> Result<SendRawEmailRequest> {
        let document = self.to_raw_document(default_sender)?;
        Ok(SendRawEmailRequest {
            source: default_sender.to_string(),
            destinations: self.to.clone(),
            raw_message: RawMessage {
                data: document.to_base64(),
            },
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;
    use sesmail_mime::encoding::decode_base64;

    const ADMIN: &str = "admin@x.com";

    #[test]
    fn test_recipients_normalization() {
        assert_eq!(Recipients::from("a@x.com").as_slice(), ["a@x.com"]);
        assert_eq!(
            Recipients::from(["a@x.com", "b@x.com"]).into_vec(),
            vec!["a@x.com", "b@x.com"]
        );
        assert!(Recipients::from(Vec::<String>::new()).as_slice().is_empty());
    }

    #[test]
    fn test_structured_request_defaults() {
        let mail = OutgoingMail::new("a@x.com", "Hi", "Hello");
        let request = mail.to_send_email_request(ADMIN);

        assert_eq!(request.source, ADMIN);
        assert_eq!(request.destination.to_addresses, ["a@x.com"]);
        assert_eq!(request.message.subject, Content::new("Hi", "UTF-8"));
        assert_eq!(request.message.body.text.data, "Hello");
        assert_eq!(request.message.body.text.charset, "charset=UTF-8");
    }

    #[test]
    fn test_structured_request_from_header() {
        let mail = OutgoingMail::new("a@x.com", "Hi", "Hello")
            .header("From: me@x.com")
            .header("Content-Type: text/plain; charset=ISO-8859-1");
        let request = mail.to_send_email_request(ADMIN);

        assert_eq!(request.source, "me@x.com");
        assert_eq!(request.message.body.text.charset, "charset=ISO-8859-1");
    }

    #[test]
    fn test_raw_request_uses_default_sender_as_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, b"payload").unwrap();

        let mail = OutgoingMail::new(["a@x.com", "b@x.com"], "Hi", "Hello")
            .header("From: me@x.com")
            .attach(&path);
        let request = mail.to_send_raw_email_request(ADMIN).unwrap();

        assert_eq!(request.source, ADMIN);
        assert_eq!(request.destinations, ["a@x.com", "b@x.com"]);

        let decoded = decode_base64(&request.raw_message.data).unwrap();
        let document = String::from_utf8(decoded).unwrap();
        assert!(document.contains("From: me@x.com\n"));
        assert!(document.contains("To: a@x.com, b@x.com\n"));
    }

    #[test]
    fn test_raw_request_missing_attachment() {
        let mail = OutgoingMail::new("a@x.com", "Hi", "Hello").attach("/nonexistent/f.txt");
        let err = mail.to_send_raw_email_request(ADMIN).unwrap_err();
        assert!(matches!(err, Error::Mime(_)));
    }
}
