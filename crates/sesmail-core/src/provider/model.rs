//! Provider request payloads.
//!
//! Field names serialize in the provider's PascalCase wire shape.

use serde::{Deserialize, Serialize};

/// Charset announced for subjects.
pub const SUBJECT_CHARSET: &str = "UTF-8";

/// A text value with its charset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Content {
    /// The text.
    pub data: String,
    /// Charset label.
    pub charset: String,
}

impl Content {
    /// Creates a content value.
    #[must_use]
    pub fn new(data: impl Into<String>, charset: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            charset: charset.into(),
        }
    }
}

/// Recipients of a structured send.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Destination {
    /// `To` addresses.
    pub to_addresses: Vec<String>,
}

/// Body of a structured send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Body {
    /// Plain text body.
    pub text: Content,
}

/// Subject and body of a structured send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SimpleMessage {
    /// Subject line.
    pub subject: Content,
    /// Message body.
    pub body: Body,
}

/// Structured send request (no attachments).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendEmailRequest {
    /// Sender address.
    pub source: String,
    /// Recipients.
    pub destination: Destination,
    /// Subject and body.
    pub message: SimpleMessage,
}

/// Base64 encoded MIME document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawMessage {
    /// The encoded document.
    pub data: String,
}

/// Raw send request carrying a complete MIME document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendRawEmailRequest {
    /// Envelope sender.
    pub source: String,
    /// Envelope recipients.
    pub destinations: Vec<String>,
    /// The document.
    pub raw_message: RawMessage,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_send_email_wire_shape() {
        let request = SendEmailRequest {
            source: "me@x.com".into(),
            destination: Destination {
                to_addresses: vec!["a@x.com".into()],
            },
            message: SimpleMessage {
                subject: Content::new("Hi", SUBJECT_CHARSET),
                body: Body {
                    text: Content::new("Hello", "charset=UTF-8"),
                },
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Source"], "me@x.com");
        assert_eq!(json["Destination"]["ToAddresses"][0], "a@x.com");
        assert_eq!(json["Message"]["Subject"]["Data"], "Hi");
        assert_eq!(json["Message"]["Subject"]["Charset"], "UTF-8");
        assert_eq!(json["Message"]["Body"]["Text"]["Data"], "Hello");
    }

    #[test]
    fn test_send_raw_email_wire_shape() {
        let request = SendRawEmailRequest {
            source: "admin@x.com".into(),
            destinations: vec!["a@x.com".into(), "b@x.com".into()],
            raw_message: RawMessage {
                data: "VG86IGFAeC5jb20K".into(),
            },
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"Source":"admin@x.com","Destinations":["a@x.com","b@x.com"],"#,
                r#""RawMessage":{"Data":"VG86IGFAeC5jb20K"}}"#,
            )
        );

        let back: SendRawEmailRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
