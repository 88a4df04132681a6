//! Header line handling.
//!
//! Callers hand over headers as raw `Name: Value` lines. They are kept as
//! opaque text and matched by literal prefix, never parsed into name/value
//! pairs, so unconventional lines survive untouched.

use std::fmt;

/// Prefix of a sender line.
pub const FROM_PREFIX: &str = "From: ";
/// Prefix of a body content type line.
pub const CONTENT_TYPE_PREFIX: &str = "Content-Type: ";
/// Marker of a charset fragment.
pub const CHARSET_MARKER: &str = "charset=";

/// Content type used when no `Content-Type: ` line is supplied.
pub const DEFAULT_CONTENT_TYPE: &str = "Content-Type: text/plain";
/// Charset fragment used when no line carries a `charset=` parameter.
pub const DEFAULT_CHARSET: &str = "charset=UTF-8";

/// Ordered collection of raw header lines.
///
/// Duplicates are kept; lookups that need one value take the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderLines {
    lines: Vec<String>,
}

impl HeaderLines {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits a raw header block into lines.
    ///
    /// Lines end with `\n` or `\r\n`; blank lines are dropped and the rest is
    /// kept verbatim.
    #[must_use]
    pub fn parse(block: &str) -> Self {
        block
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Appends a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Returns the lines in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Returns true if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// See [`extract_from`].
    #[must_use]
    pub fn from_address<'a>(&'a self, default_sender: &'a str) -> &'a str {
        extract_from(&self.lines, default_sender)
    }

    /// See [`extract_content_type`].
    #[must_use]
    pub fn content_type(&self) -> &str {
        extract_content_type(&self.lines)
    }

    /// See [`extract_charset`].
    #[must_use]
    pub fn charset(&self) -> &str {
        extract_charset(&self.lines)
    }
}

impl FromIterator<String> for HeaderLines {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for HeaderLines {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

impl From<Vec<String>> for HeaderLines {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl From<&[&str]> for HeaderLines {
    fn from(lines: &[&str]) -> Self {
        lines.iter().copied().collect()
    }
}

impl<const N: usize> From<[&str; N]> for HeaderLines {
    fn from(lines: [&str; N]) -> Self {
        lines.into_iter().collect()
    }
}

impl From<&str> for HeaderLines {
    fn from(block: &str) -> Self {
        Self::parse(block)
    }
}

impl fmt::Display for HeaderLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Returns every line starting with `prefix`, in input order.
///
/// The match is a case-sensitive byte prefix on the whole line.
#[must_use]
pub fn filter_headers<'a, S: AsRef<str>>(headers: &'a [S], prefix: &str) -> Vec<&'a str> {
    headers
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|line| line.starts_with(prefix))
        .collect()
}

fn first_with_prefix<'a, S: AsRef<str>>(headers: &'a [S], prefix: &str) -> Option<&'a str> {
    headers
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|line| line.starts_with(prefix))
}

/// Returns the sender from the first `From: ` line, or `default_sender`.
#[must_use]
pub fn extract_from<'a, S: AsRef<str>>(headers: &'a [S], default_sender: &'a str) -> &'a str {
    first_with_prefix(headers, FROM_PREFIX)
        .map_or(default_sender, |line| &line[FROM_PREFIX.len()..])
}

/// Returns the first `Content-Type: ` line, or `Content-Type: text/plain`.
#[must_use]
pub fn extract_content_type<S: AsRef<str>>(headers: &[S]) -> &str {
    first_with_prefix(headers, CONTENT_TYPE_PREFIX).unwrap_or(DEFAULT_CONTENT_TYPE)
}

/// Returns the charset fragment (`charset=...`) of the first line carrying
/// one, or `charset=UTF-8`.
///
/// The search is a substring match on `charset=`, so both a bare
/// `charset=...` line and a `Content-Type: ...; charset=...` line qualify,
/// while a line that only mentions the word does not. The fragment ends at
/// the next `;`.
#[must_use]
pub fn extract_charset<S: AsRef<str>>(headers: &[S]) -> &str {
    headers
        .iter()
        .map(AsRef::<str>::as_ref)
        .find_map(|line| line.find(CHARSET_MARKER).map(|start| &line[start..]))
        .map_or(DEFAULT_CHARSET, |fragment| {
            fragment.split(';').next().unwrap_or(fragment).trim()
        })
}
