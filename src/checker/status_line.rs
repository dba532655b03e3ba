//! Parse the HTTP status line from collected header lines.

use std::fmt;

use http::StatusCode;

/// Status line of a response, e.g. `HTTP/1.1 200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLine {
    pub version: String,
    pub code: u16,
    /// Reason phrase as sent by the server; HTTP/2 and later send none.
    pub reason: Option<String>,
}

impl StatusLine {
    /// Returns `None` for anything that is not a status line (regular headers,
    /// the blank line that ends a header block).
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if !line.starts_with("HTTP/") {
            return None;
        }
        let mut parts = line.splitn(3, ' ');
        let version = parts.next()?;
        let code = parts.next()?.parse::<u16>().ok()?;
        let reason = parts
            .next()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        Some(Self {
            version: version.to_string(),
            code,
            reason,
        })
    }

    pub(crate) fn is_informational(&self) -> bool {
        (100..200).contains(&self.code)
    }
}

impl fmt::Display for StatusLine {
    /// `<code> <reason>`, falling back to the canonical reason for the code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = StatusCode::from_u16(self.code)
            .ok()
            .and_then(|c| c.canonical_reason());
        match self.reason.as_deref().or(canonical) {
            Some(reason) => write!(f, "{} {}", self.code, reason),
            None => write!(f, "{}", self.code),
        }
    }
}
