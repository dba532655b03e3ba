//! Site status check: one blocking GET against `scheme://host`, timed up to
//! the arrival of the final response headers.
//!
//! Uses the curl crate (libcurl) with its default timeouts and no custom
//! headers. Redirects are followed like a browser would; the reported status
//! is that of the last response.

mod duration;
mod status_line;

pub use duration::format_duration;

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::CheckError;
use crate::target::TargetUrl;
use status_line::StatusLine;

/// Redirect hops followed before curl gives up.
pub const DEFAULT_MAX_REDIRECTS: u32 = 10;

/// Outcome of one successful check. Formats as the result line,
/// e.g. `example.com 200 OK (123.456ms)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub host: String,
    /// `<code> <reason>`, e.g. `200 OK`.
    pub status_text: String,
    /// From just before the request was sent to the end of the response headers.
    pub duration: Duration,
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.host,
            self.status_text,
            format_duration(self.duration)
        )
    }
}

/// Checks a site's reachability and HTTP status.
#[derive(Debug, Clone)]
pub struct StatusChecker {
    max_redirects: u32,
}

impl Default for StatusChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusChecker {
    pub fn new() -> Self {
        Self {
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }

    /// Limit the number of redirects followed; 0 reports the first response as-is.
    pub fn with_max_redirects(mut self, max_redirects: u32) -> Self {
        self.max_redirects = max_redirects;
        self
    }

    /// Normalizes `raw_url` to `scheme://host`, requests it once and measures
    /// the latency. Invalid input fails before any network activity.
    pub fn check(&self, raw_url: &str) -> Result<CheckResult, CheckError> {
        let target = TargetUrl::parse(raw_url)?;
        let site = target.normalized();
        debug!("checking {} (from {:?})", site, raw_url);

        let (status, duration) = self.fetch_status(&site)?;
        debug!(
            "{} answered {} {} after {:?}",
            site, status.version, status, duration
        );

        Ok(CheckResult {
            host: target.host,
            status_text: status.to_string(),
            duration,
        })
    }

    /// Runs the GET and returns the final status line with the time until its
    /// header block was complete. The body is never read.
    fn fetch_status(&self, site: &str) -> Result<(StatusLine, Duration), CheckError> {
        let net = |e: curl::Error| CheckError::network(site, e);

        let mut easy = curl::easy::Easy::new();
        easy.url(site).map_err(net)?;
        easy.get(true).map_err(net)?;
        easy.follow_location(self.max_redirects > 0).map_err(net)?;
        easy.max_redirections(self.max_redirects).map_err(net)?;

        let mut status: Option<StatusLine> = None;
        let mut headers_done: Option<Instant> = None;
        let started: Instant;
        let outcome = {
            let mut transfer = easy.transfer();
            transfer
                .header_function(|data| {
                    let line = String::from_utf8_lossy(data);
                    if let Some(parsed) = StatusLine::parse(&line) {
                        // A new header block (redirect hop or after 1xx) restarts the clock stop.
                        status = Some(parsed);
                        headers_done = None;
                    } else if line.trim().is_empty() {
                        if matches!(&status, Some(s) if !s.is_informational()) {
                            headers_done = Some(Instant::now());
                        }
                    }
                    true
                })
                .map_err(net)?;
            // Stop at the first body chunk.
            transfer.write_function(|_| Ok(0)).map_err(net)?;

            started = Instant::now();
            transfer.perform()
        };

        match outcome {
            Ok(()) => {}
            // Aborted by the write callback once the final headers were in.
            Err(e) if e.is_write_error() && headers_done.is_some() => {}
            Err(e) => return Err(net(e)),
        }

        let status = status
            .filter(|s| !s.is_informational())
            .ok_or_else(|| CheckError::NoStatusLine {
                target: site.to_string(),
            })?;
        let finished = headers_done.unwrap_or_else(Instant::now);
        Ok((status, finished.saturating_duration_since(started)))
    }
}
