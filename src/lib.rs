//! `status`: check a site's HTTP status and latency.
//!
//! The library side is the [`StatusChecker`]; the binary wires it to
//! configuration, the result [`sink`] and the process exit code.

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod sink;
pub mod target;

pub use checker::{CheckResult, StatusChecker};
pub use error::CheckError;
pub use target::TargetUrl;
