//! CLI for the `status` site checker.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use crate::checker::StatusChecker;
use crate::config::{self, Overrides};
use crate::sink::{self, Sink};

/// Checks your site's status.
#[derive(Debug, Parser)]
#[command(name = "status", version)]
#[command(about = "Checks your site's status", long_about = None)]
pub struct Cli {
    /// Absolute HTTP/HTTPS URL; only its scheme and host are requested.
    pub url: String,

    /// Append the result line to this file instead of stderr.
    #[arg(long = "logFile", visible_alias = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Read settings from this TOML file instead of ~/.config/sitestatus/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Resolve settings once, open the sink, run the check, write the line.
    pub fn run(self) -> Result<()> {
        let file_cfg = config::load(self.config.as_deref())?;
        let settings = config::resolve(
            file_cfg,
            Overrides {
                log_file: self.log_file,
            },
        );
        tracing::debug!("resolved settings: {:?}", settings);

        let mut out = Sink::open(settings.log_file.as_deref());
        let result = StatusChecker::new().check(&self.url)?;
        sink::report(&mut out, &result).context("write result line")?;
        Ok(())
    }
}

/// Parse process arguments and run. Argument errors exit through clap.
pub fn run_from_args() -> Result<()> {
    Cli::parse().run()
}

#[cfg(test)]
mod tests;
