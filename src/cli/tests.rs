use super::Cli;
use clap::Parser;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url_only() {
    let cli = parse(&["status", "https://example.com/page?x=1"]);
    assert_eq!(cli.url, "https://example.com/page?x=1");
    assert!(cli.log_file.is_none());
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_log_file() {
    let cli = parse(&["status", "https://example.com", "--logFile", "/tmp/out.log"]);
    assert_eq!(cli.log_file.as_deref(), Some("/tmp/out.log"));
}

#[test]
fn cli_parse_log_file_before_url() {
    let cli = parse(&["status", "--logFile=/tmp/out.log", "https://example.com"]);
    assert_eq!(cli.url, "https://example.com");
    assert_eq!(cli.log_file.as_deref(), Some("/tmp/out.log"));
}

#[test]
fn cli_parse_log_file_alias() {
    let cli = parse(&["status", "https://example.com", "--log-file", "/tmp/a.log"]);
    assert_eq!(cli.log_file.as_deref(), Some("/tmp/a.log"));
}

#[test]
fn cli_parse_explicit_empty_log_file() {
    let cli = parse(&["status", "https://example.com", "--logFile", ""]);
    assert_eq!(cli.log_file.as_deref(), Some(""));
}

#[test]
fn cli_parse_config_path() {
    let cli = parse(&["status", "https://example.com", "--config", "/etc/status.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/status.toml")));
}

#[test]
fn cli_requires_url() {
    assert!(Cli::try_parse_from(["status"]).is_err());
}

#[test]
fn cli_rejects_extra_positional() {
    assert!(Cli::try_parse_from(["status", "https://a.example", "https://b.example"]).is_err());
}
