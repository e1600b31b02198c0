//! Tests for the resolve subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_resolve_bare() {
    match parse(&["returnto", "resolve"]) {
        CliCommand::Resolve {
            url,
            search,
            fallback,
        } => {
            assert!(url.is_none());
            assert!(search.is_none());
            assert!(fallback.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_url_and_fallback() {
    match parse(&[
        "returnto",
        "resolve",
        "--url",
        "https://app.example/sign-in?returnTo=/org",
        "--fallback",
        "/custom",
    ]) {
        CliCommand::Resolve { url, fallback, .. } => {
            assert_eq!(url.as_deref(), Some("https://app.example/sign-in?returnTo=/org"));
            assert_eq!(fallback.as_deref(), Some("/custom"));
        }
        _ => panic!("expected Resolve with --url"),
    }
}

#[test]
fn cli_parse_resolve_search() {
    match parse(&["returnto", "resolve", "--search", "?returnTo=/x"]) {
        CliCommand::Resolve { search, .. } => {
            assert_eq!(search.as_deref(), Some("?returnTo=/x"));
        }
        _ => panic!("expected Resolve with --search"),
    }
}

#[test]
fn cli_parse_resolve_url_conflicts_with_search() {
    let res = Cli::try_parse_from([
        "returnto",
        "resolve",
        "--url",
        "/sign-in",
        "--search",
        "?returnTo=/x",
    ]);
    assert!(res.is_err());
}

#[test]
fn cli_parse_global_config_flag() {
    let cli = Cli::try_parse_from(["returnto", "resolve", "--config", "/tmp/r.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/r.toml")));
}
