//! CLI for the returnto redirect resolver.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use returnto_core::config::{self, ResolverConfig};
use returnto_core::redirect::ReturnToResolver;
use std::path::{Path, PathBuf};

use commands::{run_check, run_completions, run_config, run_resolve, LocationArgs};

/// Exit status when `check` rejects its input.
pub const EXIT_REJECTED: i32 = 2;

/// Top-level CLI for returnto.
#[derive(Debug, Parser)]
#[command(name = "returnto")]
#[command(about = "returnto: resolve safe post-login redirect paths", long_about = None)]
pub struct Cli {
    /// Read settings from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the path to redirect to after sign-in.
    Resolve {
        /// Full URL of the sign-in page (absolute or `/path?query`).
        #[arg(long, conflicts_with = "search")]
        url: Option<String>,
        /// Query string only, e.g. `?returnTo=/org`.
        #[arg(long)]
        search: Option<String>,
        /// Path to use instead of the configured fallback.
        #[arg(long, value_name = "PATH")]
        fallback: Option<String>,
    },

    /// Check a raw `returnTo` value and report whether it would be accepted.
    Check {
        /// Value as it appears in the query string (still percent-encoded).
        value: String,
        /// Print the verdict as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the config file path and the effective settings.
    Config,

    /// Print shell completions to stdout.
    Completions {
        shell: Shell,
    },
}

/// Maps a `check` verdict to the process exit code.
pub fn check_exit_code(accepted: bool) -> i32 {
    if accepted {
        0
    } else {
        EXIT_REJECTED
    }
}

fn load_config(explicit: Option<&Path>) -> Result<ResolverConfig> {
    let cfg = match explicit {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    /// Runs the parsed command and returns the process exit code.
    ///
    /// `completions` touches no config; `config` shows settings even when
    /// they would not build a resolver.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let explicit = cli.config.as_deref();

        let code = match cli.command {
            CliCommand::Completions { shell } => {
                run_completions(shell);
                0
            }
            CliCommand::Config => {
                let cfg = load_config(explicit)?;
                run_config(explicit, &cfg)?;
                0
            }
            CliCommand::Resolve {
                url,
                search,
                fallback,
            } => {
                let resolver = ReturnToResolver::from_config(&load_config(explicit)?)?;
                let location = LocationArgs { url, search };
                run_resolve(&resolver, &location, fallback.as_deref())?;
                0
            }
            CliCommand::Check { value, json } => {
                let resolver = ReturnToResolver::from_config(&load_config(explicit)?)?;
                check_exit_code(run_check(&resolver, &value, json)?)
            }
        };

        Ok(code)
    }
}

#[cfg(test)]
mod tests;
