//! Folio CLI - static compiler for animated single-page developer portfolios
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   init      Create starter site.toml and folio.toml
//!   build     Compile the portfolio into dist/
//!   watch     Rebuild on every change
//!   check     Validate content without writing
//!   diff      Preview what a build would change
//!   projects  List projects as the gallery filters them
//!   contact   Validate and simulate a contact form submission

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use folio::config::BuildConfig;
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

/// Source directory the command reads, if any
fn source_dir(command: &Commands) -> Option<&Path> {
    match command {
        Commands::Init { .. } => None,
        Commands::Build { source, .. }
        | Commands::Watch { source, .. }
        | Commands::Check { source, .. }
        | Commands::Diff { source }
        | Commands::Projects { source, .. }
        | Commands::Contact { source, .. } => Some(source),
    }
}

/// `-v` when given, else `[output] verbosity` from the source's folio.toml.
/// Config errors are left for the command itself to report.
fn tracing_level(cli: &Cli) -> u8 {
    if cli.verbose > 0 {
        return cli.verbose;
    }
    source_dir(&cli.command)
        .and_then(|source| BuildConfig::load_or_default(source).ok())
        .map(|(config, _)| config.output.verbosity.level())
        .unwrap_or(0)
}

/// Diagnostics go to stderr so stdout stays clean for NDJSON.
/// `RUST_LOG` wins over `-v` and the configured verbosity.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "folio=info,warn",
        2 => "folio=debug,info",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(tracing_level(&cli));

    match cli.command {
        Commands::Init { path, force } => commands::init::cmd_init(&path, force, cli.json),
        Commands::Build {
            source,
            output,
            force,
            dry_run,
        } => commands::build::cmd_build(&source, output.as_deref(), force, dry_run, cli.json, cli.verbose),
        Commands::Watch { source, force } => commands::watch::cmd_watch(&source, force, cli.json, cli.verbose),
        Commands::Check {
            source,
            strict_warnings,
        } => commands::check::cmd_check(&source, strict_warnings, cli.json, cli.verbose),
        Commands::Diff { source } => commands::diff::cmd_diff(&source, cli.json, cli.verbose),
        Commands::Projects { source, category } => {
            commands::projects::cmd_projects(&source, &category, cli.json, cli.verbose)
        }
        Commands::Contact {
            name,
            email,
            subject,
            message,
            source,
        } => commands::contact::cmd_contact(
            &source,
            folio::contact::ContactForm {
                name,
                email,
                subject,
                message,
            },
            cli.json,
            cli.verbose,
        ),
    }
}
