use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Folio - static compiler for animated single-page developer portfolios
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create site.toml and folio.toml with starter content
    Init {
        /// Directory to initialize
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Check and compile the portfolio into the output directory
    Build {
        /// Directory containing site.toml
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Output directory (overrides folio.toml and FOLIO_OUTPUT)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rewrite files even when unchanged
        #[arg(short, long)]
        force: bool,

        /// Dry run - show what would be written
        #[arg(long)]
        dry_run: bool,
    },

    /// Rebuild whenever content, config or static files change
    Watch {
        /// Directory containing site.toml
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Rewrite files on every rebuild
        #[arg(short, long)]
        force: bool,
    },

    /// Validate site.toml and folio.toml without writing anything
    Check {
        /// Directory containing site.toml
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Treat warnings as errors
        #[arg(long)]
        strict_warnings: bool,
    },

    /// Preview what a build would change in the output directory
    Diff {
        /// Directory containing site.toml
        #[arg(short, long, default_value = ".")]
        source: PathBuf,
    },

    /// List projects as the gallery shows them
    Projects {
        /// Directory containing site.toml
        #[arg(short, long, default_value = ".")]
        source: PathBuf,

        /// Category filter ("All" shows every project)
        #[arg(short, long, default_value = folio::projects::ALL_CATEGORIES)]
        category: String,
    },

    /// Validate and simulate a contact form submission
    Contact {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        subject: String,

        #[arg(long, default_value = "")]
        message: String,

        /// Directory containing site.toml (for the recipient address)
        #[arg(short, long, default_value = ".")]
        source: PathBuf,
    },
}
