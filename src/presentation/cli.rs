//! CLI Argument Parsing
//!
//! Global flags (--json, --verbose, --config) are inherited by all
//! subcommands. Path flags override the configured values.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Folio - portfolio asset loader and gallery manifest builder
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./folio.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Asset root override shared by every scanning command
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Directory holding project images and descriptions
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<PathBuf>,
}

/// Manifest file override
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Manifest file to write or compare against
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan assets and write the gallery manifest
    Build {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Write compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// List discovered projects
    List {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show projects by masonry column
    Columns {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Check whether the manifest on disk is up to date (exits 1 if stale)
    Diff {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Rebuild the manifest whenever assets change
    Watch {
        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the display title derived from each name
    Title {
        /// File or folder names
        #[arg(required = true)]
        names: Vec<String>,
    },
}
