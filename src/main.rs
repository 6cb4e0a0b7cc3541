//! Folio CLI - portfolio project loader
//!
//! Usage: folio <COMMAND>
//!
//! Commands:
//!   build    Scan assets and write the gallery manifest
//!   list     List discovered projects
//!   columns  Show projects by masonry column
//!   diff     Check whether the manifest on disk is up to date
//!   watch    Rebuild the manifest whenever assets change
//!   title    Print the display title derived from a name

use anyhow::Result;
use clap::Parser;

use folio::presentation::{init_logging, Cli, Commands};

mod commands;

use commands::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = Context {
        json: cli.json,
        config: cli.config,
    };

    match cli.command {
        Commands::Build {
            source,
            output,
            compact,
        } => commands::build::cmd_build(&ctx, source.source, output.output, compact),
        Commands::List { source } => commands::list::cmd_list(&ctx, source.source),
        Commands::Columns { source } => commands::columns::cmd_columns(&ctx, source.source),
        Commands::Diff { source, output } => {
            let up_to_date = commands::diff::cmd_diff(&ctx, source.source, output.output)?;
            if !up_to_date {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Watch { source, output } => {
            commands::watch::cmd_watch(&ctx, source.source, output.output)
        }
        Commands::Title { names } => commands::title::cmd_title(&ctx, &names),
    }
}
