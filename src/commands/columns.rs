//! Columns command handler

use std::path::PathBuf;

use anyhow::Result;

use folio::domain::ports::AssetSource;
use folio::presentation::output::render_columns;
use folio::presentation::Settings;
use folio::{load_projects, project_columns};

use super::Context;

pub fn cmd_columns(ctx: &Context, source: Option<PathBuf>) -> Result<()> {
    let config = ctx.load_config()?;
    let settings = Settings::resolve(&config, source, None);

    let manifest = settings.scanner.load_manifest()?;
    let projects = load_projects(&manifest);
    let columns = project_columns(&projects);

    if ctx.json {
        let ids: Vec<Vec<u32>> = columns
            .iter()
            .map(|lane| lane.iter().map(|p| p.id().get()).collect())
            .collect();
        println!("{}", serde_json::to_string(&ids)?);
    } else {
        print!("{}", render_columns(&columns));
    }
    Ok(())
}
