//! List command handler

use std::path::PathBuf;

use anyhow::Result;

use folio::domain::ports::AssetSource;
use folio::load_projects;
use folio::presentation::output::render_project_list;
use folio::presentation::Settings;

use super::Context;

pub fn cmd_list(ctx: &Context, source: Option<PathBuf>) -> Result<()> {
    let config = ctx.load_config()?;
    let settings = Settings::resolve(&config, source, None);

    let manifest = settings.scanner.load_manifest()?;
    let projects = load_projects(&manifest);

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else {
        print!("{}", render_project_list(&projects));
    }
    Ok(())
}
