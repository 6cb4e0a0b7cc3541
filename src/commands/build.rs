//! Build command handler

use std::path::PathBuf;

use anyhow::Result;

use folio::presentation::{create_build_use_case, Settings};

use super::Context;

pub fn cmd_build(
    ctx: &Context,
    source: Option<PathBuf>,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<()> {
    let config = ctx.load_config()?;
    let mut settings = Settings::resolve(&config, source, output);
    if compact {
        settings.build = settings.build.with_pretty(false);
    }

    let use_case = create_build_use_case(&settings);
    let result = use_case.execute(&settings.build)?;

    if ctx.json {
        let event = serde_json::json!({
            "event": "build",
            "output": result.output.display().to_string(),
            "projects": result.manifest.projects.len(),
            "written": result.written,
            "fingerprint": result.manifest.fingerprint,
        });
        println!("{}", serde_json::to_string(&event)?);
        return Ok(());
    }

    let count = result.manifest.projects.len();
    if result.written {
        println!(
            "Wrote {} project{} to {}",
            count,
            if count == 1 { "" } else { "s" },
            result.output.display()
        );
    } else {
        println!("{} is up to date", result.output.display());
    }
    println!("Fingerprint: {}", result.manifest.fingerprint);
    Ok(())
}
