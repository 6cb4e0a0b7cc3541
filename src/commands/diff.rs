//! Diff command handler
//!
//! Returns whether the manifest on disk matches a fresh build; the caller
//! maps a stale or missing manifest to exit code 1.

use std::path::PathBuf;

use anyhow::Result;

use folio::application::DiffOutcome;
use folio::presentation::{create_build_use_case, Settings};

use super::Context;

pub fn cmd_diff(ctx: &Context, source: Option<PathBuf>, output: Option<PathBuf>) -> Result<bool> {
    let config = ctx.load_config()?;
    let settings = Settings::resolve(&config, source, output);

    let use_case = create_build_use_case(&settings);
    let (manifest, outcome) = use_case.diff(&settings.build)?;
    let path = settings.build.output.display().to_string();

    if ctx.json {
        let status = match &outcome {
            DiffOutcome::UpToDate => "up_to_date",
            DiffOutcome::Missing => "missing",
            DiffOutcome::Stale { .. } => "stale",
        };
        let event = serde_json::json!({
            "event": "diff",
            "output": path,
            "status": status,
            "projects": manifest.projects.len(),
            "fingerprint": manifest.fingerprint,
        });
        println!("{}", serde_json::to_string(&event)?);
        return Ok(outcome.is_up_to_date());
    }

    match &outcome {
        DiffOutcome::UpToDate => println!("{} is up to date", path),
        DiffOutcome::Missing => println!("{} does not exist; run `folio build`", path),
        DiffOutcome::Stale { diff } => {
            print!("{}", diff);
            println!("{} is stale; run `folio build`", path);
        }
    }
    Ok(outcome.is_up_to_date())
}
