//! Watch command handler

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context as _, Result};

use folio::presentation::Settings;
use folio::watcher::{watch, WatchEvent};

use super::Context;

pub fn cmd_watch(ctx: &Context, source: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let config = ctx.load_config()?;
    let settings = Settings::resolve(&config, source, output);
    let json = ctx.json;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    if !json {
        println!("Output: {}", settings.build.output.display());
        println!("Press Ctrl+C to stop.");
    }

    watch(settings.watch_options(), running, |event| {
        if json {
            println!("{}", event.to_json());
        } else if let Some(line) = describe(&event) {
            println!("{}", line);
        }
    })?;
    Ok(())
}

fn describe(event: &WatchEvent) -> Option<String> {
    match event {
        WatchEvent::Started { source } => Some(format!("Watching {}", source)),
        WatchEvent::FileChanged { path } => Some(format!("  changed: {}", path)),
        WatchEvent::BuildStarted => None,
        WatchEvent::BuildComplete {
            projects,
            written,
            fingerprint,
        } => Some(if *written {
            format!("Built {} projects ({})", projects, fingerprint)
        } else {
            format!("No changes ({} projects)", projects)
        }),
        WatchEvent::Error { message } => Some(format!("Error: {}", message)),
        WatchEvent::Shutdown => Some("Stopped.".to_string()),
    }
}
