//! Title command handler

use anyhow::Result;

use folio::filename_to_title;

use super::Context;

pub fn cmd_title(ctx: &Context, names: &[String]) -> Result<()> {
    for name in names {
        let title = filename_to_title(name);
        if ctx.json {
            let line = serde_json::json!({ "name": name, "title": title });
            println!("{}", serde_json::to_string(&line)?);
        } else {
            println!("{}", title);
        }
    }
    Ok(())
}
