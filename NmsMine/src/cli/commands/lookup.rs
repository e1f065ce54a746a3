//! CLI command for looking up localized strings

use std::path::Path;

use super::build_db::load_layout;
use crate::pipeline::ExportPipeline;

pub fn execute(data: &Path, id: &str, layout: Option<&Path>) -> anyhow::Result<()> {
    let layout = load_layout(data, layout)?;
    let strings = ExportPipeline::new(layout).localize()?.into_strings();

    match strings.get(id) {
        Some(text) => println!("{text}"),
        None => anyhow::bail!("No string with id '{id}' ({} strings loaded)", strings.len()),
    }
    Ok(())
}
