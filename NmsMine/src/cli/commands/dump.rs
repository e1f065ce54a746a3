//! CLI command for dumping exml property trees as JSON

use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::formats::exml::{find_exml_files, read_exml};

pub fn execute(source: &Path, destination: Option<&Path>) -> anyhow::Result<()> {
    if source.is_dir() {
        let Some(destination) = destination else {
            anyhow::bail!("--destination is required when the source is a directory");
        };
        dump_dir(source, destination)
    } else {
        dump_file(source, destination)
    }
}

fn to_json(source: &Path) -> anyhow::Result<String> {
    let doc = read_exml(source)?;
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn dump_file(source: &Path, destination: Option<&Path>) -> anyhow::Result<()> {
    let json = to_json(source)?;
    match destination {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn dump_dir(source: &Path, destination: &Path) -> anyhow::Result<()> {
    let files = find_exml_files(source)?;
    for path in &files {
        let relative = path.strip_prefix(source)?;
        let out = destination.join(relative).with_extension("json");
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&out, to_json(path)?)
            .with_context(|| format!("Failed to write {}", out.display()))?;
        tracing::debug!("Dumped {} to {}", path.display(), out.display());
    }

    println!("Dumped {} files to {}", files.len(), destination.display());
    Ok(())
}
