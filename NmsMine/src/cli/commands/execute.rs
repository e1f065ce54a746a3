//! Command execution implementations

use super::Commands;
use super::{atlas, build_db, dump, lookup};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::BuildDb {
                data,
                out,
                layout,
                quiet,
            } => build_db::execute(data, out, layout.as_deref(), *quiet),
            Commands::Atlas {
                data,
                assets,
                image,
                map,
                width,
                quiet,
            } => atlas::execute(data, assets, image, map, *width, *quiet),
            Commands::Dump {
                source,
                destination,
            } => dump::execute(source, destination.as_deref()),
            Commands::Lookup { data, id, layout } => lookup::execute(data, id, layout.as_deref()),
        }
    }
}
