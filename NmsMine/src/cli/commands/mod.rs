use clap::Subcommand;
use std::path::PathBuf;

pub mod atlas;
pub mod build_db;
pub mod dump;
pub mod execute;
pub mod lookup;

#[derive(Subcommand)]
pub enum Commands {
    /// Build the item database from an unpacked data directory
    BuildDb {
        /// Unpacked game data directory
        #[arg(short, long)]
        data: PathBuf,

        /// Output JSON file
        #[arg(short, long)]
        out: PathBuf,

        /// Data layout TOML (defaults to the bundled layout)
        #[arg(short, long)]
        layout: Option<PathBuf>,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Pack item icons into a sprite atlas
    Atlas {
        /// Item database JSON file
        #[arg(short, long)]
        data: PathBuf,

        /// Directory of PNG icons, laid out by icon id
        #[arg(short, long)]
        assets: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        image: PathBuf,

        /// Output JSON map file
        #[arg(short, long)]
        map: PathBuf,

        /// Cell width in pixels
        #[arg(short, long, default_value_t = crate::atlas::DEFAULT_CELL_WIDTH)]
        width: u32,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Decode exml files to JSON property trees
    Dump {
        /// Source exml file or directory
        #[arg(short, long)]
        source: PathBuf,

        /// Output file, or output directory when the source is a directory
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },

    /// Look up a localized string
    Lookup {
        /// Unpacked game data directory
        #[arg(short, long)]
        data: PathBuf,

        /// String id, e.g. UI_FUEL_1_NAME
        #[arg(long)]
        id: String,

        /// Data layout TOML (defaults to the bundled layout)
        #[arg(short, long)]
        layout: Option<PathBuf>,
    },
}
