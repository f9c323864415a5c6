use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "wsmv")]
#[command(
    about = "Relocate VS Code-style workspace storage after project folders move",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Storage root holding the per-workspace bundles
    /// (defaults to the product's workspaceStorage directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Editor product the default storage root is derived from
    /// (Code, Cursor, VSCodium, ...)
    #[arg(long, global = true, default_value = "Code")]
    pub product: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List workspace storage bundles and where they point
    #[command(alias = "ls")]
    List {
        /// Only show bundles whose location contains this fragment
        #[arg(long)]
        find: Option<String>,
    },

    /// Migrate bundles for folders moved from one path prefix to another
    Migrate {
        /// Old path prefix (plain substring, not a pattern)
        #[arg(long)]
        find: String,

        /// New path prefix the folders were moved under
        #[arg(long)]
        replace: String,

        /// Report what would happen without touching anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Re-encode malformed path fields in workspace.json files
    Repair {
        /// Report what would be fixed without writing
        #[arg(long)]
        dry_run: bool,
    },
}
