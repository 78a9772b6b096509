//! Command line interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::Theme;

#[derive(Parser, Debug)]
#[command(name = "shoplist")]
#[command(about = "Shopping lists in the terminal", version)]
pub struct Cli {
    /// Config file (default: ~/.config/shoplist/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved lists, overrides the config file
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive UI (default)
    Tui,

    /// Print the saved lists
    Lists,

    /// Export a list as JSON or as a QR code
    Export {
        /// List index (default: the active list)
        #[arg(long)]
        list: Option<usize>,

        /// Back up every list (JSON only)
        #[arg(long, conflicts_with_all = ["list", "format"])]
        all: bool,

        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Write to a file instead of stdout (PNG for --format qr)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Import a list from a JSON file, stdin (`-`), or a QR code image
    Import {
        /// JSON file, or `-` for stdin
        #[arg(conflicts_with = "qr")]
        file: Option<PathBuf>,

        /// Image containing a QR code
        #[arg(long)]
        qr: Option<PathBuf>,
    },

    /// Set the color theme
    Theme {
        #[arg(value_parser = parse_theme)]
        name: Theme,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Qr,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse()
}
