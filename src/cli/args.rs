use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode binary data to text
    Encode(EncodeArgs),

    /// Decode text back to binary data
    Decode(DecodeArgs),

    /// Convert a GUID to or from its 22-character short form
    Guid {
        #[command(subcommand)]
        action: GuidAction,
    },

    /// Convert a signed 64-bit integer to or from its 11-character short form
    Int64 {
        #[command(subcommand)]
        action: Int64Action,
    },

    /// Show dictionaries and effective settings
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Dictionary to use (default from settings)
    #[arg(short = 'd', long)]
    pub dictionary: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Dictionary to decode from (default from settings)
    #[arg(short = 'd', long)]
    pub dictionary: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum GuidAction {
    /// Canonical GUID (e.g. 53dd0ae5-d410-4056-8010-6c3ca6f2ec13) to short form
    Encode {
        guid: String,
    },
    /// Short form to canonical GUID
    Decode {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum Int64Action {
    /// Integer to short form
    Encode {
        #[arg(allow_hyphen_values = true)]
        value: i64,
    },
    /// Short form to integer
    Decode {
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available options
    List {
        /// What to list
        #[arg(value_name = "TYPE")]
        category: Option<ConfigCategory>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show details for a specific dictionary
    Show {
        /// Dictionary name
        dictionary: String,
    },
}

/// Categories for config list command
#[derive(Clone, ValueEnum, Debug)]
pub enum ConfigCategory {
    Dictionaries,
    Settings,
}
