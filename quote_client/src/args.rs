//! Command-line arguments for the quote client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand, ValueEnum};
use quote_core::exchange::EXPORT_FILE_NAME;
use quote_core::net::{DEFAULT_SERVER_URL, REQUEST_TIMEOUT_SECS, SYNC_INTERVAL_SECS};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory holding the persisted quotes and UI state.
    #[clap(long, env = "QUOTES_DATA_DIR", default_value = "./quotes-data")]
    pub data_dir: String,

    /// Endpoint used for sync (GET) and for submitting new quotes (POST).
    #[clap(long, env = "QUOTES_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server_url: String,

    /// Maximum number of records requested per sync.
    #[clap(long)]
    pub limit: Option<usize>,

    /// Timeout for a single HTTP request, in seconds.
    #[clap(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Action to perform.
    #[command(subcommand)]
    pub command: Command,
}

/// Client actions.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show a random quote from the selected category.
    Show {
        /// Switch the category filter first; pass an empty string for all categories.
        #[clap(long)]
        category: Option<String>,
        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List every stored quote.
    List {
        /// Output format.
        #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the known categories.
    Categories,
    /// Add a new quote.
    Add {
        /// Quotation body.
        #[clap(long)]
        text: String,
        /// Category label.
        #[clap(long)]
        category: String,
        /// Do not send the new quote to the server.
        #[clap(long)]
        offline: bool,
    },
    /// Append quotes from a JSON file.
    Import {
        /// Path to a JSON array of `{text, category}` objects.
        path: String,
    },
    /// Write all quotes to a JSON file.
    Export {
        /// Destination file.
        #[clap(default_value = EXPORT_FILE_NAME)]
        path: String,
    },
    /// Run one sync cycle now.
    Sync,
    /// Keep syncing on a fixed period until Ctrl+C.
    Watch {
        /// Period between sync cycles, in seconds.
        #[clap(long, default_value_t = SYNC_INTERVAL_SECS)]
        interval_secs: u64,
    },
}

/// How quotes are printed.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
    Text,
    Json,
}
