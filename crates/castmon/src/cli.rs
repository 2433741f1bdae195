//! Command-line interface for castmon.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "castmon")]
#[command(about = "Live dashboard for a Cast speaker's eureka_info endpoint", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Status endpoint URL
    #[arg(long)]
    pub url: Option<String>,

    /// Refresh interval in seconds
    #[arg(long, value_name = "SECONDS")]
    pub interval: Option<u64>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Fetch once, write the raw JSON to FILE, and exit
    #[arg(long, value_name = "FILE")]
    pub dump: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
