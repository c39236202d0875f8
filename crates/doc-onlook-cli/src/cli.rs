//! CLI argument definitions using clap.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

/// doc-onlook - find doc-onlook receivers and send them files
#[derive(Parser, Debug)]
#[command(name = "doc-onlook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Request timeout in milliseconds (0 waits indefinitely)
    #[arg(long, global = true, default_value = "10000", env = "DOC_ONLOOK_TIMEOUT")]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Exit non-zero when a receiver reports an error status in its reply
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Request timeout, or `None` when disabled.
    pub fn request_timeout(&self) -> Option<Duration> {
        match self.timeout {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether receivers are listening at the given addresses
    Find(FindArgs),

    /// Send a file to a receiver
    Send(SendArgs),
}

// ==================== Find ====================

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Receiver IP addresses or hostnames
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Maximum number of receivers probed at once
    #[arg(long, default_value = "4")]
    pub concurrency: usize,
}

// ==================== Send ====================

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Receiver IP address or hostname
    pub address: String,

    /// File to send
    pub file: PathBuf,

    /// Name announced to the receiver (default: the file's name)
    #[arg(long)]
    pub name: Option<String>,

    /// File type announced to the receiver (default: the file's extension)
    #[arg(long = "type")]
    pub file_type: Option<String>,
}
