use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_API: &str = "http://localhost:8000";

#[derive(Parser, Debug)]
#[command(
    name = "empre",
    version,
    about = "Operator console for the empreendimento validation backend"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Backend base URL (default http://localhost:8000)"
    )]
    pub base_url: Option<String>,
    #[arg(long, global = true, help = "Request timeout in milliseconds")]
    pub timeout_ms: Option<u64>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit a JSON dataset file for validation
    Validate {
        file: Option<PathBuf>,
        #[arg(long, help = "Validation endpoint path (default /validar)")]
        endpoint: Option<String>,
    },
    /// List persisted records, optionally filtered by status
    List {
        #[arg(long)]
        status: Option<String>,
    },
    /// Audit which rules apply to a city/builder combination
    Rules {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        builder: Option<String>,
    },
    /// Show the known cities and builders
    Options,
    /// Interactive console session
    Shell,
}
