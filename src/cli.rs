//! Command-line arguments for the server binary.

use clap::Parser;

/// Mergington extracurricular activities server
#[derive(Parser, Debug, Clone)]
#[command(name = "mergington", version, about = "School activities signup API")]
pub struct Args {
    /// Port to listen on
    #[arg(long, env = "MERGINGTON_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "MERGINGTON_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Directory holding the static landing page
    #[arg(long, env = "MERGINGTON_STATIC_DIR", default_value = "static")]
    pub static_dir: String,
}
