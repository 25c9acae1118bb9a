//! mergington: school activities signup server.
//!
//! Usage:
//!   mergington [--port 8000] [--bind 0.0.0.0] [--static-dir static]
//!
//! Environment variables:
//!   MERGINGTON_PORT - Port to listen on (default: 8000)
//!   MERGINGTON_BIND - Bind address (default: 0.0.0.0)
//!   MERGINGTON_STATIC_DIR - Static asset directory (default: static)

use clap::Parser;
use mergington::catalog::ActivityCatalog;
use mergington::roster::UserDirectory;
use mergington::seed;
use mergington::server::{run, AppState, ServerConfig};
use mergington::Args;

#[tokio::main]
async fn main() {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let roster = UserDirectory::new(seed::users());
    let catalog = ActivityCatalog::new(seed::activities());
    eprintln!(
        "[server] Seeded {} users and {} activities",
        roster.user_count(),
        catalog.activity_count()
    );

    let state = AppState::new(roster, catalog);
    let config = ServerConfig {
        bind: args.bind,
        port: args.port,
        static_dir: args.static_dir,
    };

    if let Err(e) = run(config, state).await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}
