use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration. Every flag can also be supplied through the
/// environment (or a `.env` file loaded by dotenvy before parsing).
#[derive(Debug, Clone, Parser)]
#[command(name = "st")]
#[command(about = "Tiny URL shortener: add links at /add, follow them at /:name", long_about = None)]
pub struct AppConfig {
    /// Port on which to start the server
    #[arg(long, env = "ST_PORT", default_value_t = 8080)]
    pub port: u16,

    /// File in which to store the SQLite link db
    #[arg(long, env = "ST_DB", default_value = "st.sqlite3")]
    pub db: PathBuf,
}
