//! sbar — a terminal status bar built from pluggable components.
//!
//! Run with:  `RUST_LOG=info sbar [path/to/sbar.toml]`

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the bar itself.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("sbar v{} starting", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(sbar_config::default_path);

    sbar_terminal::run(config_path).await.map_err(Into::into)
}
