//! Terminal front end for `sbar`.
//!
//! Owns the runtime loop and wires together all background tasks:
//! - Clock timer (publishes `clock.now`)
//! - System resource monitor (CPU, RAM)
//! - Config file watcher (live reload on change)
//!
//! Every frame is written to stdout as a single line, and only when it
//! differs from the previous one.

pub mod bar;
pub mod render;

pub use bar::Bar;
pub use render::compose_line;

use chrono::Local;
use sbar_config::{load as load_config, ConfigWatcher, GlobalConfig};
use sbar_core::{event::Message, Result};
use std::{path::PathBuf, time::Duration};
use tokio::{
    io::AsyncWriteExt,
    time::{self, MissedTickBehavior},
};
use tracing::{debug, info, warn};

/// Width used when neither the config nor `$COLUMNS` says otherwise.
const FALLBACK_WIDTH: usize = 80;

/// Bar width in cells: `global.width`, else `$COLUMNS`, else 80.
pub fn bar_width(global: &GlobalConfig) -> usize {
    global.width.map(usize::from).unwrap_or_else(|| {
        std::env::var("COLUMNS")
            .ok()
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(FALLBACK_WIDTH)
    })
}

/// Run the bar until Ctrl-C.
pub async fn run(config_path: PathBuf) -> Result<()> {
    let config = load_config(&config_path)?;
    let width = bar_width(&config.global);
    let system_interval = config.global.system_interval_ms;

    let mut bar = Bar::from_config(config, width)?.with_config_path(&config_path);
    let mut tick_ms = bar.config().global.tick_ms;
    let mut ticker = new_ticker(tick_ms);

    let mut snapshots = sbar_system::spawn_monitor(system_interval);
    let (watcher, mut reloads) = ConfigWatcher::spawn(&config_path);
    debug!(path = %watcher.path().display(), "live reload enabled");

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut stdout = tokio::io::stdout();

    loop {
        let message = tokio::select! {
            _ = ticker.tick() => Message::Tick(Local::now()),
            Some(snapshot) = snapshots.recv() => Message::SystemSnapshot(snapshot),
            Some(()) = reloads.recv() => Message::ConfigReloaded,
            result = &mut shutdown => {
                if let Err(e) = result {
                    warn!("Ctrl-C handler failed: {e}");
                }
                Message::Shutdown
            }
        };

        if matches!(message, Message::Shutdown) {
            info!("Shutting down");
            break;
        }

        if !bar.handle(message) {
            continue;
        }

        if bar.config().global.tick_ms != tick_ms {
            tick_ms = bar.config().global.tick_ms;
            ticker = new_ticker(tick_ms);
        }

        if let Some(frame) = bar.take_frame() {
            stdout.write_all(frame.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    Ok(())
}

fn new_ticker(tick_ms: u64) -> time::Interval {
    let mut ticker = time::interval(Duration::from_millis(tick_ms.max(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}
