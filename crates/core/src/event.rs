use crate::state::SystemSnapshot;
use chrono::{DateTime, Local};

/// All messages (events) that can flow through the runtime loop.
///
/// Sources:
/// - Timer                → `Tick`
/// - System monitor task  → `SystemSnapshot`
/// - Config watcher task  → `ConfigReloaded`
/// - Ctrl-C               → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic timer tick carrying the current local time.
    Tick(DateTime<Local>),
    /// Fresh system resource snapshot from the background monitor task.
    SystemSnapshot(SystemSnapshot),
    /// Config file changed on disk.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}
