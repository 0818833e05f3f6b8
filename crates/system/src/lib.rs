pub mod cpu;
pub mod memory;

pub use cpu::CpuHistory;
pub use memory::format_bytes;

use sbar_core::state::SystemSnapshot;
use std::time::Duration;
use sysinfo::System;
use tokio::sync::mpsc;
use tokio::time;

/// Spawn a background Tokio task that polls CPU and memory every
/// `interval_ms` milliseconds and forwards [`SystemSnapshot`]s through the
/// returned channel.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_monitor(interval_ms: u64) -> mpsc::Receiver<SystemSnapshot> {
    let (tx, rx) = mpsc::channel(4);
    // sysinfo needs a minimum gap between CPU refreshes to report usage.
    let interval = Duration::from_millis(interval_ms).max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

    tokio::spawn(async move {
        let mut sys    = System::new();
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            sys.refresh_cpu_usage();
            sys.refresh_memory();

            let snapshot = take_snapshot(&sys);
            tracing::trace!(cpu = snapshot.cpu_average, "system snapshot");

            if tx.send(snapshot).await.is_err() {
                tracing::debug!("system monitor receiver dropped; stopping");
                break;
            }
        }
    });

    rx
}

fn take_snapshot(sys: &System) -> SystemSnapshot {
    let cpu_per_core: Vec<f32> = sys.cpus().iter().map(|c| c.cpu_usage()).collect();
    let cpu_average = average(&cpu_per_core);

    SystemSnapshot {
        cpu_per_core,
        cpu_average,
        ram_used:  sys.used_memory(),
        ram_total: sys.total_memory(),
    }
}

fn average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
