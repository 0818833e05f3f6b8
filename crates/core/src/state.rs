/// Variable path holding the average CPU usage in percent.
pub const CPU_PATH: &str = "system.cpu";
/// Variable path holding used RAM in bytes.
pub const MEMORY_USED_PATH: &str = "system.memory.used";
/// Variable path holding total RAM in bytes.
pub const MEMORY_TOTAL_PATH: &str = "system.memory.total";
/// Variable path holding the current local time as RFC 3339.
pub const CLOCK_PATH: &str = "clock.now";

/// A point-in-time snapshot of system resource usage.
#[derive(Debug, Clone, Default)]
pub struct SystemSnapshot {
    /// Per-core CPU usage (0.0 – 100.0).
    pub cpu_per_core: Vec<f32>,
    /// Average CPU usage across all cores.
    pub cpu_average: f32,
    /// RAM used in bytes.
    pub ram_used: u64,
    /// Total RAM in bytes.
    pub ram_total: u64,
}

impl SystemSnapshot {
    /// RAM usage as a fraction in `[0, 1]`.
    #[must_use]
    pub fn ram_fraction(&self) -> f32 {
        if self.ram_total == 0 {
            return 0.0;
        }
        self.ram_used as f32 / self.ram_total as f32
    }

    /// The `system.*` variable updates this snapshot publishes.
    pub fn variables(&self) -> Vec<(&'static str, String)> {
        vec![
            (CPU_PATH, format!("{:.1}", self.cpu_average)),
            (MEMORY_USED_PATH, self.ram_used.to_string()),
            (MEMORY_TOTAL_PATH, self.ram_total.to_string()),
        ]
    }
}
