use sbar_core::{state::CPU_PATH, StatusBarComponent, VariablePaths, VariableScope};
use sbar_system::CpuHistory;

/// Samples kept for the graph when `samples` isn't configured.
pub const DEFAULT_SAMPLES: usize = 10;

/// Displays CPU usage, optionally followed by a sparkline of recent samples.
///
/// Each change of `system.cpu` pushes one sample into the history.
#[derive(Debug)]
pub struct CpuComponent {
    history:  CpuHistory,
    graph:    bool,
    priority: f64,
    pending:  bool,
}

impl CpuComponent {
    pub fn new(samples: usize, graph: bool, priority: f64) -> Self {
        Self {
            history: CpuHistory::new(samples),
            graph,
            priority,
            pending: true,
        }
    }

    pub fn history(&self) -> &CpuHistory {
        &self.history
    }
}

impl StatusBarComponent for CpuComponent {
    fn kind(&self) -> &str {
        "cpu"
    }

    fn dependencies(&self) -> VariablePaths {
        VariablePaths::from([CPU_PATH.to_string()])
    }

    fn variables_did_change(&mut self, paths: &VariablePaths) {
        self.pending |= paths.contains(CPU_PATH);
    }

    fn update(&mut self, scope: &VariableScope) {
        if !std::mem::take(&mut self.pending) {
            return;
        }
        match scope.get(CPU_PATH).map(str::parse::<f32>) {
            Some(Ok(value)) => self.history.push(value),
            Some(Err(e)) => tracing::warn!("ignoring malformed {CPU_PATH} value: {e}"),
            None => {}
        }
    }

    fn render(&self) -> String {
        let Some(latest) = self.history.latest() else {
            return String::new();
        };
        if self.graph {
            format!("CPU {latest:>3.0}% {}", self.history.sparkline())
        } else {
            format!("CPU {latest:>3.0}%")
        }
    }

    fn priority(&self) -> f64 {
        self.priority
    }
}
