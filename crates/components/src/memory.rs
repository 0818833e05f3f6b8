use sbar_core::{
    state::{MEMORY_TOTAL_PATH, MEMORY_USED_PATH},
    StatusBarComponent, VariablePaths, VariableScope,
};
use sbar_system::format_bytes;

/// Displays RAM usage as `used / total`.
#[derive(Debug)]
pub struct MemoryComponent {
    priority: f64,
    text:     String,
    dirty:    bool,
}

impl MemoryComponent {
    pub fn new(priority: f64) -> Self {
        Self {
            priority,
            text: String::new(),
            dirty: true,
        }
    }
}

impl StatusBarComponent for MemoryComponent {
    fn kind(&self) -> &str {
        "memory"
    }

    fn dependencies(&self) -> VariablePaths {
        VariablePaths::from([MEMORY_USED_PATH.to_string(), MEMORY_TOTAL_PATH.to_string()])
    }

    fn variables_did_change(&mut self, paths: &VariablePaths) {
        self.dirty |= paths.contains(MEMORY_USED_PATH) || paths.contains(MEMORY_TOTAL_PATH);
    }

    fn update(&mut self, scope: &VariableScope) {
        if !std::mem::take(&mut self.dirty) {
            return;
        }
        let read = |path| scope.get(path).and_then(|v| v.parse::<u64>().ok());
        self.text = match (read(MEMORY_USED_PATH), read(MEMORY_TOTAL_PATH)) {
            (Some(used), Some(total)) => {
                format!("MEM {} / {}", format_bytes(used), format_bytes(total))
            }
            _ => String::new(),
        };
    }

    fn render(&self) -> String {
        self.text.clone()
    }

    fn priority(&self) -> f64 {
        self.priority
    }
}
