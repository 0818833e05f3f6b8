use chrono::{DateTime, FixedOffset};
use sbar_core::{state::CLOCK_PATH, StatusBarComponent, VariablePaths, VariableScope};

pub const DEFAULT_FORMAT: &str = "%H:%M";

/// Displays the time published in `clock.now`.
///
/// The runtime writes an RFC 3339 timestamp on every tick; this component
/// only re-formats it when that path is reported as changed.
#[derive(Debug)]
pub struct ClockComponent {
    format:   String,
    priority: f64,
    text:     String,
    dirty:    bool,
}

impl ClockComponent {
    pub fn new(format: impl Into<String>, priority: f64) -> Self {
        Self {
            format: format.into(),
            priority,
            text: String::new(),
            dirty: true,
        }
    }

    fn format_time(&self, raw: &str) -> Option<String> {
        use std::fmt::Write;

        let time = DateTime::<FixedOffset>::parse_from_rfc3339(raw).ok()?;
        let mut out = String::new();
        // chrono reports bad format specifiers through fmt::Error.
        write!(out, "{}", time.format(&self.format)).ok()?;
        Some(out)
    }
}

impl StatusBarComponent for ClockComponent {
    fn kind(&self) -> &str {
        "clock"
    }

    fn dependencies(&self) -> VariablePaths {
        VariablePaths::from([CLOCK_PATH.to_string()])
    }

    fn variables_did_change(&mut self, paths: &VariablePaths) {
        self.dirty |= paths.contains(CLOCK_PATH);
    }

    fn update(&mut self, scope: &VariableScope) {
        if !std::mem::take(&mut self.dirty) {
            return;
        }
        self.text = match scope.get(CLOCK_PATH) {
            Some(raw) => self.format_time(raw).unwrap_or_else(|| {
                tracing::warn!(format = %self.format, "cannot format clock value '{raw}'");
                String::new()
            }),
            None => String::new(),
        };
    }

    fn render(&self) -> String {
        self.text.clone()
    }

    fn priority(&self) -> f64 {
        self.priority
    }
}
