use sbar_core::{Size, StatusBarComponent, VariablePaths};

/// Fixed-width blank gap.
#[derive(Debug)]
pub struct SpacerComponent {
    width:    usize,
    priority: f64,
}

impl SpacerComponent {
    pub fn new(width: usize, priority: f64) -> Self {
        Self { width, priority }
    }
}

impl StatusBarComponent for SpacerComponent {
    fn kind(&self) -> &str {
        "spacer"
    }

    fn variables_did_change(&mut self, _paths: &VariablePaths) {}

    fn render(&self) -> String {
        " ".repeat(self.width)
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(self.width as f64, 1.0)
    }

    fn priority(&self) -> f64 {
        self.priority
    }
}
