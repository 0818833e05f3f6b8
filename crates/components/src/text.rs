use sbar_core::{template_dependencies, StatusBarComponent, VariablePaths, VariableScope};

/// Displays an interpolated template such as `"\(user.host) \(system.cpu)%"`.
#[derive(Debug)]
pub struct TextComponent {
    template:     String,
    dependencies: VariablePaths,
    priority:     f64,
    text:         String,
    dirty:        bool,
}

impl TextComponent {
    pub fn new(template: impl Into<String>, priority: f64) -> Self {
        let template = template.into();
        Self {
            dependencies: template_dependencies(&template),
            template,
            priority,
            text: String::new(),
            dirty: true,
        }
    }
}

impl StatusBarComponent for TextComponent {
    fn kind(&self) -> &str {
        "text"
    }

    fn dependencies(&self) -> VariablePaths {
        self.dependencies.clone()
    }

    fn variables_did_change(&mut self, paths: &VariablePaths) {
        self.dirty |= !self.dependencies.is_disjoint(paths);
    }

    fn update(&mut self, scope: &VariableScope) {
        if std::mem::take(&mut self.dirty) {
            self.text = scope.interpolate(&self.template);
        }
    }

    fn render(&self) -> String {
        self.text.clone()
    }

    fn priority(&self) -> f64 {
        self.priority
    }
}
