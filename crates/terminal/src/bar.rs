use crate::render::compose_line;
use sbar_config::{load as load_config, BarConfig};
use sbar_core::{
    event::Message, state::CLOCK_PATH, Result, StatusBarContainerView, VariablePaths,
    VariableScope,
};
use sbar_layout::StatusBarLayout;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Prefix of variables seeded from the `[variables]` config table.
const USER_PREFIX: &str = "user.";

/// The running bar: one container per configured component, the shared
/// variable scope and the current layout.
#[derive(Debug)]
pub struct Bar {
    config:      BarConfig,
    config_path: Option<PathBuf>,
    width:       usize,
    layout:      StatusBarLayout,
    containers:  Vec<StatusBarContainerView>,
    visible:     Vec<usize>,
    scope:       VariableScope,
    last_frame:  Option<String>,
}

impl Bar {
    /// Build a bar `width` cells wide from `config`.
    pub fn from_config(config: BarConfig, width: usize) -> Result<Self> {
        Self::with_scope(config, width, VariableScope::new())
    }

    fn with_scope(config: BarConfig, width: usize, mut scope: VariableScope) -> Result<Self> {
        let containers = config
            .components
            .iter()
            .map(|c| sbar_components::build(c).map(StatusBarContainerView::new))
            .collect::<Result<Vec<_>>>()?;

        scope.apply(config.user_variables());

        let layout = StatusBarLayout::from_config(&config.global, width as f64);
        let mut bar = Self {
            config,
            config_path: None,
            width,
            layout,
            containers,
            visible: Vec::new(),
            scope,
            last_frame: None,
        };

        // New components start dirty, so a plain update seeds them.
        for container in &mut bar.containers {
            container.update(&bar.scope);
        }
        bar.relayout();

        info!(components = bar.containers.len(), width, "bar ready");
        Ok(bar)
    }

    /// Remember where the config came from so `ConfigReloaded` can re-read it.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    pub fn scope(&self) -> &VariableScope {
        &self.scope
    }

    pub fn containers(&self) -> &[StatusBarContainerView] {
        &self.containers
    }

    /// Indices of containers that survived the last layout pass.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Apply `message`.  Returns `true` when the bar needs a redraw.
    pub fn handle(&mut self, message: Message) -> bool {
        match message {
            Message::Tick(now) => self.publish([(CLOCK_PATH, now.to_rfc3339())]),
            Message::SystemSnapshot(snapshot) => self.publish(snapshot.variables()),
            Message::ConfigReloaded => self.reload(),
            Message::Shutdown => false,
        }
    }

    /// Write variable values and notify every container of what changed.
    pub fn publish<I, K, V>(&mut self, updates: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let changed = self.scope.apply(updates);
        if changed.is_empty() {
            return false;
        }
        self.notify(&changed);
        true
    }

    fn notify(&mut self, changed: &VariablePaths) {
        debug!(?changed, "variables changed");
        for container in &mut self.containers {
            container.variables_did_change(changed);
            container.update(&self.scope);
        }
        self.relayout();
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width;
        self.layout.set_width(width as f64);
        self.relayout();
    }

    fn relayout(&mut self) {
        self.visible = self.layout.update(&mut self.containers);
    }

    fn reload(&mut self) -> bool {
        let Some(path) = self.config_path.clone() else {
            warn!("Config reload requested but the bar was not loaded from a file");
            return false;
        };

        match self.rebuild(&path) {
            Ok(bar) => {
                *self = bar.with_config_path(path);
                info!("Config reloaded");
                true
            }
            Err(e) => {
                error!("Config reload failed; keeping current bar: {e}");
                false
            }
        }
    }

    fn rebuild(&self, path: &Path) -> Result<Self> {
        let config = load_config(path)?;
        let width = config.global.width.map(usize::from).unwrap_or(self.width);

        let mut scope = self.scope.clone();
        for stale in scope.paths().iter().filter(|p| p.starts_with(USER_PREFIX)) {
            scope.unset(stale);
        }

        Self::with_scope(config, width, scope)
    }

    /// The current bar line.
    pub fn frame(&self) -> String {
        compose_line(self.width, &self.containers, &self.visible)
    }

    /// The current bar line, or `None` if it matches the last one taken.
    pub fn take_frame(&mut self) -> Option<String> {
        let frame = self.frame();
        if self.last_frame.as_deref() == Some(frame.as_str()) {
            return None;
        }
        self.last_frame = Some(frame.clone());
        Some(frame)
    }
}
