use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration structure parsed from `sbar.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarConfig {
    /// Global settings for the bar as a whole.
    pub global: GlobalConfig,
    /// Static user variables, published as `user.<name>`.
    pub variables: BTreeMap<String, String>,
    /// Components, in display order.
    pub components: Vec<ComponentConfig>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            global: GlobalConfig::default(),
            variables: BTreeMap::new(),
            components: vec![
                ComponentConfig::new("cpu"),
                ComponentConfig::new("memory"),
                ComponentConfig::new("clock"),
            ],
        }
    }
}

impl BarConfig {
    /// User variables keyed by their full variable path.
    pub fn user_variables(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.variables
            .iter()
            .map(|(name, value)| (format!("user.{name}"), value.clone()))
    }
}

/// Global bar settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Bar width in terminal cells.  Unset = detect from the terminal.
    pub width: Option<u16>,
    /// Gap between neighbouring components, in cells.
    pub spacing: f64,
    /// Where the packed components sit when there is room to spare.
    pub alignment: Alignment,
    /// Clock tick interval in milliseconds.
    pub tick_ms: u64,
    /// System monitor poll interval in milliseconds.
    pub system_interval_ms: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            width: None,
            spacing: 2.0,
            alignment: Alignment::Right,
            tick_ms: 1_000,
            system_interval_ms: 2_000,
        }
    }
}

/// Horizontal alignment of the component group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    #[default]
    Right,
}

/// Config block for a single component instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Component type identifier, e.g. `"clock"`, `"text"`, `"cpu"`.
    pub kind: String,
    /// Layout priority; lower values are hidden first.
    #[serde(default)]
    pub priority: Option<f64>,
    /// Arbitrary extra options forwarded to the component at construction.
    #[serde(default, flatten)]
    pub options: toml::Table,
}

impl ComponentConfig {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            priority: None,
            options: toml::Table::new(),
        }
    }

    /// Builder-style helper for setting an option.
    #[must_use]
    pub fn with_option(mut self, key: &str, value: impl Into<toml::Value>) -> Self {
        self.options.insert(key.to_string(), value.into());
        self
    }
}
