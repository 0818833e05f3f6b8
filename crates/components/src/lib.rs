//! Built-in status-bar components and the factory that builds them from
//! `[[components]]` config blocks.

pub mod clock;
pub mod cpu;
pub mod memory;
pub mod spacer;
pub mod text;

pub use clock::ClockComponent;
pub use cpu::CpuComponent;
pub use memory::MemoryComponent;
pub use spacer::SpacerComponent;
pub use text::TextComponent;

use sbar_config::ComponentConfig;
use sbar_core::{BarError, Result, StatusBarComponent, DEFAULT_PRIORITY};

/// Largest CPU history a `cpu` component may keep.
pub const MAX_SAMPLES: usize = 1_024;
/// Largest `spacer` width; no bar is wider than a `u16` cell count.
pub const MAX_SPACER_WIDTH: usize = u16::MAX as usize;

/// Build the component described by `config`.
pub fn build(config: &ComponentConfig) -> Result<Box<dyn StatusBarComponent>> {
    let opts = Options::new(config);
    let priority = config.priority.unwrap_or(DEFAULT_PRIORITY);

    let component: Box<dyn StatusBarComponent> = match config.kind.as_str() {
        "clock" => Box::new(ClockComponent::new(
            opts.str("format")?.unwrap_or(clock::DEFAULT_FORMAT),
            priority,
        )),
        "text" => Box::new(TextComponent::new(
            opts.str("template")?.unwrap_or_default(),
            priority,
        )),
        "spacer" => Box::new(SpacerComponent::new(
            opts.uint_at_most("width", MAX_SPACER_WIDTH)?.unwrap_or(1),
            priority,
        )),
        "cpu" => Box::new(CpuComponent::new(
            opts.uint_at_most("samples", MAX_SAMPLES)?.unwrap_or(cpu::DEFAULT_SAMPLES),
            opts.bool("graph")?.unwrap_or(false),
            priority,
        )),
        "memory" => Box::new(MemoryComponent::new(priority)),
        other => return Err(BarError::UnknownComponent(other.to_string())),
    };

    tracing::debug!(kind = %config.kind, priority, "built component");
    Ok(component)
}

/// Typed access to a component's free-form options table.
struct Options<'a> {
    kind:  &'a str,
    table: &'a toml::Table,
}

impl<'a> Options<'a> {
    fn new(config: &'a ComponentConfig) -> Self {
        Self {
            kind:  &config.kind,
            table: &config.options,
        }
    }

    fn str(&self, key: &str) -> Result<Option<&'a str>> {
        self.typed(key, "a string", toml::Value::as_str)
    }

    fn bool(&self, key: &str) -> Result<Option<bool>> {
        self.typed(key, "a boolean", toml::Value::as_bool)
    }

    fn uint(&self, key: &str) -> Result<Option<usize>> {
        self.typed(key, "a non-negative integer", |v| {
            v.as_integer().and_then(|i| usize::try_from(i).ok())
        })
    }

    fn uint_at_most(&self, key: &str, max: usize) -> Result<Option<usize>> {
        match self.uint(key)? {
            Some(value) if value > max => Err(BarError::Component(format!(
                "{}: option '{key}' must be at most {max}, got {value}",
                self.kind
            ))),
            value => Ok(value),
        }
    }

    fn typed<T>(
        &self,
        key: &str,
        expected: &str,
        get: impl Fn(&'a toml::Value) -> Option<T>,
    ) -> Result<Option<T>> {
        match self.table.get(key) {
            None => Ok(None),
            Some(value) => get(value).map(Some).ok_or_else(|| {
                BarError::Component(format!(
                    "{}: option '{key}' must be {expected}, got {value}",
                    self.kind
                ))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_every_known_kind() {
        for kind in ["clock", "text", "spacer", "cpu", "memory"] {
            let component = build(&ComponentConfig::new(kind)).unwrap();
            assert_eq!(component.kind(), kind);
            assert_eq!(component.priority(), DEFAULT_PRIORITY);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let err = build(&ComponentConfig::new("weather")).unwrap_err();
        assert!(matches!(err, BarError::UnknownComponent(k) if k == "weather"));
    }

    #[test]
    fn wrongly_typed_option_is_rejected() {
        let config = ComponentConfig::new("spacer").with_option("width", "wide");
        let err = build(&config).unwrap_err();
        assert!(matches!(err, BarError::Component(msg) if msg.contains("width")));
    }

    #[test]
    fn negative_width_is_rejected() {
        let config = ComponentConfig::new("spacer").with_option("width", -2);
        assert!(build(&config).is_err());
    }

    #[test]
    fn oversized_cpu_history_is_rejected() {
        let config = ComponentConfig::new("cpu").with_option("samples", i64::MAX);
        let err = build(&config).unwrap_err();
        assert!(matches!(err, BarError::Component(msg) if msg.contains("samples")));

        let config = ComponentConfig::new("cpu").with_option("samples", MAX_SAMPLES as i64);
        assert!(build(&config).is_ok());
    }

    #[test]
    fn oversized_spacer_is_rejected() {
        let config = ComponentConfig::new("spacer").with_option("width", i64::MAX);
        assert!(matches!(build(&config), Err(BarError::Component(_))));
    }

    #[test]
    fn options_and_priority_are_applied() {
        let mut config = ComponentConfig::new("spacer").with_option("width", 4);
        config.priority = Some(1.5);

        let component = build(&config).unwrap();

        assert_eq!(component.render(), "    ");
        assert_eq!(component.priority(), 1.5);
    }
}
