use crate::variables::{VariablePaths, VariableScope};
use unicode_width::UnicodeWidthChar;

/// Priority given to components that don't configure one.
pub const DEFAULT_PRIORITY: f64 = 5.0;

/// Screen-space extent, measured in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width:  f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a single line of text, counting wide glyphs as two cells.
    ///
    /// Control characters take no space; renderers drop them.
    pub fn for_text(text: &str) -> Self {
        let cells: usize = text
            .chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| ch.width().unwrap_or(0))
            .sum();
        Self::new(cells as f64, 1.0)
    }
}

/// A pluggable unit of status-bar content (clock, CPU graph, text, ...).
///
/// Components are driven by the variables system: the owning container
/// forwards the set of changed paths through [`variables_did_change`], and
/// the runtime then calls [`update`] with the current values so the
/// component can re-derive its text.
///
/// [`variables_did_change`]: StatusBarComponent::variables_did_change
/// [`update`]: StatusBarComponent::update
pub trait StatusBarComponent: Send + std::fmt::Debug {
    /// Component type identifier, e.g. `"clock"` or `"cpu"`.
    fn kind(&self) -> &str;

    /// Variable paths this component reads.
    fn dependencies(&self) -> VariablePaths {
        VariablePaths::new()
    }

    /// Called with the paths that changed since the last notification.
    fn variables_did_change(&mut self, paths: &VariablePaths);

    /// Re-derive display state from the current variable values.
    fn update(&mut self, _scope: &VariableScope) {}

    /// Current display text.
    fn render(&self) -> String;

    /// Size the component would like to occupy.
    fn intrinsic_size(&self) -> Size {
        Size::for_text(&self.render())
    }

    /// Lower priorities are hidden first when the bar runs out of room.
    fn priority(&self) -> f64 {
        DEFAULT_PRIORITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_size_counts_cells() {
        assert_eq!(Size::for_text("12:30"), Size::new(5.0, 1.0));
        assert_eq!(Size::for_text("时间").width, 4.0);
        assert_eq!(Size::for_text("").width, 0.0);
        assert_eq!(Size::for_text("ab\ncd\x1b").width, 4.0);
    }
}
