//! Layout pass for the status bar.
//!
//! Decides which containers fit and writes each one's `desired_width` and
//! `desired_origin`.  Renderers read those hints back; nothing here touches
//! what a component draws.

use sbar_config::{Alignment, GlobalConfig};
use sbar_core::StatusBarContainerView;

/// Inputs to a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutSettings {
    /// Total bar width.
    pub width:     f64,
    /// Gap between neighbouring visible containers.
    pub spacing:   f64,
    pub alignment: Alignment,
}

/// Packs containers into a single row, hiding low-priority ones on overflow.
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    settings: LayoutSettings,
}

impl StatusBarLayout {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    /// Build a layout from the `[global]` config section and the bar width.
    pub fn from_config(config: &GlobalConfig, width: f64) -> Self {
        Self::new(LayoutSettings {
            width,
            spacing: config.spacing.max(0.0),
            alignment: config.alignment,
        })
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn set_width(&mut self, width: f64) {
        self.settings.width = width;
    }

    /// Assign layout hints to every container and return the indices of the
    /// visible ones, in display order.
    pub fn update(&self, containers: &mut [StatusBarContainerView]) -> Vec<usize> {
        let widths: Vec<f64> = containers
            .iter()
            .map(|c| c.component().intrinsic_size().width.max(0.0))
            .collect();
        let priorities: Vec<f64> = containers.iter().map(|c| c.component().priority()).collect();

        let mut visible: Vec<usize> = (0..containers.len()).collect();
        while !visible.is_empty() && self.used_width(&visible, &widths) > self.settings.width {
            let victim = lowest_priority(&visible, &priorities);
            tracing::debug!(
                kind = containers[visible[victim]].component().kind(),
                "hiding component; bar is full"
            );
            visible.remove(victim);
        }

        for container in containers.iter_mut() {
            container.set_desired_width(0.0);
            container.set_desired_origin(0.0);
        }

        let slack = (self.settings.width - self.used_width(&visible, &widths)).max(0.0);
        let mut origin = match self.settings.alignment {
            Alignment::Left => 0.0,
            Alignment::Center => slack / 2.0,
            Alignment::Right => slack,
        };

        for &index in &visible {
            let container = &mut containers[index];
            container.set_desired_width(widths[index]);
            container.set_desired_origin(origin);
            origin += widths[index] + self.settings.spacing;
        }

        visible
    }

    fn used_width(&self, visible: &[usize], widths: &[f64]) -> f64 {
        if visible.is_empty() {
            return 0.0;
        }
        let content: f64 = visible.iter().map(|&i| widths[i]).sum();
        content + self.settings.spacing * (visible.len() - 1) as f64
    }
}

/// Position in `visible` of the lowest-priority container; ties go to the
/// rightmost.
fn lowest_priority(visible: &[usize], priorities: &[f64]) -> usize {
    let mut victim = 0;
    for (pos, &index) in visible.iter().enumerate() {
        if priorities[index] <= priorities[visible[victim]] {
            victim = pos;
        }
    }
    victim
}

#[cfg(test)]
mod tests {
    use super::*;
    use sbar_components::{SpacerComponent, TextComponent};
    use sbar_core::{StatusBarComponent, VariableScope};

    fn spacer(width: usize, priority: f64) -> StatusBarContainerView {
        StatusBarContainerView::new(Box::new(SpacerComponent::new(width, priority)))
    }

    fn layout(width: f64, spacing: f64, alignment: Alignment) -> StatusBarLayout {
        StatusBarLayout::new(LayoutSettings { width, spacing, alignment })
    }

    fn hints(containers: &[StatusBarContainerView]) -> Vec<(f64, f64)> {
        containers
            .iter()
            .map(|c| (c.desired_origin(), c.desired_width()))
            .collect()
    }

    #[test]
    fn packs_left_with_spacing() {
        let mut containers = vec![spacer(3, 5.0), spacer(4, 5.0)];
        let visible = layout(20.0, 1.0, Alignment::Left).update(&mut containers);

        assert_eq!(visible, vec![0, 1]);
        assert_eq!(hints(&containers), vec![(0.0, 3.0), (4.0, 4.0)]);
    }

    #[test]
    fn right_and_center_use_slack() {
        let mut containers = vec![spacer(3, 5.0), spacer(4, 5.0)];

        layout(20.0, 1.0, Alignment::Right).update(&mut containers);
        assert_eq!(hints(&containers), vec![(12.0, 3.0), (16.0, 4.0)]);

        layout(20.0, 1.0, Alignment::Center).update(&mut containers);
        assert_eq!(hints(&containers), vec![(6.0, 3.0), (10.0, 4.0)]);
    }

    #[test]
    fn hides_lowest_priority_on_overflow() {
        let mut containers = vec![spacer(5, 9.0), spacer(5, 1.0), spacer(5, 5.0)];
        let visible = layout(11.0, 1.0, Alignment::Left).update(&mut containers);

        assert_eq!(visible, vec![0, 2]);
        assert_eq!(hints(&containers), vec![(0.0, 5.0), (0.0, 0.0), (6.0, 5.0)]);
    }

    #[test]
    fn priority_ties_hide_rightmost_first() {
        let mut containers = vec![spacer(5, 5.0), spacer(5, 5.0), spacer(5, 5.0)];
        let visible = layout(10.0, 0.0, Alignment::Left).update(&mut containers);
        assert_eq!(visible, vec![0, 1]);
    }

    #[test]
    fn nothing_fits_in_zero_width() {
        let mut containers = vec![spacer(1, 5.0)];
        let visible = layout(0.0, 0.0, Alignment::Left).update(&mut containers);
        assert!(visible.is_empty());
        assert_eq!(hints(&containers), vec![(0.0, 0.0)]);
    }

    #[test]
    fn follows_rendered_text_width() {
        let mut scope = VariableScope::new();
        scope.set("user.host", "devbox");

        let mut component = TextComponent::new("\\(user.host)", 5.0);
        component.update(&scope);
        let mut containers = vec![StatusBarContainerView::new(Box::new(component))];

        layout(10.0, 0.0, Alignment::Left).update(&mut containers);

        assert_eq!(containers[0].desired_width(), 6.0);
    }

    #[test]
    fn from_config_clamps_negative_spacing() {
        let config = GlobalConfig {
            spacing: -3.0,
            ..GlobalConfig::default()
        };
        let layout = StatusBarLayout::from_config(&config, 40.0);
        assert_eq!(layout.settings().spacing, 0.0);
        assert_eq!(layout.settings().width, 40.0);
    }
}
