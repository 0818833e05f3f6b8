use crate::{
    component::StatusBarComponent,
    variables::{VariablePaths, VariableScope},
};

/// Hosts exactly one [`StatusBarComponent`] inside the bar.
///
/// The layout pass writes `desired_width` / `desired_origin` and the renderer
/// reads them back; the container itself never reconciles them with the
/// component's intrinsic size.
///
/// [`StatusBarContainerView::new`] is the only way to build one.  There is
/// no default container:
///
/// ```compile_fail
/// let view: sbar_core::StatusBarContainerView = Default::default();
/// ```
///
/// and none can be decoded from serialized data:
///
/// ```compile_fail
/// fn decode<T: serde::de::DeserializeOwned>() {}
/// decode::<sbar_core::StatusBarContainerView>();
/// ```
#[derive(Debug)]
pub struct StatusBarContainerView {
    component:      Box<dyn StatusBarComponent>,
    desired_width:  f64,
    desired_origin: f64,
}

impl StatusBarContainerView {
    pub fn new(component: Box<dyn StatusBarComponent>) -> Self {
        Self {
            component,
            desired_width:  0.0,
            desired_origin: 0.0,
        }
    }

    pub fn component(&self) -> &dyn StatusBarComponent {
        self.component.as_ref()
    }

    pub fn desired_width(&self) -> f64 {
        self.desired_width
    }

    pub fn set_desired_width(&mut self, width: f64) {
        self.desired_width = width;
    }

    /// Horizontal offset from the left edge of the bar.
    pub fn desired_origin(&self) -> f64 {
        self.desired_origin
    }

    pub fn set_desired_origin(&mut self, origin: f64) {
        self.desired_origin = origin;
    }

    /// Forward a change notification to the component, unfiltered.
    pub fn variables_did_change(&mut self, paths: &VariablePaths) {
        self.component.variables_did_change(paths);
    }

    /// Let the component refresh itself from `scope`.
    pub fn update(&mut self, scope: &VariableScope) {
        self.component.update(scope);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<VariablePaths>>>,
    }

    impl StatusBarComponent for Recorder {
        fn kind(&self) -> &str {
            "recorder"
        }

        fn variables_did_change(&mut self, paths: &VariablePaths) {
            self.seen.lock().unwrap().push(paths.clone());
        }

        fn render(&self) -> String {
            "rec".to_string()
        }
    }

    fn paths(items: &[&str]) -> VariablePaths {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_the_supplied_component() {
        let component: Box<dyn StatusBarComponent> = Box::new(Recorder::default());
        let addr = component.as_ref() as *const _ as *const ();

        let view = StatusBarContainerView::new(component);

        let held = view.component() as *const _ as *const ();
        assert_eq!(addr, held);
        assert_eq!(view.component().kind(), "recorder");
    }

    #[test]
    fn layout_hints_round_trip() {
        let mut view = StatusBarContainerView::new(Box::new(Recorder::default()));
        assert_eq!(view.desired_width(), 0.0);
        assert_eq!(view.desired_origin(), 0.0);

        view.set_desired_width(42.5);
        view.set_desired_origin(-3.25);

        assert_eq!(view.desired_width(), 42.5);
        assert_eq!(view.desired_origin(), -3.25);
    }

    #[test]
    fn hints_are_not_clamped_to_intrinsic_size() {
        let mut view = StatusBarContainerView::new(Box::new(Recorder::default()));
        view.set_desired_width(1000.0);
        assert_eq!(view.desired_width(), 1000.0);
        assert_eq!(view.component().intrinsic_size().width, 3.0);
    }

    #[test]
    fn forwards_changed_paths_unmodified() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut view = StatusBarContainerView::new(Box::new(Recorder { seen: seen.clone() }));

        let changed = paths(&["clock.now", "system.cpu", "user.name"]);
        view.variables_did_change(&changed);

        assert_eq!(*seen.lock().unwrap(), vec![changed]);
    }

    #[test]
    fn forwards_empty_notifications() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut view = StatusBarContainerView::new(Box::new(Recorder { seen: seen.clone() }));

        view.variables_did_change(&VariablePaths::new());

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].is_empty());
    }
}
