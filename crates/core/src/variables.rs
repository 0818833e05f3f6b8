use std::collections::{BTreeMap, BTreeSet};

/// A set of variable paths, e.g. `{"clock.now", "system.cpu"}`.
///
/// Ordered so that notifications and logs are deterministic.
pub type VariablePaths = BTreeSet<String>;

/// Opening token of a variable reference inside a template: `\(path)`.
const REF_OPEN: &str = "\\(";

/// Flat store of named dynamic values that components read from.
///
/// Writers (clock tick, system monitor, config) push values in; the returned
/// set of changed paths is what gets broadcast to every container.
#[derive(Debug, Clone, Default)]
pub struct VariableScope {
    values: BTreeMap<String, String>,
}

impl VariableScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.values.get(path).map(String::as_str)
    }

    /// Store `value` under `path`.  Returns `true` if the stored value changed.
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.values.insert(path.into(), value.clone()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    /// Remove `path`.  Returns `true` if it was present.
    pub fn unset(&mut self, path: &str) -> bool {
        self.values.remove(path).is_some()
    }

    /// Apply a batch of updates and return only the paths whose value changed.
    pub fn apply<I, K, V>(&mut self, updates: I) -> VariablePaths
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut changed = VariablePaths::new();
        for (path, value) in updates {
            let path = path.into();
            if self.set(path.clone(), value) {
                changed.insert(path);
            }
        }
        changed
    }

    /// Every path currently holding a value.
    pub fn paths(&self) -> VariablePaths {
        self.values.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Expand every `\(path)` reference in `template`.
    ///
    /// Unknown paths expand to the empty string.  An unterminated `\(` is
    /// copied through literally.
    pub fn interpolate(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(REF_OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + REF_OPEN.len()..];
            let Some(end) = after.find(')') else {
                out.push_str(&rest[start..]);
                return out;
            };
            if let Some(value) = self.get(after[..end].trim()) {
                out.push_str(value);
            }
            rest = &after[end + 1..];
        }

        out.push_str(rest);
        out
    }
}

/// Paths referenced by `\(path)` tokens in `template`.
pub fn template_dependencies(template: &str) -> VariablePaths {
    let mut paths = VariablePaths::new();
    let mut rest = template;

    while let Some(start) = rest.find(REF_OPEN) {
        let after = &rest[start + REF_OPEN.len()..];
        let Some(end) = after.find(')') else { break };
        let path = after[..end].trim();
        if !path.is_empty() {
            paths.insert(path.to_string());
        }
        rest = &after[end + 1..];
    }

    paths
}
