use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Global style-variable namespace the renderer reads from.
///
/// Writers only ever call `set_property`; there is no removal. Values are
/// stored verbatim, with no validation of either the key or the value.
pub trait StyleRoot: Send + Sync {
    fn set_property(&self, key: &str, value: &str);
    fn property(&self, key: &str) -> Option<String>;
    fn snapshot(&self) -> BTreeMap<String, String>;
}

/// In-memory style root, cheap to clone and shared between the widget and the
/// render pass.
#[derive(Debug, Clone, Default)]
pub struct StyleVariables {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl StyleVariables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StyleRoot for StyleVariables {
    fn set_property(&self, key: &str, value: &str) {
        let mut vars = self.inner.write().unwrap_or_else(|e| e.into_inner());
        vars.insert(key.to_string(), value.to_string());
    }

    fn property(&self, key: &str) -> Option<String> {
        let vars = self.inner.read().unwrap_or_else(|e| e.into_inner());
        vars.get(key).cloned()
    }

    fn snapshot(&self) -> BTreeMap<String, String> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let root = StyleVariables::new();
        root.set_property("--primary-color", "#F7931A");
        root.set_property("--primary-color", "#2196f3");
        assert_eq!(root.property("--primary-color").as_deref(), Some("#2196f3"));
        assert_eq!(root.snapshot().len(), 1);
    }

    #[test]
    fn test_clones_share_the_namespace() {
        let root = StyleVariables::new();
        let reader = root.clone();
        root.set_property("--highlight-bg", "#4caf50");
        assert_eq!(reader.property("--highlight-bg").as_deref(), Some("#4caf50"));
    }

    #[test]
    fn test_values_are_stored_verbatim() {
        let root = StyleVariables::new();
        root.set_property("not-a-css-var", "definitely not a color");
        assert_eq!(
            root.property("not-a-css-var").as_deref(),
            Some("definitely not a color")
        );
    }
}
