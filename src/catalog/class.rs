//! Per-class widget metadata held by the catalog.

use std::collections::HashSet;

/// What the designer knows about one widget class.
///
/// `properties` keeps registration order; defaults are resolved in that
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassInfo {
    /// Every property name valid for the class.
    pub properties: Vec<String>,
    /// Properties shown but not editable.
    pub ro_properties: HashSet<String>,
    /// Properties handled by a custom editor; `text`/`label` listed here do
    /// not take the widget id as their default.
    pub custom_options: HashSet<String>,
}

impl ClassInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add valid properties (builder). Duplicates are ignored.
    pub fn with_properties(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for name in names {
            let name = name.into();
            if !self.properties.contains(&name) {
                self.properties.push(name);
            }
        }
        self
    }

    /// Mark properties read-only (builder).
    pub fn with_ro_properties(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.ro_properties.extend(names.into_iter().map(Into::into));
        self
    }

    /// Mark properties as custom options (builder).
    pub fn with_custom_options(
        mut self,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.custom_options.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.iter().any(|p| p == name)
    }

    pub fn is_read_only(&self, name: &str) -> bool {
        self.ro_properties.contains(name)
    }

    pub fn is_custom_option(&self, name: &str) -> bool {
        self.custom_options.contains(name)
    }
}
