//! Option definitions with scoped overrides.
//!
//! A definition carries a general default plus optional override records
//! keyed by scope: a widget class for property definitions, a layout manager
//! name for layout options. Resolving against a scope merges the override
//! over the general record.

use std::collections::HashMap;

/// Override fields applied on top of an [`OptionDefinition`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverride {
    pub default: Option<String>,
}

/// Definition of a property or layout option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionDefinition {
    pub default: Option<String>,
    pub overrides: HashMap<String, OptionOverride>,
}

impl OptionDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Definition with a general default.
    pub fn with_default(default: impl Into<String>) -> Self {
        Self {
            default: Some(default.into()),
            overrides: HashMap::new(),
        }
    }

    /// Add an override default for `scope` (builder).
    pub fn with_override(mut self, scope: impl Into<String>, default: impl Into<String>) -> Self {
        self.overrides.insert(
            scope.into(),
            OptionOverride {
                default: Some(default.into()),
            },
        );
        self
    }

    /// Default after merging the override for `scope`, if any.
    ///
    /// An override without a `default` field leaves the general default in
    /// place.
    pub fn resolve_default(&self, scope: &str) -> Option<&str> {
        self.overrides
            .get(scope)
            .and_then(|o| o.default.as_deref())
            .or(self.default.as_deref())
    }
}
