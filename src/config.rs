//! Catalog configuration: TOML documents describing classes and option tables.
//!
//! ```toml
//! [classes.TButton]
//! properties = ["text", "width", "style"]
//! ro_properties = []
//! custom_options = []
//!
//! [properties.width]
//! default = 0
//! [properties.width.overrides.TButton]
//! default = 10
//!
//! [layout.grid]
//! properties = ["row", "column", "sticky"]
//!
//! [layout_options.sticky]
//! ```
//!
//! Defaults may be strings, integers, floats or booleans; they are stored as
//! strings.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::{ClassInfo, OptionDefinition, OptionOverride};
use crate::error::{MetaError, Result};
use crate::meta::LayoutManager;

/// Layout tables installed by [`Catalog::standard`](crate::catalog::Catalog::standard).
pub(crate) const STANDARD_LAYOUT: &str = include_str!("../defaults/standard_layout.toml");

/// Top-level catalog document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    #[serde(default)]
    pub classes: BTreeMap<String, ClassConfig>,
    #[serde(default)]
    pub properties: BTreeMap<String, OptionConfig>,
    /// Keyed by manager name: `pack`, `place` or `grid`.
    #[serde(default)]
    pub layout: BTreeMap<String, ManagerConfig>,
    #[serde(default)]
    pub layout_options: BTreeMap<String, OptionConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassConfig {
    #[serde(default)]
    pub properties: Vec<String>,
    #[serde(default)]
    pub ro_properties: Vec<String>,
    #[serde(default)]
    pub custom_options: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionConfig {
    pub default: Option<toml::Value>,
    #[serde(default)]
    pub overrides: BTreeMap<String, OverrideConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverrideConfig {
    pub default: Option<toml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManagerConfig {
    #[serde(default)]
    pub properties: Vec<String>,
}

impl CatalogConfig {
    /// Check cross-references the type system cannot express.
    pub fn validate(&self) -> Result<()> {
        for (name, class) in &self.classes {
            if let Some(ro) = class
                .ro_properties
                .iter()
                .find(|p| !class.properties.contains(p))
            {
                return Err(MetaError::Config(format!(
                    "class {name}: read-only property {ro} is not a class property"
                )));
            }
            if let Some(custom) = class
                .custom_options
                .iter()
                .find(|p| !class.properties.contains(p))
            {
                return Err(MetaError::Config(format!(
                    "class {name}: custom option {custom} is not a class property"
                )));
            }
        }
        for manager in self.layout.keys() {
            manager.parse::<LayoutManager>()?;
        }
        Ok(())
    }
}

impl ClassConfig {
    pub fn into_info(self) -> ClassInfo {
        ClassInfo::new()
            .with_properties(self.properties)
            .with_ro_properties(self.ro_properties)
            .with_custom_options(self.custom_options)
    }
}

impl OptionConfig {
    pub fn into_definition(self) -> Result<OptionDefinition> {
        let mut def = OptionDefinition {
            default: self.default.as_ref().map(value_to_string).transpose()?,
            overrides: Default::default(),
        };
        for (scope, o) in self.overrides {
            let default = o.default.as_ref().map(value_to_string).transpose()?;
            def.overrides.insert(scope, OptionOverride { default });
        }
        Ok(def)
    }
}

fn value_to_string(value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        other => Err(MetaError::Config(format!(
            "default must be a scalar, got {}",
            other.type_str()
        ))),
    }
}
