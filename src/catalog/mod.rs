//! Widget class catalog: class registry, option definitions, layout tables.
//!
//! The [`Catalog`] is injected into every descriptor rather than living in a
//! process-wide global, so tests can build exactly the classes they need.
//!
//! - [`ClassInfo`] — valid, read-only and custom-option property names.
//! - [`OptionDefinition`] — default value with per-class or per-manager overrides.
//! - [`WidgetDefaults`] — resolved property and layout defaults for one widget.

pub mod class;
pub mod defaults;
pub mod definition;

use std::collections::HashMap;
use std::path::Path;

pub use class::ClassInfo;
pub use defaults::WidgetDefaults;
pub use definition::{OptionDefinition, OptionOverride};

use crate::config::{CatalogConfig, STANDARD_LAYOUT};
use crate::error::{MetaError, Result};
use crate::meta::LayoutManager;

/// Registry of widget classes plus the property and layout definition tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    classes: HashMap<String, ClassInfo>,
    property_definitions: HashMap<String, OptionDefinition>,
    layout_options: HashMap<String, OptionDefinition>,
    manager_properties: HashMap<LayoutManager, Vec<String>>,
}

impl Catalog {
    /// Create an empty catalog: no classes, no layout tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog preloaded with the standard pack/place/grid option tables.
    pub fn standard() -> Result<Self> {
        let mut catalog = Self::new();
        catalog.load_toml_str(STANDARD_LAYOUT)?;
        Ok(catalog)
    }

    /// Build a catalog from a TOML document.
    pub fn from_toml_str(doc: &str) -> Result<Self> {
        let mut catalog = Self::new();
        catalog.load_toml_str(doc)?;
        Ok(catalog)
    }

    /// Build a catalog from a TOML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!(?path, classes = catalog.classes.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Merge a TOML document into this catalog. Later entries replace
    /// earlier ones with the same name.
    pub fn load_toml_str(&mut self, doc: &str) -> Result<()> {
        let config: CatalogConfig = toml::from_str(doc)?;
        self.apply_config(config)
    }

    /// Merge an already-parsed configuration into this catalog.
    pub fn apply_config(&mut self, config: CatalogConfig) -> Result<()> {
        config.validate()?;
        for (name, class) in config.classes {
            self.register_class(name, class.into_info());
        }
        for (name, option) in config.properties {
            self.define_property(name, option.into_definition()?);
        }
        for (name, option) in config.layout_options {
            self.define_layout_option(name, option.into_definition()?);
        }
        for (manager, table) in config.layout {
            let manager: LayoutManager = manager.parse()?;
            self.set_manager_properties(manager, table.properties);
        }
        Ok(())
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register (or replace) a widget class.
    pub fn register_class(&mut self, name: impl Into<String>, info: ClassInfo) {
        self.classes.insert(name.into(), info);
    }

    /// Register a class (builder).
    pub fn with_class(mut self, name: impl Into<String>, info: ClassInfo) -> Self {
        self.register_class(name, info);
        self
    }

    /// Define (or replace) a property definition.
    pub fn define_property(&mut self, name: impl Into<String>, def: OptionDefinition) {
        self.property_definitions.insert(name.into(), def);
    }

    /// Define a property (builder).
    pub fn with_property(mut self, name: impl Into<String>, def: OptionDefinition) -> Self {
        self.define_property(name, def);
        self
    }

    /// Define (or replace) a layout option definition.
    pub fn define_layout_option(&mut self, name: impl Into<String>, def: OptionDefinition) {
        self.layout_options.insert(name.into(), def);
    }

    /// Replace the property list of a layout manager.
    pub fn set_manager_properties(
        &mut self,
        manager: LayoutManager,
        names: impl IntoIterator<Item = impl Into<String>>,
    ) {
        self.manager_properties
            .insert(manager, names.into_iter().map(Into::into).collect());
    }

    // ── Lookup ───────────────────────────────────────────────────────

    /// Look up a class. A missing class is a registration bug in the caller.
    pub fn class(&self, name: &str) -> Result<&ClassInfo> {
        self.classes
            .get(name)
            .ok_or_else(|| MetaError::UnknownClass(name.to_owned()))
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered class names, in no particular order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn property_definition(&self, name: &str) -> Option<&OptionDefinition> {
        self.property_definitions.get(name)
    }

    pub fn layout_option(&self, name: &str) -> Option<&OptionDefinition> {
        self.layout_options.get(name)
    }

    /// Property names accepted by `manager`, in declaration order.
    pub fn manager_properties(&self, manager: LayoutManager) -> &[String] {
        self.manager_properties
            .get(&manager)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve the property and layout defaults of a new widget.
    ///
    /// See [`WidgetDefaults::resolve`].
    pub fn widget_defaults(&self, class_name: &str, widget_id: &str) -> Result<WidgetDefaults> {
        WidgetDefaults::resolve(self, class_name, widget_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_has_no_classes() {
        let catalog = Catalog::new();
        assert!(!catalog.contains_class("TButton"));
        assert!(catalog.manager_properties(LayoutManager::Grid).is_empty());
    }

    #[test]
    fn unknown_class_is_an_error() {
        let catalog = Catalog::new();
        let err = catalog.class("TButton").unwrap_err();
        assert!(matches!(err, MetaError::UnknownClass(ref c) if c == "TButton"));
        assert_eq!(err.to_string(), "class not found: TButton");
    }

    #[test]
    fn register_and_lookup() {
        let catalog = Catalog::new()
            .with_class("TLabel", ClassInfo::new().with_properties(["text"]))
            .with_property("text", OptionDefinition::with_default(""));
        assert!(catalog.class("TLabel").unwrap().has_property("text"));
        assert!(catalog.property_definition("text").is_some());
        assert_eq!(catalog.class_names().collect::<Vec<_>>(), vec!["TLabel"]);
    }

    #[test]
    fn standard_catalog_has_layout_tables() {
        let catalog = Catalog::standard().unwrap();
        let grid = catalog.manager_properties(LayoutManager::Grid);
        assert!(grid.iter().any(|p| p == "row"));
        assert!(grid.iter().any(|p| p == "sticky"));
        let pack = catalog.manager_properties(LayoutManager::Pack);
        assert!(pack.iter().any(|p| p == "side"));
        let place = catalog.manager_properties(LayoutManager::Place);
        assert!(place.iter().any(|p| p == "relx"));
        for manager in LayoutManager::ALL {
            for name in catalog.manager_properties(manager) {
                assert!(
                    catalog.layout_option(name).is_some(),
                    "{manager} option {name} has no definition"
                );
            }
        }
    }

    #[test]
    fn load_merges_into_existing() {
        let mut catalog = Catalog::standard().unwrap();
        catalog
            .load_toml_str(
                r#"
                [classes."tk.Label"]
                properties = ["text"]
                "#,
            )
            .unwrap();
        assert!(catalog.contains_class("tk.Label"));
        assert!(!catalog.manager_properties(LayoutManager::Pack).is_empty());
    }

    #[test]
    fn custom_option_outside_class_rejected() {
        let err = Catalog::from_toml_str(
            r#"
            [classes.TLabel]
            properties = ["text"]
            custom_options = ["not_a_property"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MetaError::Config(_)));
    }

    #[test]
    fn widget_defaults_matches_resolver() {
        let catalog = Catalog::standard()
            .unwrap()
            .with_class("TLabel", ClassInfo::new().with_properties(["text"]))
            .with_property("text", OptionDefinition::with_default(""));
        let defaults = catalog.widget_defaults("TLabel", "label1").unwrap();
        assert_eq!(defaults, WidgetDefaults::resolve(&catalog, "TLabel", "label1").unwrap());
        assert_eq!(defaults.properties.get("text").map(String::as_str), Some("label1"));
        assert!(matches!(
            catalog.widget_defaults("TNope", "x"),
            Err(MetaError::UnknownClass(_))
        ));
    }

    #[test]
    fn unknown_manager_table_rejected() {
        let err = Catalog::from_toml_str(
            r#"
            [layout.flex]
            properties = ["grow"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, MetaError::UnknownLayoutManager(_)));
    }

    #[test]
    fn from_path_missing_file() {
        let err = Catalog::from_path("/nonexistent/catalog.toml").unwrap_err();
        assert!(matches!(err, MetaError::Io(_)));
    }
}
