//! Default value resolution for newly created widgets.

use std::collections::HashMap;

use super::Catalog;
use crate::error::Result;
use crate::meta::LayoutManager;

/// Properties whose default is the widget's own identifier, so a fresh
/// label or button displays its id.
const ID_TEXT_PROPERTIES: [&str; 2] = ["text", "label"];

/// Resolved defaults for one widget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetDefaults {
    /// Property name -> default value. Only non-empty defaults are listed.
    pub properties: HashMap<String, String>,
    /// Layout manager -> (layout property -> default value). Every manager
    /// has an entry, possibly empty.
    pub layout: HashMap<LayoutManager, HashMap<String, String>>,
}

impl WidgetDefaults {
    /// Resolve the defaults of a widget of class `class_name` named `widget_id`.
    ///
    /// For each property the class accepts, the property definition is merged
    /// with its class-specific override and a non-empty default is kept.
    /// `text` and `label` default to `widget_id` unless the class handles
    /// them as custom options. Layout defaults are resolved the same way for
    /// each manager's property list, using manager-specific overrides.
    ///
    /// Fails with [`MetaError::UnknownClass`](crate::error::MetaError::UnknownClass)
    /// if the class is not registered. Does not mutate anything.
    pub fn resolve(catalog: &Catalog, class_name: &str, widget_id: &str) -> Result<Self> {
        let class = catalog.class(class_name)?;

        let mut properties = HashMap::new();
        for name in &class.properties {
            let default = catalog
                .property_definition(name)
                .and_then(|def| def.resolve_default(class_name))
                .unwrap_or("");
            if !default.is_empty() {
                properties.insert(name.clone(), default.to_owned());
            }
            if ID_TEXT_PROPERTIES.contains(&name.as_str()) && !class.is_custom_option(name) {
                properties.insert(name.clone(), widget_id.to_owned());
            }
        }

        let mut layout = HashMap::new();
        for manager in LayoutManager::ALL {
            let mut manager_defaults = HashMap::new();
            for name in catalog.manager_properties(manager) {
                let Some(def) = catalog.layout_option(name) else {
                    tracing::warn!(%manager, option = %name, "layout option has no definition");
                    continue;
                };
                if let Some(default) = def.resolve_default(manager.as_str()) {
                    if !default.is_empty() {
                        manager_defaults.insert(name.clone(), default.to_owned());
                    }
                }
            }
            layout.insert(manager, manager_defaults);
        }

        tracing::debug!(
            class = class_name,
            id = widget_id,
            properties = properties.len(),
            "resolved widget defaults"
        );
        Ok(Self { properties, layout })
    }

    /// Layout defaults for one manager.
    pub fn layout_for(&self, manager: LayoutManager) -> Option<&HashMap<String, String>> {
        self.layout.get(&manager)
    }
}
