//! Plain data record underlying a widget descriptor.
//!
//! [`WidgetRecord`] stores identity, property maps, grid entries and
//! bindings with no notification logic. [`WidgetMeta`](super::WidgetMeta)
//! wraps it and raises change events.

use std::collections::HashMap;

use super::binding::BindingEntry;
use super::layout::{GridAxis, GridRcEntry, LayoutManager};

/// Identity and property storage for one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRecord {
    pub classname: String,
    pub identifier: String,
    pub is_named: bool,
    pub manager: Option<LayoutManager>,
    /// Property overrides. Absent keys are at their default.
    pub properties: HashMap<String, String>,
    /// Layout properties for the active manager.
    pub layout_properties: HashMap<String, String>,
    /// Options this widget applies as a container (e.g. `propagate`).
    pub container_properties: HashMap<String, String>,
    /// Row/column configuration for this widget's grid children.
    pub gridrc_properties: Vec<GridRcEntry>,
    pub bindings: Vec<BindingEntry>,
    pub properties_defaults: HashMap<String, String>,
    pub layout_defaults: HashMap<LayoutManager, HashMap<String, String>>,
}

impl WidgetRecord {
    pub fn new(classname: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self {
            classname: classname.into(),
            identifier: identifier.into(),
            is_named: false,
            manager: None,
            properties: HashMap::new(),
            layout_properties: HashMap::new(),
            container_properties: HashMap::new(),
            gridrc_properties: Vec::new(),
            bindings: Vec::new(),
            properties_defaults: HashMap::new(),
            layout_defaults: HashMap::new(),
        }
    }

    /// Set the layout manager (builder).
    pub fn with_manager(mut self, manager: LayoutManager) -> Self {
        self.manager = Some(manager);
        self
    }

    /// Drop all layout state tied to the current manager.
    ///
    /// Grid row/column entries configure this widget's children, not its own
    /// placement, so they are kept.
    pub fn clear_layout(&mut self) {
        self.layout_properties.clear();
        self.container_properties.clear();
    }

    /// Copy the stored defaults of the active manager into the layout map,
    /// keeping values already set.
    pub fn apply_layout_defaults(&mut self) {
        let Some(manager) = self.manager else {
            return;
        };
        if let Some(defaults) = self.layout_defaults.get(&manager) {
            for (name, value) in defaults {
                self.layout_properties
                    .entry(name.clone())
                    .or_insert_with(|| value.clone());
            }
        }
    }

    /// Value of the grid entry keyed by `(axis, index, property)`.
    pub fn get_gridrc_value(&self, axis: GridAxis, index: u32, property: &str) -> Option<&str> {
        self.gridrc_properties
            .iter()
            .find(|e| e.matches(axis, index, property))
            .map(|e| e.value.as_str())
    }

    /// Create or update the grid entry keyed by `(axis, index, property)`.
    ///
    /// An empty value is stored like any other and reads back as `""`.
    pub fn set_gridrc_value(&mut self, axis: GridAxis, index: u32, property: &str, value: &str) {
        let pos = self
            .gridrc_properties
            .iter()
            .position(|e| e.matches(axis, index, property));
        match pos {
            Some(i) => self.gridrc_properties[i].value = value.to_owned(),
            None => self
                .gridrc_properties
                .push(GridRcEntry::new(axis, index, property, value)),
        }
    }
}
