//! The widget descriptor: mutable metadata for one widget in a design.
//!
//! [`WidgetMeta`] composes a plain [`WidgetRecord`], an [`Observable`] and a
//! shared [`Catalog`]. Every property, layout and container setter updates
//! the record and then raises exactly one notification whose
//! [`ChangeFlags`] describe what changed, with the descriptor itself as
//! payload. Getters never fail: absent values resolve to their defaults.

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::rc::Rc;

use super::base::WidgetRecord;
use super::binding::BindingEntry;
use super::flags::ChangeFlags;
use super::key::PropertyKey;
use super::layout::{GridAxis, LayoutManager};
use crate::catalog::{Catalog, WidgetDefaults};
use crate::error::Result;
use crate::observe::{Observable, ObserverId};

// ---------------------------------------------------------------------------
// RenameState
// ---------------------------------------------------------------------------

/// Whether the user gave the widget an explicit name.
///
/// Starts `Undecided` and is decided exactly once, by the first identifier
/// change or the first explicit `set_is_named`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameState {
    Undecided,
    NotRenamed,
    Renamed,
}

impl RenameState {
    fn decided(renamed: bool) -> Self {
        if renamed {
            Self::Renamed
        } else {
            Self::NotRenamed
        }
    }
}

// ---------------------------------------------------------------------------
// WidgetMeta
// ---------------------------------------------------------------------------

/// Metadata record for one widget instance in a design.
pub struct WidgetMeta {
    record: WidgetRecord,
    observers: Observable<WidgetMeta>,
    catalog: Rc<Catalog>,
    /// First identifier this widget was given.
    start_identifier: Option<String>,
    rename: RenameState,
    /// Previous identifier / class, keyed by `"id"` / `"class"`.
    old_data: HashMap<String, String>,
    /// Most recently blanked property name.
    prop_blanked: Option<String>,
}

impl WidgetMeta {
    /// Create a descriptor. Defaults are not resolved; see
    /// [`new_with_defaults`](Self::new_with_defaults).
    pub fn new(
        catalog: Rc<Catalog>,
        classname: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        let record = WidgetRecord::new(classname, identifier);
        Self {
            start_identifier: Some(record.identifier.clone()),
            record,
            observers: Observable::new(),
            catalog,
            rename: RenameState::Undecided,
            old_data: HashMap::new(),
            prop_blanked: None,
        }
    }

    /// Create a descriptor and resolve its class defaults.
    pub fn new_with_defaults(
        catalog: Rc<Catalog>,
        classname: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Result<Self> {
        let mut meta = Self::new(catalog, classname, identifier);
        meta.setup_defaults()?;
        Ok(meta)
    }

    /// Set the initial layout manager without raising an event (builder).
    pub fn with_manager(mut self, manager: LayoutManager) -> Self {
        self.record.manager = Some(manager);
        self
    }

    // ── Observers ────────────────────────────────────────────────────

    /// Register a callback invoked after every notifying mutation.
    pub fn subscribe(
        &self,
        callback: impl FnMut(ChangeFlags, Option<&WidgetMeta>) + 'static,
    ) -> ObserverId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    fn notify(&self, flags: ChangeFlags) {
        tracing::debug!(id = %self.record.identifier, %flags, "widget changed");
        self.observers.notify(flags, Some(self));
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The underlying data record.
    pub fn record(&self) -> &WidgetRecord {
        &self.record
    }

    pub fn identifier(&self) -> &str {
        &self.record.identifier
    }

    /// Change the identifier. Decides the rename state on the first change
    /// and raises no event; [`set_widget_property`](Self::set_widget_property)
    /// with `"id"` is the notifying path.
    pub fn set_identifier(&mut self, value: impl Into<String>) {
        let value = value.into();
        let start = self
            .start_identifier
            .get_or_insert_with(|| value.clone());
        if self.rename == RenameState::Undecided {
            let renamed = *start != value;
            self.rename = RenameState::decided(renamed);
            self.record.is_named = renamed;
        }
        self.record.identifier = value;
    }

    pub fn classname(&self) -> &str {
        &self.record.classname
    }

    pub fn is_named(&self) -> bool {
        self.record.is_named
    }

    /// Set the named flag. The first assignment also decides the rename state.
    pub fn set_is_named(&mut self, value: bool) {
        if self.rename == RenameState::Undecided {
            self.rename = RenameState::decided(value);
        }
        self.record.is_named = value;
    }

    pub fn rename_state(&self) -> RenameState {
        self.rename
    }

    /// Value the identifier or class had before its last change.
    pub fn old_data(&self, name: &str) -> Option<&str> {
        self.old_data.get(name).map(String::as_str)
    }

    /// Name of the most recently blanked property or layout property.
    pub fn last_blanked(&self) -> Option<&str> {
        self.prop_blanked.as_deref()
    }

    // ── Widget properties ────────────────────────────────────────────

    /// Read a widget property. Unset properties read as `""`.
    pub fn widget_property(&self, key: impl Into<PropertyKey>) -> &str {
        match key.into() {
            PropertyKey::Identifier => &self.record.identifier,
            PropertyKey::ClassName => &self.record.classname,
            PropertyKey::Named(name) => self
                .record
                .properties
                .get(&name)
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    /// Write a widget property and raise one notification.
    ///
    /// - `"id"`: remembers the old identifier, renames, raises
    ///   `PROPERTY_CHANGED | PROPERTY_DATA_CHANGED | PROPERTY_ID_CHANGED`.
    /// - `"class"`: remembers the old class, raises
    ///   `PROPERTY_CHANGED | PROPERTY_DATA_CHANGED`.
    /// - anything else: stores a non-empty value (`PROPERTY_CHANGED`) or
    ///   removes the key on an empty one (`| PROPERTY_BLANKED`); read-only
    ///   properties of the class add `PROPERTY_RO_CHANGED`.
    ///
    /// Fails with `UnknownClass` only for named properties when the
    /// descriptor's class is not in the catalog; nothing changes in that case.
    pub fn set_widget_property(&mut self, key: impl Into<PropertyKey>, value: &str) -> Result<()> {
        let flags = match key.into() {
            PropertyKey::Identifier => {
                self.old_data
                    .insert("id".to_owned(), self.record.identifier.clone());
                self.set_identifier(value);
                ChangeFlags::PROPERTY_CHANGED
                    | ChangeFlags::PROPERTY_DATA_CHANGED
                    | ChangeFlags::PROPERTY_ID_CHANGED
            }
            PropertyKey::ClassName => {
                let old = std::mem::replace(&mut self.record.classname, value.to_owned());
                self.old_data.insert("class".to_owned(), old);
                ChangeFlags::PROPERTY_CHANGED | ChangeFlags::PROPERTY_DATA_CHANGED
            }
            PropertyKey::Named(name) => {
                let read_only = self.catalog.class(&self.record.classname)?.is_read_only(&name);
                let mut flags = ChangeFlags::PROPERTY_CHANGED;
                if value.is_empty() {
                    self.record.properties.remove(&name);
                    self.prop_blanked = Some(name);
                    flags |= ChangeFlags::PROPERTY_BLANKED;
                } else {
                    self.record.properties.insert(name, value.to_owned());
                }
                if read_only {
                    flags |= ChangeFlags::PROPERTY_RO_CHANGED;
                }
                flags
            }
        };
        self.notify(flags);
        Ok(())
    }

    // ── Layout & container properties ────────────────────────────────

    /// Read a layout property. `row` and `column` default to `"0"`, others to `""`.
    pub fn layout_property(&self, name: &str) -> &str {
        let default = match name {
            "row" | "column" => "0",
            _ => "",
        };
        self.record
            .layout_properties
            .get(name)
            .map(String::as_str)
            .unwrap_or(default)
    }

    /// Write a layout property; an empty value removes it.
    pub fn set_layout_property(&mut self, name: &str, value: &str) {
        let mut flags = ChangeFlags::LAYOUT_PROPERTY_CHANGED;
        if value.is_empty() {
            self.record.layout_properties.remove(name);
            self.prop_blanked = Some(name.to_owned());
            flags |= ChangeFlags::PROPERTY_BLANKED;
        } else {
            self.record
                .layout_properties
                .insert(name.to_owned(), value.to_owned());
        }
        self.notify(flags);
    }

    pub fn container_property(&self, name: &str) -> &str {
        self.record
            .container_properties
            .get(name)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Write a container property; an empty value removes it.
    ///
    /// `propagate = true` is the default and is never stored.
    pub fn set_container_property(&mut self, name: &str, value: &str) {
        let value = if name == "propagate" && value.eq_ignore_ascii_case("true") {
            ""
        } else {
            value
        };
        let mut flags = ChangeFlags::LAYOUT_PROPERTY_CHANGED;
        if value.is_empty() {
            self.record.container_properties.remove(name);
            flags |= ChangeFlags::PROPERTY_BLANKED;
        } else {
            self.record
                .container_properties
                .insert(name.to_owned(), value.to_owned());
        }
        self.notify(flags);
    }

    // ── Grid rows / columns ──────────────────────────────────────────

    /// Read a row/column option. Defaults to `"0"`, or `""` for `uniform`.
    pub fn gridrc_property(&self, axis: GridAxis, index: u32, name: &str) -> &str {
        let default = if name == "uniform" { "" } else { "0" };
        self.record
            .get_gridrc_value(axis, index, name)
            .unwrap_or(default)
    }

    /// Write a row/column option. An empty value is stored as-is. Raises no event.
    pub fn set_gridrc_property(&mut self, axis: GridAxis, index: u32, name: &str, value: &str) {
        self.record.set_gridrc_value(axis, index, name, value);
    }

    /// Drop every row/column entry, optionally raising `LAYOUT_PROPERTY_CHANGED`
    /// with no payload.
    pub fn gridrc_clear(&mut self, notify_change: bool) {
        self.record.gridrc_properties.clear();
        if notify_change {
            tracing::debug!(id = %self.record.identifier, "grid rows/columns cleared");
            self.observers
                .notify(ChangeFlags::LAYOUT_PROPERTY_CHANGED, None);
        }
    }

    /// Distinct row indexes with at least one entry, ascending.
    pub fn gridrc_row_indexes(&self) -> Vec<u32> {
        self.gridrc_indexes(GridAxis::Row)
    }

    /// Distinct column indexes with at least one entry, ascending.
    pub fn gridrc_column_indexes(&self) -> Vec<u32> {
        self.gridrc_indexes(GridAxis::Column)
    }

    fn gridrc_indexes(&self, axis: GridAxis) -> Vec<u32> {
        self.record
            .gridrc_properties
            .iter()
            .filter(|e| e.axis == axis)
            .map(|e| e.index)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    // ── Layout manager ───────────────────────────────────────────────

    pub fn manager(&self) -> Option<LayoutManager> {
        self.record.manager
    }

    /// Switch layout manager. A different manager clears layout state and
    /// raises `LAYOUT_MANAGER_CHANGED`; the same manager is a no-op.
    pub fn set_manager(&mut self, manager: impl Into<Option<LayoutManager>>) {
        let manager = manager.into();
        if self.record.manager == manager {
            return;
        }
        self.record.manager = manager;
        self.record.clear_layout();
        self.notify(ChangeFlags::LAYOUT_MANAGER_CHANGED);
    }

    /// Fill unset layout properties from the active manager's defaults and
    /// raise `LAYOUT_PROPERTY_CHANGED`.
    pub fn apply_layout_defaults(&mut self) {
        self.record.apply_layout_defaults();
        self.notify(ChangeFlags::LAYOUT_PROPERTY_CHANGED);
    }

    // ── Bindings ─────────────────────────────────────────────────────

    /// Bindings as `(sequence, handler, add)`, in insertion order.
    pub fn get_bindings(&self) -> Vec<(&str, &str, bool)> {
        self.record.bindings.iter().map(BindingEntry::as_tuple).collect()
    }

    /// Remove every binding. Raises no event.
    pub fn clear_bindings(&mut self) {
        self.record.bindings.clear();
    }

    /// Append a binding. Raises no event.
    pub fn add_binding(&mut self, sequence: impl Into<String>, handler: impl Into<String>, add: bool) {
        self.record
            .bindings
            .push(BindingEntry::new(sequence, handler, add));
    }

    // ── Defaults ─────────────────────────────────────────────────────

    /// Resolve and store this widget's class defaults.
    pub fn setup_defaults(&mut self) -> Result<()> {
        let defaults =
            Self::get_widget_defaults(&self.catalog, &self.record.classname, &self.record.identifier)?;
        self.record.properties_defaults = defaults.properties;
        self.record.layout_defaults = defaults.layout;
        Ok(())
    }

    /// Resolve defaults for a widget of `class_name` named `widget_id`.
    pub fn get_widget_defaults(
        catalog: &Catalog,
        class_name: &str,
        widget_id: &str,
    ) -> Result<WidgetDefaults> {
        WidgetDefaults::resolve(catalog, class_name, widget_id)
    }

    pub fn properties_defaults(&self) -> &HashMap<String, String> {
        &self.record.properties_defaults
    }

    pub fn layout_defaults(&self, manager: LayoutManager) -> Option<&HashMap<String, String>> {
        self.record.layout_defaults.get(&manager)
    }
}

impl fmt::Debug for WidgetMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetMeta")
            .field("record", &self.record)
            .field("start_identifier", &self.start_identifier)
            .field("rename", &self.rename)
            .field("old_data", &self.old_data)
            .field("prop_blanked", &self.prop_blanked)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
