//! Integration tests for gilt-designer.
//!
//! These tests drive the public API from outside the crate: a catalog loaded
//! from TOML, descriptors built against it, and an observer recording the
//! notifications an editor would react to.

use std::cell::RefCell;
use std::rc::Rc;

use gilt_designer::catalog::WidgetDefaults;
use gilt_designer::meta::RenameState;
use gilt_designer::{Catalog, ChangeFlags, GridAxis, LayoutManager, MetaError, WidgetMeta};
use pretty_assertions::assert_eq;

const WIDGETS: &str = r#"
[classes."ttk.Button"]
properties = ["class_", "command", "compound", "style", "text", "width"]
ro_properties = ["class_"]

[classes."ttk.Labelframe"]
properties = ["text", "labelanchor", "padding"]
custom_options = ["text"]

[classes."ttk.Frame"]
properties = ["padding", "width", "height"]

[properties.text]
default = ""

[properties.width]
default = 0
[properties.width.overrides."ttk.Button"]
default = 10

[properties.labelanchor]
default = "nw"
"#;

fn catalog() -> Rc<Catalog> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("gilt_designer=trace")
        .with_test_writer()
        .try_init();

    let mut catalog = Catalog::standard().expect("standard layout tables");
    catalog.load_toml_str(WIDGETS).expect("widget catalog");
    Rc::new(catalog)
}

fn record_events(meta: &WidgetMeta) -> Rc<RefCell<Vec<ChangeFlags>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_c = log.clone();
    meta.subscribe(move |flags, _| log_c.borrow_mut().push(flags));
    log
}

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

#[test]
fn test_id_set_is_visible_through_both_accessors() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Button", "button1");
    for id in ["ok", "cancel", "apply"] {
        meta.set_widget_property("id", id).unwrap();
        assert_eq!(meta.widget_property("id"), id);
        assert_eq!(meta.identifier(), id);
    }
    assert_eq!(meta.old_data("id"), Some("cancel"));
}

#[test]
fn test_is_named_decided_by_first_rename_only() {
    let mut renamed = WidgetMeta::new(catalog(), "ttk.Button", "button1");
    renamed.set_widget_property("id", "ok_button").unwrap();
    renamed.set_widget_property("id", "button1").unwrap();
    assert!(renamed.is_named());
    assert_eq!(renamed.rename_state(), RenameState::Renamed);

    let mut kept = WidgetMeta::new(catalog(), "ttk.Button", "button2");
    kept.set_widget_property("id", "button2").unwrap();
    kept.set_widget_property("id", "ok_button").unwrap();
    assert!(!kept.is_named());
    assert_eq!(kept.rename_state(), RenameState::NotRenamed);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_blanked_property_reads_default_and_leaves_map() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Button", "button1");
    meta.set_widget_property("style", "Accent.TButton").unwrap();
    meta.set_widget_property("style", "").unwrap();
    assert_eq!(meta.widget_property("style"), "");
    assert!(!meta.record().properties.contains_key("style"));
    assert_eq!(meta.last_blanked(), Some("style"));
}

#[test]
fn test_each_setter_notifies_once() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Button", "button1")
        .with_manager(LayoutManager::Grid);
    let log = record_events(&meta);

    meta.set_widget_property("text", "OK").unwrap();
    meta.set_widget_property("class_", "Toolbutton").unwrap();
    meta.set_layout_property("sticky", "ew");
    meta.set_container_property("propagate", "false");
    meta.set_widget_property("id", "ok_button").unwrap();

    assert_eq!(
        *log.borrow(),
        vec![
            ChangeFlags::PROPERTY_CHANGED,
            ChangeFlags::PROPERTY_CHANGED | ChangeFlags::PROPERTY_RO_CHANGED,
            ChangeFlags::LAYOUT_PROPERTY_CHANGED,
            ChangeFlags::LAYOUT_PROPERTY_CHANGED,
            ChangeFlags::PROPERTY_CHANGED
                | ChangeFlags::PROPERTY_DATA_CHANGED
                | ChangeFlags::PROPERTY_ID_CHANGED,
        ]
    );
}

#[test]
fn test_unregistered_class_surfaces_as_class_not_found() {
    let mut meta = WidgetMeta::new(catalog(), "tk.Canvas", "canvas1");
    let err = meta.set_widget_property("background", "white").unwrap_err();
    assert!(matches!(err, MetaError::UnknownClass(ref c) if c == "tk.Canvas"));
    assert_eq!(err.to_string(), "class not found: tk.Canvas");
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[test]
fn test_fresh_widget_layout_defaults() {
    let meta = WidgetMeta::new(catalog(), "ttk.Button", "button1");
    assert_eq!(meta.layout_property("row"), "0");
    assert_eq!(meta.layout_property("column"), "0");
    assert_eq!(meta.layout_property("sticky"), "");
}

#[test]
fn test_propagate_true_suppressed() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Frame", "frame1");
    meta.set_container_property("propagate", "true");
    assert_eq!(meta.container_property("propagate"), "");
}

#[test]
fn test_switching_grid_to_pack_clears_layout() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Button", "button1")
        .with_manager(LayoutManager::Grid);
    meta.set_layout_property("row", "2");
    meta.set_layout_property("column", "1");
    let log = record_events(&meta);

    meta.set_manager(LayoutManager::Pack);
    assert_eq!(meta.layout_property("row"), "0");
    assert_eq!(meta.layout_property("column"), "0");
    assert_eq!(*log.borrow(), vec![ChangeFlags::LAYOUT_MANAGER_CHANGED]);

    meta.set_manager(LayoutManager::Pack);
    assert_eq!(log.borrow().len(), 1);
}

#[test]
fn test_gridrc_indexes_distinct_regardless_of_order() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Frame", "frame1");
    let rows = [4, 0, 2, 0, 4, 4];
    for (n, row) in rows.iter().enumerate() {
        let prop = if n % 2 == 0 { "weight" } else { "minsize" };
        meta.set_gridrc_property(GridAxis::Row, *row, prop, "1");
    }
    meta.set_gridrc_property(GridAxis::Column, 3, "weight", "1");
    meta.set_gridrc_property(GridAxis::Column, 3, "uniform", "a");

    let mut row_indexes = meta.gridrc_row_indexes();
    row_indexes.sort_unstable();
    assert_eq!(row_indexes, vec![0, 2, 4]);
    assert_eq!(meta.gridrc_column_indexes(), vec![3]);
    assert_eq!(meta.gridrc_property(GridAxis::Column, 3, "uniform"), "a");
    assert_eq!(meta.gridrc_property(GridAxis::Column, 4, "uniform"), "");
}

#[test]
fn test_apply_layout_defaults_after_manager_switch() {
    let mut meta =
        WidgetMeta::new_with_defaults(catalog(), "ttk.Frame", "frame1").unwrap();
    meta.set_manager(LayoutManager::Pack);
    meta.apply_layout_defaults();
    assert_eq!(meta.layout_property("side"), "top");
    assert_eq!(meta.layout_property("anchor"), "center");

    meta.set_manager(LayoutManager::Place);
    meta.apply_layout_defaults();
    assert_eq!(meta.layout_property("side"), "");
    assert_eq!(meta.layout_property("anchor"), "nw");
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_button_text_defaults_to_its_id() {
    let catalog = catalog();
    let defaults = WidgetMeta::get_widget_defaults(&catalog, "ttk.Button", "button1").unwrap();
    assert_eq!(defaults.properties["text"], "button1");
    assert_eq!(defaults.properties["width"], "10");
}

#[test]
fn test_custom_option_text_keeps_definition_default() {
    let catalog = catalog();
    let defaults =
        WidgetDefaults::resolve(&catalog, "ttk.Labelframe", "labelframe1").unwrap();
    assert!(!defaults.properties.contains_key("text"));
    assert_eq!(defaults.properties["labelanchor"], "nw");
}

#[test]
fn test_frame_gets_general_width_default() {
    let meta = WidgetMeta::new_with_defaults(catalog(), "ttk.Frame", "frame1").unwrap();
    assert_eq!(meta.properties_defaults()["width"], "0");
    assert!(meta.properties_defaults().get("padding").is_none());
}

// ---------------------------------------------------------------------------
// Bindings
// ---------------------------------------------------------------------------

#[test]
fn test_bindings_round_trip_without_events() {
    let mut meta = WidgetMeta::new(catalog(), "ttk.Button", "button1");
    let log = record_events(&meta);
    meta.add_binding("<Return>", "on_submit", false);
    meta.add_binding("<Button-3>", "on_context_menu", true);
    assert_eq!(
        meta.get_bindings(),
        vec![
            ("<Return>", "on_submit", false),
            ("<Button-3>", "on_context_menu", true),
        ]
    );
    meta.clear_bindings();
    assert!(meta.get_bindings().is_empty());
    assert!(log.borrow().is_empty());
}
