//! # gilt-designer
//!
//! Widget metadata model for a visual GUI designer.
//!
//! Each widget placed in a design is described by a [`WidgetMeta`]: its
//! identifier and class, property overrides, layout properties for the
//! pack/place/grid managers, grid row/column configuration and event
//! bindings. Mutations raise change notifications so editor views can
//! refresh.
//!
//! ## Core Systems
//!
//! - **[`meta`]** — The descriptor, its record, change flags and layout types
//! - **[`catalog`]** — Injected class registry and default value resolution
//! - **[`observe`]** — Synchronous observer list used for change notification
//! - **[`config`]** — TOML catalog documents
//! - **[`error`]** — [`MetaError`]
//!
//! ```ignore
//! use std::rc::Rc;
//! use gilt_designer::{Catalog, ChangeFlags, WidgetMeta};
//!
//! let catalog = Rc::new(Catalog::from_path("widgets.toml")?);
//! let mut button = WidgetMeta::new_with_defaults(catalog, "ttk.Button", "button1")?;
//! button.subscribe(|flags, _| {
//!     if flags.contains(ChangeFlags::PROPERTY_ID_CHANGED) {
//!         // rename the tree item
//!     }
//! });
//! button.set_widget_property("id", "ok_button")?;
//! ```

pub mod error;

// Metadata
pub mod catalog;
pub mod config;
pub mod meta;

// Notification
pub mod observe;

pub use catalog::{Catalog, ClassInfo, OptionDefinition, WidgetDefaults};
pub use error::{MetaError, Result};
pub use meta::{ChangeFlags, GridAxis, LayoutManager, PropertyKey, WidgetMeta};
pub use observe::{Observable, ObserverId};
