//! Widget descriptor: identity, properties, layout, grid rows/columns, bindings.
//!
//! - [`WidgetMeta`] — the descriptor; every setter raises one notification.
//! - [`WidgetRecord`] — plain storage underneath it.
//! - [`ChangeFlags`] — what a notification reports as changed.
//! - [`PropertyKey`] — `id` / `class` / named property dispatch.

pub mod base;
pub mod binding;
pub mod descriptor;
pub mod flags;
pub mod key;
pub mod layout;

pub use base::WidgetRecord;
pub use binding::BindingEntry;
pub use descriptor::{RenameState, WidgetMeta};
pub use flags::ChangeFlags;
pub use key::PropertyKey;
pub use layout::{GridAxis, GridRcEntry, LayoutManager};
