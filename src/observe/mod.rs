//! Observer capability: register callbacks and fan out change notifications.
//!
//! - [`Observable`] — synchronous, ordered observer list.
//! - [`ObserverId`] — handle for unsubscribing.

pub mod observable;

pub use observable::{Observable, ObserverId};
