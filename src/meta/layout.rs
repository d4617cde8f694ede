//! Layout managers and grid row/column configuration.
//!
//! [`LayoutManager`] names the three positioning strategies a widget can be
//! placed with. [`GridRcEntry`] records one row- or column-level override a
//! grid container applies to its children.

use std::fmt;
use std::str::FromStr;

use crate::error::MetaError;

// ---------------------------------------------------------------------------
// LayoutManager
// ---------------------------------------------------------------------------

/// Positioning strategy assigned to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayoutManager {
    Pack,
    Place,
    Grid,
}

impl LayoutManager {
    /// All managers, in the order defaults are resolved.
    pub const ALL: [LayoutManager; 3] = [Self::Pack, Self::Place, Self::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pack => "pack",
            Self::Place => "place",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for LayoutManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutManager {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pack" => Ok(Self::Pack),
            "place" => Ok(Self::Place),
            "grid" => Ok(Self::Grid),
            other => Err(MetaError::UnknownLayoutManager(other.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// GridAxis / GridRcEntry
// ---------------------------------------------------------------------------

/// Row or column axis of a grid configuration entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridAxis {
    Row,
    Column,
}

impl GridAxis {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "col",
        }
    }
}

impl fmt::Display for GridAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridAxis {
    type Err = MetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(Self::Row),
            "col" | "column" => Ok(Self::Column),
            other => Err(MetaError::UnknownGridAxis(other.to_owned())),
        }
    }
}

/// One row/column override: `(axis, index, property) -> value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRcEntry {
    pub axis: GridAxis,
    pub index: u32,
    pub property: String,
    pub value: String,
}

impl GridRcEntry {
    pub fn new(
        axis: GridAxis,
        index: u32,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            axis,
            index,
            property: property.into(),
            value: value.into(),
        }
    }

    /// Whether this entry is keyed by `(axis, index, property)`.
    pub fn matches(&self, axis: GridAxis, index: u32, property: &str) -> bool {
        self.axis == axis && self.index == index && self.property == property
    }
}
