//! Change flags carried by every descriptor notification.
//!
//! [`ChangeFlags`] is a small bitmask. Each mutating accessor on
//! [`WidgetMeta`](crate::meta::WidgetMeta) raises exactly one notification
//! whose flags combine everything that changed.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Bitmask describing what a descriptor mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChangeFlags(pub u16);

impl ChangeFlags {
    pub const NONE: ChangeFlags = ChangeFlags(0);
    pub const LAYOUT_MANAGER_CHANGED: ChangeFlags = ChangeFlags(1);
    pub const LAYOUT_PROPERTY_CHANGED: ChangeFlags = ChangeFlags(2);
    pub const PROPERTY_CHANGED: ChangeFlags = ChangeFlags(4);
    pub const PROPERTY_RO_CHANGED: ChangeFlags = ChangeFlags(8);
    pub const BINDING_CHANGED: ChangeFlags = ChangeFlags(16);
    /// A value was cleared back to its default.
    pub const PROPERTY_BLANKED: ChangeFlags = ChangeFlags(32);
    pub const PROPERTY_DATA_CHANGED: ChangeFlags = ChangeFlags(64);
    pub const PROPERTY_ID_CHANGED: ChangeFlags = ChangeFlags(128);

    const NAMES: [(ChangeFlags, &'static str); 8] = [
        (Self::LAYOUT_MANAGER_CHANGED, "LAYOUT_MANAGER_CHANGED"),
        (Self::LAYOUT_PROPERTY_CHANGED, "LAYOUT_PROPERTY_CHANGED"),
        (Self::PROPERTY_CHANGED, "PROPERTY_CHANGED"),
        (Self::PROPERTY_RO_CHANGED, "PROPERTY_RO_CHANGED"),
        (Self::BINDING_CHANGED, "BINDING_CHANGED"),
        (Self::PROPERTY_BLANKED, "PROPERTY_BLANKED"),
        (Self::PROPERTY_DATA_CHANGED, "PROPERTY_DATA_CHANGED"),
        (Self::PROPERTY_ID_CHANGED, "PROPERTY_ID_CHANGED"),
    ];

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: ChangeFlags) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` shares at least one bit with `other`.
    pub fn intersects(self, other: ChangeFlags) -> bool {
        (self.0 & other.0) != 0
    }

    /// Check whether no flag bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for ChangeFlags {
    type Output = ChangeFlags;
    fn bitor(self, rhs: Self) -> Self::Output {
        ChangeFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChangeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for ChangeFlags {
    type Output = ChangeFlags;
    fn bitand(self, rhs: Self) -> Self::Output {
        ChangeFlags(self.0 & rhs.0)
    }
}

impl fmt::Display for ChangeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
