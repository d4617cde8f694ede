//! Tagged key for the unified widget property accessor.

use std::fmt;

/// Which slot of a descriptor a property name refers to.
///
/// `"id"` and `"class"` address the identifier and class name; every other
/// name addresses an entry in the property map.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    Identifier,
    ClassName,
    Named(String),
}

impl PropertyKey {
    /// Classify a raw property name.
    pub fn parse(name: &str) -> Self {
        match name {
            "id" => Self::Identifier,
            "class" => Self::ClassName,
            other => Self::Named(other.to_owned()),
        }
    }

    /// The raw property name this key was built from.
    pub fn name(&self) -> &str {
        match self {
            Self::Identifier => "id",
            Self::ClassName => "class",
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for PropertyKey {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        match name.as_str() {
            "id" => Self::Identifier,
            "class" => Self::ClassName,
            _ => Self::Named(name),
        }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
