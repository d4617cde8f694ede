//! Error type shared by the catalog and the widget descriptor.

/// Errors raised by catalog lookups and catalog loading.
///
/// Reads on a descriptor never fail: a missing property, layout value or
/// grid entry resolves to its default instead.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// The class name has no registration in the catalog.
    #[error("class not found: {0}")]
    UnknownClass(String),
    /// A layout manager name other than `pack`, `place` or `grid`.
    #[error("unknown layout manager: {0}")]
    UnknownLayoutManager(String),
    /// A grid axis name other than `row`, `col` or `column`.
    #[error("unknown grid axis: {0}")]
    UnknownGridAxis(String),
    /// The catalog document is malformed or inconsistent.
    #[error("invalid catalog: {0}")]
    Config(String),
    /// The catalog file could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for MetaError {
    fn from(err: toml::de::Error) -> Self {
        MetaError::Config(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MetaError>;
