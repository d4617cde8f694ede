//! Event bindings attached to a widget.

/// A single event binding: sequence -> handler callback name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingEntry {
    /// Event sequence, e.g. `<Button-1>` or `<<ComboboxSelected>>`.
    pub sequence: String,
    /// Name of the handler the generated code calls.
    pub handler: String,
    /// Whether the binding is added alongside existing ones (`add="+"`).
    pub add: bool,
}

impl BindingEntry {
    pub fn new(sequence: impl Into<String>, handler: impl Into<String>, add: bool) -> Self {
        Self {
            sequence: sequence.into(),
            handler: handler.into(),
            add,
        }
    }

    /// Borrowed `(sequence, handler, add)` view.
    pub fn as_tuple(&self) -> (&str, &str, bool) {
        (&self.sequence, &self.handler, self.add)
    }
}
