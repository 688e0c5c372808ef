//! Chart data model.

/// A single bar: display label and its value.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Label drawn beside the bar (may be empty)
    pub label: String,
    /// Bar length in data units
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
