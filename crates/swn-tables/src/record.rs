//! Labelled records handed to formatters.
//!
//! Every generated object exposes a title and an ordered list of
//! `(label, value)` fields. Output modes are the formatter's business.

use serde::Serialize;

/// One labelled value of a generated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Row label.
    pub label: String,
    /// Row value.
    pub value: String,
}

impl Field {
    /// Build a field.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A generated object that can be rendered as a labelled table.
pub trait Record {
    /// Heading for the record.
    fn title(&self) -> String;

    /// Fields in display order.
    fn fields(&self) -> Vec<Field>;
}
