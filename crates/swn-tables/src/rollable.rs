//! Anything that rolls to a line of text.
//!
//! Composite tables hold their parts as [`Rollable`] trait objects so a group
//! can mix weighted tables, uniform lists and registered tables.

use crate::error::TableResult;
use crate::list::UniformList;
use crate::registry::Registry;
use crate::rng::RandomSource;
use crate::table::WeightedTable;

/// A table-like source of text.
pub trait Rollable: std::fmt::Debug + Send + Sync {
    /// Label shown next to the rolled value.
    fn label(&self) -> &str;

    /// How many distinct results a roll can select from.
    fn span(&self) -> u32;

    /// Roll once.
    fn roll(&self, rng: &mut dyn RandomSource, registry: &Registry) -> TableResult<String>;
}

impl Rollable for WeightedTable {
    fn label(&self) -> &str {
        self.name()
    }

    fn span(&self) -> u32 {
        self.dice().max() - self.dice().min() + 1
    }

    fn roll(&self, rng: &mut dyn RandomSource, registry: &Registry) -> TableResult<String> {
        WeightedTable::roll(self, rng, registry)
    }
}

impl Rollable for UniformList {
    fn label(&self) -> &str {
        self.name()
    }

    fn span(&self) -> u32 {
        u32::try_from(self.len()).unwrap_or(u32::MAX)
    }

    fn roll(&self, rng: &mut dyn RandomSource, _registry: &Registry) -> TableResult<String> {
        Ok(UniformList::roll(self, rng).to_string())
    }
}

/// A reference to a table owned by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registered {
    id: String,
    label: String,
}

impl Registered {
    /// Refer to the table registered as `id`, shown as `label`.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// The registry id this refers to.
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Rollable for Registered {
    fn label(&self) -> &str {
        &self.label
    }

    /// Unknown until rolled; registered tables can change their dice.
    fn span(&self) -> u32 {
        0
    }

    fn roll(&self, rng: &mut dyn RandomSource, registry: &Registry) -> TableResult<String> {
        registry.roll(&self.id, rng)
    }
}
