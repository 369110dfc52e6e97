//! Uniform lists: unweighted tables where every item is equally likely.

use serde::Serialize;

use crate::error::{TableError, TableResult};
use crate::rng::RandomSource;

/// A named, non-empty list of items picked with equal probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniformList {
    name: String,
    items: Vec<String>,
}

impl UniformList {
    /// Build a list. Fails if `items` is empty.
    pub fn new<I, S>(name: impl Into<String>, items: I) -> TableResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(TableError::invalid(format!("list '{name}' has no items")));
        }
        Ok(Self { name, items })
    }

    /// Display name of the list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All items in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; lists are never empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pick one item.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> &str {
        &self.items[rng.pick(self.items.len())]
    }

    /// Pick one item for a one-off lookup outside a table roll.
    pub fn random(&self, rng: &mut dyn RandomSource) -> &str {
        self.roll(rng)
    }
}

impl std::fmt::Display for UniformList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (d{})", self.name, self.items.len())?;
        for (i, item) in self.items.iter().enumerate() {
            writeln!(f, "{}\t{item}", i + 1)?;
        }
        Ok(())
    }
}
