//! Weighted tables.
//!
//! A [`WeightedTable`] is rolled with its dice expression; the sum selects the
//! first [`Entry`] whose match set contains it. Entries either carry static
//! text or a named [`Action`] that computes the result at roll time, possibly
//! rolling or rewriting other tables through the [`Registry`].

use std::collections::BTreeSet;

use crate::dice::{Dice, Die};
use crate::error::{TableError, TableResult};
use crate::registry::Registry;
use crate::rng::RandomSource;

/// Deepest chain of table rolls an action may trigger.
pub(crate) const MAX_DEPTH: u32 = 16;

/// A dynamic behaviour attached to a table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Roll the registered table `table` and append its result to `prefix`.
    Consult {
        /// Registry id of the table to roll.
        table: String,
        /// Text placed before the consulted result.
        prefix: String,
    },
    /// Rewrite the dice of the registered table `table`, then roll it again.
    ///
    /// The rewrite sticks: every later roll of that table uses `dice`. When
    /// `veto` is set it is rolled after the rewrite, and showing its highest
    /// face ends the action with an empty result.
    Narrow {
        /// Registry id of the table to rewrite and roll.
        table: String,
        /// The replacement dice expression.
        dice: Dice,
        /// Die whose top face suppresses the result.
        veto: Option<Die>,
        /// Text placed before the re-rolled result.
        prefix: String,
    },
}

impl Action {
    fn run(
        &self,
        rng: &mut dyn RandomSource,
        registry: &Registry,
        depth: u32,
    ) -> TableResult<String> {
        match self {
            Self::Consult { table, prefix } => {
                let result = registry.roll_nested(table, rng, depth + 1)?;
                Ok(format!("{prefix}{result}"))
            }
            Self::Narrow {
                table,
                dice,
                veto,
                prefix,
            } => {
                let result = registry.narrow(table, *dice, *veto, rng, depth + 1)?;
                Ok(result.map_or_else(String::new, |result| format!("{prefix}{result}")))
            }
        }
    }
}

/// What an entry produces when it is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Fixed text, returned verbatim.
    Static(String),
    /// Text computed by an action.
    Dynamic {
        /// Short description of the entry, used when listing the table.
        summary: String,
        /// The behaviour run when the entry is selected.
        action: Action,
    },
}

impl Outcome {
    /// The text shown for this outcome when the table is listed.
    pub fn summary(&self) -> &str {
        match self {
            Self::Static(text) => text,
            Self::Dynamic { summary, .. } => summary,
        }
    }

    pub(crate) fn resolve(
        &self,
        rng: &mut dyn RandomSource,
        registry: &Registry,
        depth: u32,
    ) -> TableResult<String> {
        match self {
            Self::Static(text) => Ok(text.clone()),
            Self::Dynamic { action, .. } => action.run(rng, registry, depth),
        }
    }
}

/// One row of a weighted table: the sums it claims and what it yields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    matches: BTreeSet<u32>,
    outcome: Outcome,
}

impl Entry {
    /// An entry returning fixed text for every sum in `matches`.
    pub fn text(matches: impl IntoIterator<Item = u32>, text: impl Into<String>) -> Self {
        Self {
            matches: matches.into_iter().collect(),
            outcome: Outcome::Static(text.into()),
        }
    }

    /// An entry running `action` for every sum in `matches`.
    pub fn action(
        matches: impl IntoIterator<Item = u32>,
        summary: impl Into<String>,
        action: Action,
    ) -> Self {
        Self {
            matches: matches.into_iter().collect(),
            outcome: Outcome::Dynamic {
                summary: summary.into(),
                action,
            },
        }
    }

    /// The sums this entry claims.
    pub fn matches(&self) -> &BTreeSet<u32> {
        &self.matches
    }

    /// Whether `sum` selects this entry.
    pub fn claims(&self, sum: u32) -> bool {
        self.matches.contains(&sum)
    }

    /// What this entry produces.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}

/// A ranked table of entries selected by a dice sum.
///
/// Construction checks coverage: entries are disjoint and together claim
/// exactly every sum the dice can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedTable {
    name: String,
    id: Option<String>,
    dice: Dice,
    entries: Vec<Entry>,
}

impl WeightedTable {
    /// Build a table, rejecting entries that leave gaps, overlap, or claim
    /// sums the dice can never roll.
    pub fn new(name: impl Into<String>, dice: Dice, entries: Vec<Entry>) -> TableResult<Self> {
        let name = name.into();
        let mut claimed = BTreeSet::new();

        for entry in &entries {
            if entry.matches.is_empty() {
                return Err(TableError::invalid(format!(
                    "table '{name}' has an entry that claims no sums"
                )));
            }
            for &sum in &entry.matches {
                if !dice.domain().contains(&sum) {
                    return Err(TableError::invalid(format!(
                        "table '{name}' claims {sum}, outside {dice} range {}-{}",
                        dice.min(),
                        dice.max()
                    )));
                }
                if !claimed.insert(sum) {
                    return Err(TableError::invalid(format!(
                        "table '{name}' claims {sum} more than once"
                    )));
                }
            }
        }

        if let Some(gap) = dice.domain().find(|sum| !claimed.contains(sum)) {
            return Err(TableError::invalid(format!(
                "table '{name}' has no entry for {gap} on {dice}"
            )));
        }

        Ok(Self {
            name,
            id: None,
            dice,
            entries,
        })
    }

    /// Give the table a registry id. An empty id leaves it anonymous.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        self.id = (!id.is_empty()).then_some(id);
        self
    }

    /// Display name of the table.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry id, if the table has one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The dice currently used to roll this table.
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// The entries in match order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Replace the dice expression.
    ///
    /// The new dice may roll a narrower range than the entries cover, but
    /// every sum they can produce must still be claimed.
    pub fn set_dice(&mut self, dice: Dice) -> TableResult<()> {
        if let Some(gap) = dice
            .domain()
            .find(|&sum| !self.entries.iter().any(|e| e.claims(sum)))
        {
            return Err(TableError::invalid(format!(
                "table '{}' cannot switch to {dice}: no entry for {gap}",
                self.name
            )));
        }
        self.dice = dice;
        Ok(())
    }

    /// The first entry claiming `sum`.
    pub fn lookup(&self, sum: u32) -> TableResult<&Entry> {
        self.entries
            .iter()
            .find(|e| e.claims(sum))
            .ok_or_else(|| TableError::UnresolvedRoll {
                table: self.name.clone(),
                sum,
            })
    }

    /// Roll the dice and return the selected entry's outcome.
    pub(crate) fn select(&self, rng: &mut dyn RandomSource) -> TableResult<Outcome> {
        let sum = self.dice.roll(rng);
        Ok(self.lookup(sum)?.outcome.clone())
    }

    /// Roll the table. Actions resolve against `registry`.
    pub fn roll(&self, rng: &mut dyn RandomSource, registry: &Registry) -> TableResult<String> {
        self.select(rng)?.resolve(rng, registry, 0)
    }
}

impl std::fmt::Display for WeightedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} ({})", self.name, self.dice)?;
        for entry in &self.entries {
            let (lo, hi) = match (entry.matches.first(), entry.matches.last()) {
                (Some(lo), Some(hi)) => (*lo, *hi),
                _ => continue,
            };
            if lo == hi {
                writeln!(f, "{lo}\t{}", entry.outcome.summary())?;
            } else {
                writeln!(f, "{lo}-{hi}\t{}", entry.outcome.summary())?;
            }
        }
        Ok(())
    }
}
