//! Table registry.
//!
//! Tables that other tables need to reach at roll time are registered here
//! by id. The registry owns them; callers only get snapshots, dice rewrites
//! and rolls through its methods. Each table has its own lock, held just long
//! enough to roll its dice and pick an entry, so an entry's action can
//! rewrite and re-roll the very table it came from.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::dice::{Dice, Die};
use crate::error::{TableError, TableResult};
use crate::rng::RandomSource;
use crate::table::{MAX_DEPTH, WeightedTable};

/// Id → table lookup shared by every table that rolls through it.
#[derive(Debug, Default)]
pub struct Registry {
    tables: RwLock<HashMap<String, Arc<Mutex<WeightedTable>>>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `table` under its id.
    ///
    /// Anonymous tables are not registrable and are ignored (returns `false`).
    /// Registering an id again replaces the earlier table.
    pub fn add(&self, table: WeightedTable) -> bool {
        let Some(id) = table.id().map(str::to_string) else {
            tracing::debug!(table = table.name(), "skipping anonymous table");
            return false;
        };
        let mut tables = self.tables.write();
        if tables.contains_key(&id) {
            tracing::debug!(id = %id, "replacing registered table");
        } else {
            tracing::debug!(id = %id, "registering table");
        }
        tables.insert(id, Arc::new(Mutex::new(table)));
        true
    }

    /// A snapshot of the table registered as `id`.
    pub fn get(&self, id: &str) -> Option<WeightedTable> {
        self.slot(id).ok().map(|slot| slot.lock().clone())
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.tables.read().contains_key(id)
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.tables.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Rewrite the dice of the table registered as `id`.
    pub fn set_dice(&self, id: &str, dice: Dice) -> TableResult<()> {
        let slot = self.slot(id)?;
        let mut table = slot.lock();
        rewrite(&mut table, id, dice)
    }

    /// Roll the table registered as `id`.
    pub fn roll(&self, id: &str, rng: &mut dyn RandomSource) -> TableResult<String> {
        self.roll_nested(id, rng, 0)
    }

    pub(crate) fn roll_nested(
        &self,
        id: &str,
        rng: &mut dyn RandomSource,
        depth: u32,
    ) -> TableResult<String> {
        let slot = self.slot(id)?;
        let outcome = {
            let table = slot.lock();
            if depth > MAX_DEPTH {
                return Err(TableError::RecursionLimit {
                    table: table.name().to_string(),
                });
            }
            table.select(rng)?
        };
        outcome.resolve(rng, self, depth)
    }

    /// Rewrite the dice of `id`, roll `veto`, and pick the next entry, all
    /// under one hold of the table's lock. `None` means the veto die showed
    /// its top face.
    pub(crate) fn narrow(
        &self,
        id: &str,
        dice: Dice,
        veto: Option<Die>,
        rng: &mut dyn RandomSource,
        depth: u32,
    ) -> TableResult<Option<String>> {
        let slot = self.slot(id)?;
        let outcome = {
            let mut table = slot.lock();
            rewrite(&mut table, id, dice)?;
            if veto.is_some_and(|die| die.roll(rng) == die.sides()) {
                tracing::debug!(id, "veto die hit, entry yields no text");
                return Ok(None);
            }
            if depth > MAX_DEPTH {
                return Err(TableError::RecursionLimit {
                    table: table.name().to_string(),
                });
            }
            table.select(rng)?
        };
        outcome.resolve(rng, self, depth).map(Some)
    }

    fn slot(&self, id: &str) -> TableResult<Arc<Mutex<WeightedTable>>> {
        self.tables
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| TableError::NotFound(format!("no table registered as \"{id}\"")))
    }
}

fn rewrite(table: &mut WeightedTable, id: &str, dice: Dice) -> TableResult<()> {
    if table.dice() != dice {
        tracing::debug!(id, from = %table.dice(), to = %dice, "rewriting table dice");
    }
    table.set_dice(dice)
}
