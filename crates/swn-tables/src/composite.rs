//! Composite tables: several independent sub-rolls bundled into one record.
//!
//! Two shapes are common in sourcebooks:
//! - **Grouped** ([`CompositeTable`]): pick one named group uniformly, then
//!   roll both of that group's sub-tables.
//! - **Fixed** ([`FixedComposite`]): a set of tables of distinct sizes
//!   (d4, d6, d8, ...) that are all rolled every time.

use std::collections::HashSet;

use crate::error::{TableError, TableResult};
use crate::record::{Field, Record};
use crate::registry::Registry;
use crate::rng::RandomSource;
use crate::rollable::Rollable;

/// One named group of a [`CompositeTable`].
#[derive(Debug)]
pub struct CompositeGroup {
    name: String,
    first: Box<dyn Rollable>,
    second: Box<dyn Rollable>,
}

impl CompositeGroup {
    /// A group with two sub-tables.
    pub fn new(
        name: impl Into<String>,
        first: impl Rollable + 'static,
        second: impl Rollable + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Group name, reported as the first field of a roll.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A table that picks one group and rolls both of its sub-tables.
#[derive(Debug)]
pub struct CompositeTable {
    name: String,
    headers: [String; 3],
    groups: Vec<CompositeGroup>,
}

impl CompositeTable {
    /// Build a grouped table. `headers` label the group name and the two
    /// sub-results. Fails if there are no groups.
    pub fn new(
        name: impl Into<String>,
        headers: [&str; 3],
        groups: Vec<CompositeGroup>,
    ) -> TableResult<Self> {
        let name = name.into();
        if groups.is_empty() {
            return Err(TableError::invalid(format!(
                "composite '{name}' has no groups"
            )));
        }
        Ok(Self {
            name,
            headers: headers.map(str::to_string),
            groups,
        })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The groups in order.
    pub fn groups(&self) -> &[CompositeGroup] {
        &self.groups
    }

    /// Pick a group and roll both of its sub-tables.
    pub fn roll(
        &self,
        rng: &mut dyn RandomSource,
        registry: &Registry,
    ) -> TableResult<CompositeRoll> {
        let group = &self.groups[rng.pick(self.groups.len())];
        let first = group.first.roll(rng, registry)?;
        let second = group.second.roll(rng, registry)?;
        Ok(CompositeRoll {
            title: self.name.clone(),
            headers: self.headers.clone(),
            group: group.name.clone(),
            first,
            second,
        })
    }
}

/// The result of rolling a [`CompositeTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeRoll {
    /// Name of the composite table.
    pub title: String,
    /// Labels for the group, first and second results.
    pub headers: [String; 3],
    /// Name of the chosen group.
    pub group: String,
    /// Result of the group's first sub-table.
    pub first: String,
    /// Result of the group's second sub-table.
    pub second: String,
}

impl Record for CompositeRoll {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn fields(&self) -> Vec<Field> {
        let [h0, h1, h2] = &self.headers;
        vec![
            Field::new(h0, &self.group),
            Field::new(h1, &self.first),
            Field::new(h2, &self.second),
        ]
    }
}

/// A fixed set of tables that are all rolled together.
#[derive(Debug)]
pub struct FixedComposite {
    name: String,
    members: Vec<Box<dyn Rollable>>,
}

impl FixedComposite {
    /// Build from `members`, which must be non-empty and of pairwise distinct
    /// sizes. Members whose size is only known at roll time (registered
    /// tables) are exempt from the size check.
    pub fn new(name: impl Into<String>, members: Vec<Box<dyn Rollable>>) -> TableResult<Self> {
        let name = name.into();
        if members.is_empty() {
            return Err(TableError::invalid(format!(
                "composite '{name}' has no members"
            )));
        }
        let mut seen = HashSet::new();
        for member in members.iter().filter(|m| m.span() > 0) {
            if !seen.insert(member.span()) {
                return Err(TableError::invalid(format!(
                    "composite '{name}' has two members of size {}",
                    member.span()
                )));
            }
        }
        Ok(Self { name, members })
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of members; every roll yields this many results.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; composites have at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Roll every member in order.
    pub fn roll(&self, rng: &mut dyn RandomSource, registry: &Registry) -> TableResult<FixedRoll> {
        let mut results = Vec::with_capacity(self.members.len());
        for member in &self.members {
            results.push(Field::new(member.label(), member.roll(rng, registry)?));
        }
        Ok(FixedRoll {
            title: self.name.clone(),
            results,
        })
    }
}

/// The result of rolling a [`FixedComposite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedRoll {
    /// Name of the composite.
    pub title: String,
    /// One labelled result per member, in member order.
    pub results: Vec<Field>,
}

impl FixedRoll {
    /// The result for the member labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.results
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

impl Record for FixedRoll {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn fields(&self) -> Vec<Field> {
        self.results.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{Dice, Die};
    use crate::list::UniformList;
    use crate::rng::Scripted;
    use crate::table::{Entry, WeightedTable};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn list(name: &str, size: u32) -> UniformList {
        UniformList::new(name, (1..=size).map(|i| format!("{name} {i}"))).unwrap()
    }

    fn polyhedral() -> FixedComposite {
        FixedComposite::new(
            "Quick NPC",
            vec![
                Box::new(list("Age", 4)),
                Box::new(list("Background", 6)),
                Box::new(list("Role", 8)),
                Box::new(list("Problem", 10)),
                Box::new(list("Motivation", 12)),
                Box::new(list("Quirk", 20)),
            ],
        )
        .unwrap()
    }

    fn problems() -> CompositeTable {
        CompositeTable::new(
            "Problem",
            ["Conflict", "Situation", "Focus"],
            vec![
                CompositeGroup::new("Money", list("Debt", 4), list("Lender", 4)),
                CompositeGroup::new(
                    "Revenge",
                    WeightedTable::new(
                        "Grudge",
                        Dice::one(Die::D4).unwrap(),
                        vec![Entry::text(1..=2, "old"), Entry::text(3..=4, "fresh")],
                    )
                    .unwrap(),
                    list("Target", 6),
                ),
            ],
        )
        .unwrap()
    }

    #[test]
    fn fixed_always_rolls_every_member() {
        let composite = polyhedral();
        let registry = Registry::new();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let roll = composite.roll(&mut rng, &registry).unwrap();
            assert_eq!(roll.results.len(), 6);
            assert_eq!(roll.fields().len(), 6);
        }
        // An exhausted script still yields six results.
        let mut rng = Scripted::new(Vec::new());
        let roll = composite.roll(&mut rng, &registry).unwrap();
        let labels: Vec<&str> = roll.results.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Age", "Background", "Role", "Problem", "Motivation", "Quirk"]
        );
        assert_eq!(roll.get("Quirk"), Some("Quirk 1"));
    }

    #[test]
    fn fixed_rejects_duplicate_sizes() {
        let err = FixedComposite::new(
            "Twins",
            vec![Box::new(list("A", 6)), Box::new(list("B", 6))],
        )
        .unwrap_err();
        assert!(err.to_string().contains("two members of size 6"));
    }

    #[test]
    fn fixed_rejects_empty() {
        assert!(FixedComposite::new("None", Vec::new()).is_err());
    }

    #[test]
    fn grouped_rolls_chosen_group() {
        let table = problems();
        let registry = Registry::new();
        // group index 1, grudge d4 = 4, target index 2
        let mut rng = Scripted::new([1, 4, 2]);
        let roll = table.roll(&mut rng, &registry).unwrap();
        assert_eq!(roll.group, "Revenge");
        assert_eq!(roll.first, "fresh");
        assert_eq!(roll.second, "Target 3");
        assert_eq!(
            roll.fields(),
            vec![
                Field::new("Conflict", "Revenge"),
                Field::new("Situation", "fresh"),
                Field::new("Focus", "Target 3"),
            ]
        );
        assert_eq!(roll.title(), "Problem");
    }

    #[test]
    fn grouped_picks_groups_uniformly() {
        let table = problems();
        let registry = Registry::new();
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 10_000;
        let money = (0..trials)
            .filter(|_| table.roll(&mut rng, &registry).unwrap().group == "Money")
            .count();
        let freq = money as f64 / f64::from(trials);
        assert!((freq - 0.5).abs() < 0.03, "{freq}");
    }

    #[test]
    fn grouped_rejects_empty() {
        assert!(CompositeTable::new("None", ["a", "b", "c"], Vec::new()).is_err());
    }
}
