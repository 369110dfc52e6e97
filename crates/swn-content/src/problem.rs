//! Adventure problems.
//!
//! A conflict type is picked first, then a situation and a focus from that
//! conflict's own lists.

use swn_tables::{
    CompositeGroup, CompositeRoll, CompositeTable, RandomSource, Registry, TableResult,
    UniformList,
};

const CONFLICTS: &[(&str, [&str; 4], [&str; 4])] = &[
    (
        "Money",
        [
            "Money is owed to a dangerous party",
            "Money is being stolen by someone",
            "Money is needed to avert a disaster",
            "A fortune is there for the taking",
        ],
        [
            "A loan shark and their muscle",
            "An embezzling clerk",
            "A gambling debt",
            "A buried stash of old credits",
        ],
    ),
    (
        "Revenge",
        [
            "Someone was wronged and wants payback",
            "An old feud has flared up again",
            "A dead man's kin want justice",
            "A betrayal has come to light",
        ],
        [
            "A disgraced officer",
            "A wronged family",
            "A scarred veteran",
            "A jilted business partner",
        ],
    ),
    (
        "Power",
        [
            "Someone wants control of a group",
            "A leader is losing their grip",
            "A rival is rising too quickly",
            "An office has fallen vacant",
        ],
        [
            "A city council seat",
            "A criminal syndicate",
            "A military command",
            "A corporate board",
        ],
    ),
    (
        "Natural Danger",
        [
            "A disaster is coming and few believe it",
            "A disaster struck and people are trapped",
            "Wildlife is moving into settled areas",
            "The climate is turning hostile",
        ],
        [
            "A flood-threatened town",
            "A collapsing mine",
            "A migrating predator pack",
            "A failing weather station",
        ],
    ),
    (
        "Religion",
        [
            "A heresy is spreading",
            "A holy site is threatened",
            "A prophet makes dangerous claims",
            "Two sects are close to violence",
        ],
        [
            "A charismatic preacher",
            "A contested shrine",
            "A stolen relic",
            "An inquisitor",
        ],
    ),
    (
        "Ideology",
        [
            "A radical movement is gaining ground",
            "The government cracks down on dissent",
            "An old ideal is being betrayed",
            "A reform threatens entrenched interests",
        ],
        [
            "A student movement",
            "A censor's office",
            "A revolutionary cell",
            "A propaganda broadcast",
        ],
    ),
];

/// The problem table.
#[derive(Debug)]
pub struct ProblemTable {
    table: CompositeTable,
}

impl ProblemTable {
    /// Build the default problem table.
    pub fn new() -> TableResult<Self> {
        let mut groups = Vec::with_capacity(CONFLICTS.len());
        for &(name, situations, focuses) in CONFLICTS {
            groups.push(CompositeGroup::new(
                name,
                UniformList::new("Situation", situations)?,
                UniformList::new("Focus", focuses)?,
            ));
        }
        Ok(Self {
            table: CompositeTable::new("Problem", ["Conflict", "Situation", "Focus"], groups)?,
        })
    }

    /// The underlying composite table.
    pub fn table(&self) -> &CompositeTable {
        &self.table
    }

    /// Roll a problem.
    pub fn roll(
        &self,
        rng: &mut dyn RandomSource,
        registry: &Registry,
    ) -> TableResult<CompositeRoll> {
        self.table.roll(rng, registry)
    }
}
