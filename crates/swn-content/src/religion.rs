//! Religions: origin tradition, evolution and leadership.
//!
//! Origin and leadership live in the registry. Evolution's syncretism entry
//! rolls the origin table a second time, and leadership's "no universal
//! leadership" entry narrows its own dice to 1d5 before rolling again for a
//! regional form of government.

use serde::Serialize;
use swn_tables::{
    Action, Dice, Die, Entry, Field, RandomSource, Record, Registry, TableResult, WeightedTable,
};

/// Registry id of the origin tradition table.
pub const ORIGIN_ID: &str = "religion.origin";
/// Registry id of the leadership table.
pub const LEADERSHIP_ID: &str = "religion.leadership";

const ORIGINS: [&str; 12] = [
    "Paganism",
    "Roman Catholicism",
    "Eastern Orthodox Christianity",
    "Protestant Christianity",
    "Buddhism",
    "Judaism",
    "Islam",
    "Taoism",
    "Hinduism",
    "Zoroastrianism",
    "Confucianism",
    "Ideology",
];

/// A rolled religion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Religion {
    /// Tradition the faith grew out of.
    pub origin: String,
    /// How the faith has changed since.
    pub evolution: String,
    /// Who decides doctrine. Empty when the faith has no leadership to speak of.
    pub leadership: String,
}

impl Record for Religion {
    fn title(&self) -> String {
        "Religion".to_string()
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("Origin", &self.origin),
            Field::new("Evolution", &self.evolution),
            Field::new("Leadership", &self.leadership),
        ]
    }
}

/// The religion tables.
#[derive(Debug, Clone)]
pub struct ReligionTables {
    evolution: WeightedTable,
}

impl ReligionTables {
    /// Build the tables and register the shared ones with `registry`.
    pub fn register(registry: &Registry) -> TableResult<Self> {
        registry.add(origin()?);
        registry.add(leadership()?);
        Ok(Self {
            evolution: evolution()?,
        })
    }

    /// The evolution table.
    pub fn evolution(&self) -> &WeightedTable {
        &self.evolution
    }

    /// Roll a religion: origin, then evolution, then leadership.
    pub fn roll(&self, rng: &mut dyn RandomSource, registry: &Registry) -> TableResult<Religion> {
        let origin = registry.roll(ORIGIN_ID, rng)?;
        let evolution = self.evolution.roll(rng, registry)?;
        let leadership = registry.roll(LEADERSHIP_ID, rng)?;
        Ok(Religion {
            origin,
            evolution,
            leadership,
        })
    }
}

fn origin() -> TableResult<WeightedTable> {
    let entries = (1..).zip(ORIGINS).map(|(n, text)| Entry::text([n], text)).collect();
    Ok(WeightedTable::new("Origin", Dice::one(Die::D12)?, entries)?.with_id(ORIGIN_ID))
}

fn evolution() -> TableResult<WeightedTable> {
    WeightedTable::new(
        "Evolution",
        Dice::one(Die::D8)?,
        vec![
            Entry::text(
                [1],
                "New holy book. A recently found or written text is now held to be holy writ.",
            ),
            Entry::text(
                [2],
                "New prophet. The faith follows the words and example of a recent prophet, who may still live.",
            ),
            Entry::action(
                [3],
                "Syncretism. The faith has merged with a second tradition.",
                Action::Consult {
                    table: ORIGIN_ID.to_string(),
                    prefix: "Syncretism. The faith has reconciled its beliefs with ".to_string(),
                },
            ),
            Entry::text(
                [4],
                "Neofundamentalism. The faith rejects every innovation and keeps even onerous traditions to the letter.",
            ),
            Entry::text(
                [5],
                "Quietism. The faith shuns outsiders and avoids positions of wealth and power.",
            ),
            Entry::text(
                [6],
                "Sacrifices. The faith demands heavy sacrifices, from huge tithes to far darker offerings.",
            ),
            Entry::text(
                [7],
                "Schism. The faith differs from its parent only on fine points of theology, and resents it bitterly.",
            ),
            Entry::text(
                [8],
                "Holy family. One bloodline is specially favoured; its members alone may serve as clergy or figureheads.",
            ),
        ],
    )
}

fn leadership() -> TableResult<WeightedTable> {
    Ok(WeightedTable::new(
        "Leadership",
        Dice::one(Die::D6)?,
        vec![
            Entry::text(
                [1, 2],
                "Patriarch/Matriarch. A single leader determines doctrine for the whole faith.",
            ),
            Entry::text(
                [3, 4],
                "Council. The oldest and most revered clergy set the course of the faith.",
            ),
            Entry::text(
                [5],
                "Democracy. Every member has an equal voice, with doctrine settled at regular councils.",
            ),
            Entry::action(
                [6],
                "No universal leadership",
                Action::Narrow {
                    table: LEADERSHIP_ID.to_string(),
                    dice: Dice::one(Die::Custom(5))?,
                    veto: Some(Die::D6),
                    prefix: "Each region governed independently by a ".to_string(),
                },
            ),
        ],
    )?
    .with_id(LEADERSHIP_ID))
}
