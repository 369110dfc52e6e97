//! World trait tables.

use swn_tables::{Dice, Die, Entry, TableResult, UniformList, WeightedTable};

/// The 2d6 trait tables and the d8 lists for secondary worlds.
#[derive(Debug, Clone)]
pub struct WorldTables {
    /// Atmosphere.
    pub atmosphere: WeightedTable,
    /// Temperature.
    pub temperature: WeightedTable,
    /// Biosphere.
    pub biosphere: WeightedTable,
    /// Population.
    pub population: WeightedTable,
    /// Tech level.
    pub tech_level: WeightedTable,
    /// How a secondary world was settled.
    pub origin: UniformList,
    /// How a secondary world relates to the primary world.
    pub relationship: UniformList,
    /// What brings a secondary world into contact with the primary world.
    pub contact: UniformList,
}

impl WorldTables {
    /// Build the default tables.
    pub fn new() -> TableResult<Self> {
        Ok(Self {
            atmosphere: bell(
                "Atmosphere",
                [
                    "Corrosive, damaging to foreign objects",
                    "Inert gas, useless for respiration",
                    "Airless or thin to the point of suffocation",
                    "Breathable mix",
                    "Thick, but breathable with a pressure mask",
                    "Invasive, toxic to those who breathe it",
                    "Corrosive and invasive",
                ],
            )?,
            temperature: bell(
                "Temperature",
                [
                    "Frozen, locked in perpetual ice",
                    "Cold-to-temperate, with wide swings",
                    "Cold, dominated by glaciers and tundra",
                    "Temperate, Earthlike in its ranges",
                    "Warm, tropical and hotter in places",
                    "Temperate-to-warm, with wide swings",
                    "Burning, intolerably hot on the surface",
                ],
            )?,
            biosphere: bell(
                "Biosphere",
                [
                    "Remnant biosphere",
                    "Microbial life forms exist",
                    "No native biosphere",
                    "Human-miscible biosphere",
                    "Immiscible biosphere",
                    "Hybrid biosphere",
                    "Engineered biosphere",
                ],
            )?,
            population: bell(
                "Population",
                [
                    "Failed colony",
                    "Outpost",
                    "Fewer than a million inhabitants",
                    "Several million inhabitants",
                    "Hundreds of millions of inhabitants",
                    "Billions of inhabitants",
                    "Alien inhabitants",
                ],
            )?,
            tech_level: bell(
                "Tech Level",
                [
                    "TL0, neolithic-level technology",
                    "TL1, medieval technology",
                    "TL2, early industrial technology",
                    "TL3, modern technology",
                    "TL4, baseline interstellar technology",
                    "TL4+, with specialties or some surviving TL5 tech",
                    "TL5, pre-Silence technology",
                ],
            )?,
            origin: UniformList::new(
                "Origin",
                [
                    "Recent colony from the primary world",
                    "Refuge for exiles from the primary world",
                    "Founded ages ago by a different group",
                    "Founded long ago, lost contact until recently",
                    "Lost colony found by the primary world",
                    "Colony recently re-established after collapse",
                    "Settled by an alien species",
                    "Shared ancestry with the primary world, settled apart",
                ],
            )?,
            relationship: UniformList::new(
                "Relationship",
                [
                    "Deep-rooted enmity",
                    "Wary neutrality",
                    "Friendly trade partners",
                    "Colonial master and subject",
                    "Open and bloody rivalry",
                    "Uneasy alliance against an outside threat",
                    "Religious or ideological kinship",
                    "Bitter memories of an old war",
                ],
            )?,
            contact: UniformList::new(
                "Contact",
                [
                    "Regular spike drive traffic",
                    "Occasional smugglers and free traders",
                    "A shared asteroid mining claim",
                    "Cultural exchange between elites",
                    "Refugees crossing in numbers",
                    "Military patrols watching each other",
                    "Pilgrims visiting a shared holy site",
                    "Almost none; contact is rare and suspicious",
                ],
            )?,
        })
    }
}

/// A 2d6 table with the usual bell-curve bands: 2, 3, 4-5, 6-8, 9-10, 11, 12.
fn bell(name: &str, texts: [&str; 7]) -> TableResult<WeightedTable> {
    const BANDS: [&[u32]; 7] = [&[2], &[3], &[4, 5], &[6, 7, 8], &[9, 10], &[11], &[12]];
    let entries = BANDS
        .into_iter()
        .zip(texts)
        .map(|(band, text)| Entry::text(band.iter().copied(), text))
        .collect();
    WeightedTable::new(name, Dice::new(2, Die::D6)?, entries)
}
