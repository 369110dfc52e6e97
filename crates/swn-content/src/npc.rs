//! Quick NPCs: one throw of d4, d6, d8, d10, d12 and d20, each die reading
//! its own table.

use serde::Serialize;
use swn_tables::{
    Field, FixedComposite, RandomSource, Record, Registry, Rollable, TableResult, UniformList,
};

use crate::culture::Culture;
use crate::name::NameRoll;

const AGE: [&str; 4] = ["Unusually young", "Young adult", "Middle-aged", "Elderly"];

const BACKGROUND: [&str; 6] = [
    "The local underclass or poorest natives",
    "Common laborers or cube workers",
    "Aspiring bourgeoise or upper class",
    "The elite of this society",
    "Minority or foreigners",
    "Offworlders or exotics",
];

const ROLE: [&str; 8] = [
    "Criminal, thug, thief, swindler",
    "Menial, cleaner, retail worker, servant",
    "Unskilled heavy labor, porter, construction",
    "Skilled trade, electrician, mechanic, pilot",
    "Idea worker, programmer, writer",
    "Merchant, business owner, trader, banker",
    "Official, bureaucrat, courtier, clerk",
    "Military, soldier, enforcer, law officer",
];

const PROBLEM: [&str; 10] = [
    "They have significant debt or money woes",
    "A loved one is in trouble",
    "Romantic failure with a desired person",
    "Drug or behavioral addiction",
    "Their superior dislikes or resents them",
    "They have a persistent sickness",
    "They hate their job or life situation",
    "Someone dangerous is targeting them",
    "They're pursuing a disastrous purpose",
    "They have no problems worth mentioning",
];

const MOTIVATION: [&str; 12] = [
    "Greed",
    "Revenge",
    "Ambition",
    "Love",
    "Duty",
    "Fear",
    "Curiosity",
    "Faith",
    "Pride",
    "Loyalty to a group",
    "Escape from their past",
    "Protecting their family",
];

const QUIRK: [&str; 20] = [
    "Ambitious",
    "Avaricious",
    "Bitter",
    "Courageous",
    "Cowardly",
    "Curious",
    "Deceitful",
    "Determined",
    "Devoted to a cause",
    "Filial",
    "Hateful",
    "Honorable",
    "Industrious",
    "Jealous",
    "Loyal",
    "Merciful",
    "Paranoid",
    "Pious",
    "Reckless",
    "Superstitious",
];

/// A quick NPC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Npc {
    /// Full name.
    pub name: String,
    /// Culture the name comes from.
    pub culture: Culture,
    /// One labelled result per die.
    pub traits: Vec<Field>,
}

impl Npc {
    /// The trait labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.traits
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

impl Record for Npc {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::new("Name", &self.name),
            Field::new("Culture", self.culture.to_string()),
        ];
        fields.extend(self.traits.iter().cloned());
        fields
    }
}

/// The quick NPC tables.
#[derive(Debug)]
pub struct NpcTable {
    composite: FixedComposite,
}

impl NpcTable {
    /// Build the default tables.
    pub fn new() -> TableResult<Self> {
        let members: Vec<Box<dyn Rollable>> = vec![
            Box::new(UniformList::new("Age", AGE)?),
            Box::new(UniformList::new("Background", BACKGROUND)?),
            Box::new(UniformList::new("Role", ROLE)?),
            Box::new(UniformList::new("Problem", PROBLEM)?),
            Box::new(UniformList::new("Motivation", MOTIVATION)?),
            Box::new(UniformList::new("Quirk", QUIRK)?),
        ];
        Ok(Self {
            composite: FixedComposite::new("Quick NPC", members)?,
        })
    }

    /// Roll every table for a person already named by `name`.
    pub fn roll(
        &self,
        name: &NameRoll,
        rng: &mut dyn RandomSource,
        registry: &Registry,
    ) -> TableResult<Npc> {
        let traits = self.composite.roll(rng, registry)?.results;
        Ok(Npc {
            name: name.full_name(),
            culture: name.culture,
            traits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use swn_tables::Scripted;

    fn name() -> NameRoll {
        NameRoll {
            culture: Culture::Japanese,
            given: "Ren".to_string(),
            family: "Mori".to_string(),
            place: "Minato".to_string(),
        }
    }

    #[test]
    fn every_die_contributes() {
        let table = NpcTable::new().unwrap();
        let registry = Registry::new();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let npc = table.roll(&name(), &mut rng, &registry).unwrap();
            assert_eq!(npc.traits.len(), 6);
            assert_eq!(npc.fields().len(), 8);
        }
    }

    #[test]
    fn scripted_npc() {
        let table = NpcTable::new().unwrap();
        let mut rng = Scripted::new([3, 5, 0, 9, 1, 19]);
        let npc = table.roll(&name(), &mut rng, &Registry::new()).unwrap();
        assert_eq!(npc.title(), "Ren Mori");
        assert_eq!(npc.get("Age"), Some("Elderly"));
        assert_eq!(npc.get("Background"), Some("Offworlders or exotics"));
        assert_eq!(npc.get("Problem"), Some("They have no problems worth mentioning"));
        assert_eq!(npc.get("Quirk"), Some("Superstitious"));
        assert_eq!(npc.get("Height"), None);
    }
}
