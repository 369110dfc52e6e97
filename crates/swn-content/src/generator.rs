//! The generator facade.
//!
//! Owns every content table, the registry the shared tables live in and the
//! random source. Registry rewrites (such as religion leadership narrowing to
//! regional rule) last as long as the generator does.

use rand::rngs::StdRng;
use serde::Serialize;
use swn_tables::{CompositeRoll, Dice, Field, Record, Registry, TagRoll, rng};

use crate::config::GenConfig;
use crate::culture::Culture;
use crate::error::ContentResult;
use crate::name::{NameRoll, NameTables};
use crate::npc::{Npc, NpcTable};
use crate::problem::ProblemTable;
use crate::religion::{Religion, ReligionTables};
use crate::world::{World, WorldGen};

/// A single dice expression and what it rolled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceRoll {
    /// The expression, normalised (`"d20"` becomes `"1d20"`).
    pub expr: String,
    /// The sum rolled.
    pub total: u32,
}

impl Record for DiceRoll {
    fn title(&self) -> String {
        self.expr.clone()
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::new("Result", self.total.to_string())]
    }
}

/// Generates sector content from the default tables.
#[derive(Debug)]
pub struct Generator {
    config: GenConfig,
    rng: StdRng,
    registry: Registry,
    names: NameTables,
    religions: ReligionTables,
    worlds: WorldGen,
    problems: ProblemTable,
    npcs: NpcTable,
}

impl Generator {
    /// Build every table and seed the random source from `config`.
    pub fn new(config: GenConfig) -> ContentResult<Self> {
        let registry = Registry::new();
        let religions = ReligionTables::register(&registry)?;
        let generator = Self {
            rng: rng::seeded(config.seed),
            names: NameTables::new()?,
            religions,
            worlds: WorldGen::new()?,
            problems: ProblemTable::new()?,
            npcs: NpcTable::new()?,
            registry,
            config,
        };
        tracing::debug!(
            tables = generator.registry.len(),
            tags = generator.worlds.tags().len(),
            "generator ready"
        );
        Ok(generator)
    }

    /// The configuration this generator was built with.
    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// The registry holding the shared tables.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The configured culture, or a random one.
    pub fn culture(&mut self) -> Culture {
        self.config
            .culture
            .unwrap_or_else(|| Culture::random(&mut self.rng))
    }

    /// Roll a full name and a place name.
    pub fn name(&mut self) -> NameRoll {
        let culture = self.culture();
        self.names.roll(culture, &mut self.rng)
    }

    /// Roll a religion.
    pub fn religion(&mut self) -> ContentResult<Religion> {
        Ok(self.religions.roll(&mut self.rng, &self.registry)?)
    }

    /// Roll a world. Secondary worlds also get origin, relationship and
    /// contact details.
    pub fn world(&mut self, primary: bool) -> ContentResult<World> {
        let culture = self.culture();
        let name = self.names.by_culture(culture).place.roll(&mut self.rng).to_string();
        tracing::debug!(%culture, primary, name = %name, "rolling world");
        Ok(self.worlds.roll(
            name,
            culture,
            primary,
            &self.config.excluded_tags,
            &mut self.rng,
            &self.registry,
        )?)
    }

    /// Roll the hooks of the tag called `name` (ignoring case), or of a
    /// random tag.
    pub fn tag(&mut self, name: Option<&str>) -> ContentResult<TagRoll> {
        let tags = self.worlds.tags();
        let rolled = match name {
            Some(name) => tags.find(name)?.roll(&mut self.rng),
            None => tags.roll(&mut self.rng)?,
        };
        Ok(rolled)
    }

    /// Names of every tag.
    pub fn tag_names(&self) -> Vec<&str> {
        self.worlds.tags().names()
    }

    /// Roll an adventure problem.
    pub fn problem(&mut self) -> ContentResult<CompositeRoll> {
        Ok(self.problems.roll(&mut self.rng, &self.registry)?)
    }

    /// Roll a quick NPC.
    pub fn npc(&mut self) -> ContentResult<Npc> {
        let name = self.name();
        Ok(self.npcs.roll(&name, &mut self.rng, &self.registry)?)
    }

    /// Parse and roll a dice expression such as `"3d6"`.
    pub fn roll_dice(&mut self, expr: &str) -> ContentResult<DiceRoll> {
        let dice: Dice = expr.parse()?;
        let total = dice.roll(&mut self.rng);
        Ok(DiceRoll {
            expr: dice.to_string(),
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContentError;
    use crate::religion::LEADERSHIP_ID;
    use swn_tables::TableError;

    fn seeded(seed: u64) -> Generator {
        Generator::new(GenConfig::default().with_seed(seed)).unwrap()
    }

    #[test]
    fn same_seed_same_content() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        assert_eq!(a.world(false).unwrap(), b.world(false).unwrap());
        assert_eq!(a.religion().unwrap(), b.religion().unwrap());
        assert_eq!(a.npc().unwrap(), b.npc().unwrap());
        assert_eq!(a.problem().unwrap(), b.problem().unwrap());
    }

    #[test]
    fn registers_religion_tables() {
        let generator = seeded(1);
        assert!(generator.registry().contains(LEADERSHIP_ID));
        assert_eq!(generator.registry().len(), 2);
    }

    #[test]
    fn configured_culture_is_used() {
        let mut generator =
            Generator::new(GenConfig::default().with_seed(5).with_culture(Culture::Nigerian))
                .unwrap();
        assert_eq!(generator.world(true).unwrap().culture, Culture::Nigerian);
        assert_eq!(generator.name().culture, Culture::Nigerian);
        assert_eq!(generator.npc().unwrap().culture, Culture::Nigerian);
    }

    #[test]
    fn excluded_tags_never_appear() {
        let config = GenConfig::default()
            .with_seed(11)
            .with_excluded_tags(["civil war", "Desert World"]);
        let mut generator = Generator::new(config).unwrap();
        for _ in 0..100 {
            let world = generator.world(true).unwrap();
            for tag in &world.tags {
                assert!(tag.name != "Civil War" && tag.name != "Desert World");
            }
        }
    }

    #[test]
    fn tag_lookup() {
        let mut generator = seeded(3);
        assert_eq!(generator.tag(Some("hivemind")).unwrap().name, "Hivemind");
        assert!(generator.tag(None).is_ok());
        let err = generator.tag(Some("Atlantis")).unwrap_err();
        assert_eq!(err.to_string(), "no tag with name \"Atlantis\"");
        assert!(generator.tag_names().contains(&"Zombies"));
    }

    #[test]
    fn leadership_narrowing_persists() {
        let mut generator = seeded(7);
        for _ in 0..200 {
            generator.religion().unwrap();
        }
        // Two hundred rolls all but guarantee a 6 came up at least once.
        let leadership = generator.registry().get(LEADERSHIP_ID).unwrap();
        assert_eq!(leadership.dice().to_string(), "1d5");
    }

    #[test]
    fn roll_dice_expression() {
        let mut generator = seeded(9);
        for _ in 0..100 {
            let roll = generator.roll_dice("3d6").unwrap();
            assert_eq!(roll.expr, "3d6");
            assert!((3..=18).contains(&roll.total));
        }
        assert_eq!(generator.roll_dice("d20").unwrap().title(), "1d20");
        assert!(matches!(
            generator.roll_dice("six"),
            Err(ContentError::Table(TableError::InvalidConfiguration(_)))
        ));
    }
}
