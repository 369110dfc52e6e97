//! Worlds.
//!
//! A world has a culture, a place name from that culture, two distinct tags
//! and one roll on each trait table. Secondary worlds also record how they
//! came to be and how they deal with the primary world.

mod tables;
mod tags;

pub use tables::WorldTables;
pub use tags::default_tags;

use serde::Serialize;
use swn_tables::{Field, RandomSource, Record, Registry, TableResult, TagRoll, TagSet};

use crate::culture::Culture;

/// Extra details rolled only for secondary worlds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Relations {
    /// How the world was settled.
    pub origin: String,
    /// How it gets on with the primary world.
    pub relationship: String,
    /// What brings the two into contact.
    pub contact: String,
}

/// A generated world.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct World {
    /// Whether this is the primary world of its system.
    pub primary: bool,
    /// World name.
    pub name: String,
    /// Dominant culture.
    pub culture: Culture,
    /// Two distinct tags.
    pub tags: [TagRoll; 2],
    /// Atmosphere.
    pub atmosphere: String,
    /// Temperature.
    pub temperature: String,
    /// Biosphere.
    pub biosphere: String,
    /// Population.
    pub population: String,
    /// Tech level.
    pub tech_level: String,
    /// Set for secondary worlds only.
    pub relations: Option<Relations>,
}

impl Record for World {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![
            Field::new("Name", &self.name),
            Field::new("Culture", self.culture.to_string()),
            Field::new("Atmosphere", &self.atmosphere),
            Field::new("Temperature", &self.temperature),
            Field::new("Biosphere", &self.biosphere),
            Field::new("Population", &self.population),
            Field::new("Tech Level", &self.tech_level),
        ];
        fields.extend(self.tags.iter().map(|t| Field::new(&t.name, &t.desc)));
        if let Some(relations) = &self.relations {
            fields.push(Field::new("Origin", &relations.origin));
            fields.push(Field::new("Relationship", &relations.relationship));
            fields.push(Field::new("Contact", &relations.contact));
        }
        fields
    }
}

/// Everything needed to roll a world.
#[derive(Debug, Clone)]
pub struct WorldGen {
    tables: WorldTables,
    tags: TagSet,
}

impl WorldGen {
    /// Build with the default tables and tags.
    pub fn new() -> TableResult<Self> {
        Ok(Self {
            tables: WorldTables::new()?,
            tags: default_tags()?,
        })
    }

    /// The trait tables.
    pub fn tables(&self) -> &WorldTables {
        &self.tables
    }

    /// The tag set.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Roll a world called `name`, never giving it a tag named in `exclude`.
    pub fn roll(
        &self,
        name: String,
        culture: Culture,
        primary: bool,
        exclude: &[String],
        rng: &mut dyn RandomSource,
        registry: &Registry,
    ) -> TableResult<World> {
        let (first, second) = self.tags.select(exclude, rng)?;
        let tags = [first.roll(rng), second.roll(rng)];
        let t = &self.tables;
        let mut world = World {
            primary,
            name,
            culture,
            tags,
            atmosphere: t.atmosphere.roll(rng, registry)?,
            temperature: t.temperature.roll(rng, registry)?,
            biosphere: t.biosphere.roll(rng, registry)?,
            population: t.population.roll(rng, registry)?,
            tech_level: t.tech_level.roll(rng, registry)?,
            relations: None,
        };
        if !primary {
            world.relations = Some(Relations {
                origin: t.origin.roll(rng).to_string(),
                relationship: t.relationship.roll(rng).to_string(),
                contact: t.contact.roll(rng).to_string(),
            });
        }
        Ok(world)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use swn_tables::TableError;

    fn roll(world_gen: &WorldGen, primary: bool, exclude: &[String], seed: u64) -> World {
        let mut rng = StdRng::seed_from_u64(seed);
        world_gen
            .roll("Thera".to_string(), Culture::Greek, primary, exclude, &mut rng, &Registry::new())
            .unwrap()
    }

    #[test]
    fn primary_world_has_no_relations() {
        let world_gen = WorldGen::new().unwrap();
        let world = roll(&world_gen, true, &[], 1);
        assert!(world.relations.is_none());
        assert_eq!(world.fields().len(), 9);
        assert_eq!(world.title(), "Thera");
        assert_ne!(world.tags[0].name, world.tags[1].name);
    }

    #[test]
    fn secondary_world_has_relations() {
        let world_gen = WorldGen::new().unwrap();
        let world = roll(&world_gen, false, &[], 2);
        let relations = world.relations.clone().unwrap();
        assert!(world_gen.tables().contact.items().contains(&relations.contact));
        let labels: Vec<String> = world.fields().into_iter().map(|f| f.label).collect();
        assert_eq!(labels[9..], ["Origin", "Relationship", "Contact"]);
    }

    #[test]
    fn exclusions_are_honoured() {
        let world_gen = WorldGen::new().unwrap();
        let exclude = vec!["alien ruins".to_string(), "ZOMBIES".to_string()];
        for seed in 0..200 {
            let world = roll(&world_gen, true, &exclude, seed);
            for tag in &world.tags {
                assert_ne!(tag.name, "Alien Ruins");
                assert_ne!(tag.name, "Zombies");
            }
        }
    }

    #[test]
    fn too_many_exclusions_fail() {
        let world_gen = WorldGen::new().unwrap();
        let exclude: Vec<String> = world_gen.tags().names()[1..]
            .iter()
            .map(|n| n.to_string())
            .collect();
        let mut rng = StdRng::seed_from_u64(0);
        let err = world_gen
            .roll("X".to_string(), Culture::Latin, true, &exclude, &mut rng, &Registry::new())
            .unwrap_err();
        assert_eq!(err, TableError::DegenerateSelection { eligible: 1 });
    }

    #[test]
    fn serializes_with_tags() {
        let world_gen = WorldGen::new().unwrap();
        let world = roll(&world_gen, true, &[], 4);
        let json = serde_json::to_value(&world).unwrap();
        assert_eq!(json["name"], "Thera");
        assert_eq!(json["culture"], "Greek");
        assert_eq!(json["tags"].as_array().unwrap().len(), 2);
        assert!(json["relations"].is_null());
    }

    #[test]
    fn same_seed_same_world() {
        let world_gen = WorldGen::new().unwrap();
        assert_eq!(roll(&world_gen, false, &[], 9), roll(&world_gen, false, &[], 9));
    }
}
