//! World tags.
//!
//! A tag is a named theme for a world with a description and five lists of
//! story hooks. Worlds get two distinct tags, optionally excluding some by
//! name.

use serde::Serialize;

use crate::error::{TableError, TableResult};
use crate::list::UniformList;
use crate::record::{Field, Record};
use crate::rng::RandomSource;

const MAX_REDRAWS: u32 = 64;

/// A world tag and its hook lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name, unique within a [`TagSet`] ignoring case.
    pub name: String,
    /// What the tag means for the world.
    pub desc: String,
    /// Possible enemies.
    pub enemies: UniformList,
    /// Possible friends.
    pub friends: UniformList,
    /// Possible complications.
    pub complications: UniformList,
    /// Notable things.
    pub things: UniformList,
    /// Notable places.
    pub places: UniformList,
}

impl Tag {
    /// Whether this tag's name matches any of `names`, ignoring case.
    pub fn matches_any(&self, names: &[String]) -> bool {
        names.iter().any(|n| n.eq_ignore_ascii_case(&self.name))
    }

    /// Pick one hook from each list.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> TagRoll {
        TagRoll {
            name: self.name.clone(),
            desc: self.desc.clone(),
            enemy: self.enemies.roll(rng).to_string(),
            friend: self.friends.roll(rng).to_string(),
            complication: self.complications.roll(rng).to_string(),
            thing: self.things.roll(rng).to_string(),
            place: self.places.roll(rng).to_string(),
        }
    }
}

/// A tag with one hook picked from each of its lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagRoll {
    /// Tag name.
    pub name: String,
    /// Tag description.
    pub desc: String,
    /// Picked enemy.
    pub enemy: String,
    /// Picked friend.
    pub friend: String,
    /// Picked complication.
    pub complication: String,
    /// Picked thing.
    pub thing: String,
    /// Picked place.
    pub place: String,
}

impl Record for TagRoll {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("Name", &self.name),
            Field::new("Desc", &self.desc),
            Field::new("Enemies", &self.enemy),
            Field::new("Friends", &self.friend),
            Field::new("Complications", &self.complication),
            Field::new("Things", &self.thing),
            Field::new("Places", &self.place),
        ]
    }
}

/// The full set of tags available for world generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<Tag>,
}

impl TagSet {
    /// Build a tag set. Fails if two tags share a name, ignoring case.
    pub fn new(tags: Vec<Tag>) -> TableResult<Self> {
        for (i, tag) in tags.iter().enumerate() {
            if tags[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&tag.name))
            {
                return Err(TableError::invalid(format!(
                    "duplicate tag name \"{}\"",
                    tag.name
                )));
            }
        }
        Ok(Self { tags })
    }

    /// All tags in order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if there are no tags.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Names of all tags in order.
    pub fn names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Find a tag by name, ignoring case.
    pub fn find(&self, name: &str) -> TableResult<&Tag> {
        self.tags
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| TableError::NotFound(format!("no tag with name \"{name}\"")))
    }

    /// Pick one tag and roll its hooks.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> TableResult<TagRoll> {
        Ok(self.pick(rng)?.roll(rng))
    }

    /// Name of a random tag.
    pub fn random_name(&self, rng: &mut dyn RandomSource) -> TableResult<&str> {
        Ok(self.pick(rng)?.name.as_str())
    }

    /// Pick two distinct tags, skipping any named in `exclude` (ignoring case).
    pub fn select(
        &self,
        exclude: &[String],
        rng: &mut dyn RandomSource,
    ) -> TableResult<(&Tag, &Tag)> {
        let eligible: Vec<&Tag> = self
            .tags
            .iter()
            .filter(|t| !t.matches_any(exclude))
            .collect();
        if eligible.len() < 2 {
            return Err(TableError::DegenerateSelection {
                eligible: eligible.len(),
            });
        }

        let first = rng.pick(eligible.len());
        let mut second = rng.pick(eligible.len());
        let mut redraws = 0;
        while second == first {
            redraws += 1;
            // A source stuck on one value (e.g. an exhausted script) must
            // still terminate.
            second = if redraws < MAX_REDRAWS {
                rng.pick(eligible.len())
            } else {
                (first + 1) % eligible.len()
            };
        }
        Ok((eligible[first], eligible[second]))
    }

    fn pick(&self, rng: &mut dyn RandomSource) -> TableResult<&Tag> {
        if self.tags.is_empty() {
            return Err(TableError::NotFound("no tags defined".to_string()));
        }
        Ok(&self.tags[rng.pick(self.tags.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Scripted;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn tag(name: &str) -> Tag {
        let list = |kind: &str| UniformList::new(kind, [format!("{name} {kind}")]).unwrap();
        Tag {
            name: name.to_string(),
            desc: format!("{name} world"),
            enemies: list("enemy"),
            friends: list("friend"),
            complications: list("complication"),
            things: list("thing"),
            places: list("place"),
        }
    }

    fn set() -> TagSet {
        TagSet::new(
            ["Alien Ruins", "Alien", "Enemy", "Civil War", "Desert World", "Hivemind"]
                .into_iter()
                .map(tag)
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn duplicate_names_rejected() {
        let err = TagSet::new(vec![tag("Oceanic"), tag("OCEANIC")]).unwrap_err();
        assert!(err.to_string().contains("duplicate tag name"));
    }

    #[test]
    fn find_ignores_case() {
        let tags = set();
        assert_eq!(tags.find("civil war").unwrap().name, "Civil War");
        assert_eq!(
            tags.find("Atlantis").unwrap_err(),
            TableError::NotFound("no tag with name \"Atlantis\"".to_string())
        );
    }

    #[test]
    fn select_returns_distinct_tags() {
        let tags = set();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let (a, b) = tags.select(&[], &mut rng).unwrap();
            assert_ne!(a.name, b.name);
        }
    }

    #[test]
    fn select_honours_exclusions() {
        let tags = set();
        let exclude = vec!["alien".to_string(), "ENEMY".to_string()];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let (a, b) = tags.select(&exclude, &mut rng).unwrap();
            for t in [a, b] {
                assert!(!t.name.eq_ignore_ascii_case("Alien"));
                assert!(!t.name.eq_ignore_ascii_case("Enemy"));
            }
        }
    }

    #[test]
    fn select_retries_on_collision() {
        let tags = set();
        let mut rng = Scripted::new([3, 3, 3, 1]);
        let (a, b) = tags.select(&[], &mut rng).unwrap();
        assert_eq!(a.name, "Civil War");
        assert_eq!(b.name, "Alien");
    }

    #[test]
    fn select_terminates_with_stuck_source() {
        let tags = set();
        let mut rng = Scripted::new(Vec::new());
        let (a, b) = tags.select(&[], &mut rng).unwrap();
        assert_ne!(a.name, b.name);
    }

    #[test]
    fn select_needs_two_eligible() {
        let tags = TagSet::new(vec![tag("Alien"), tag("Oceanic")]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            tags.select(&["oceanic".to_string()], &mut rng).unwrap_err(),
            TableError::DegenerateSelection { eligible: 1 }
        );
        assert!(tags.select(&[], &mut rng).is_ok());
    }

    #[test]
    fn roll_fills_every_hook() {
        let tags = set();
        let mut rng = Scripted::new([4]);
        let rolled = tags.roll(&mut rng).unwrap();
        assert_eq!(rolled.name, "Desert World");
        assert_eq!(rolled.enemy, "Desert World enemy");
        assert_eq!(rolled.place, "Desert World place");
        assert_eq!(rolled.fields().len(), 7);
        assert_eq!(rolled.fields()[1], Field::new("Desc", "Desert World world"));
    }

    #[test]
    fn empty_set_has_nothing_to_pick() {
        let tags = TagSet::default();
        let mut rng = Scripted::new([0]);
        assert!(tags.random_name(&mut rng).is_err());
    }
}
