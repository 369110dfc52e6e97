//! Sector content generators.
//!
//! Builds religions, worlds, world tags, cultures, names, problems and quick
//! NPCs out of the `swn-tables` engine. A [`Generator`] owns the tables, the
//! registry they roll through and the random source.

pub mod config;
pub mod culture;
pub mod error;
pub mod generator;
pub mod name;
pub mod npc;
pub mod problem;
pub mod religion;
pub mod world;

pub use config::GenConfig;
pub use culture::Culture;
pub use error::{ContentError, ContentResult};
pub use generator::{DiceRoll, Generator};
pub use name::NameRoll;
pub use npc::Npc;
pub use religion::Religion;
pub use world::World;
