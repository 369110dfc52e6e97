//! Procedural table-rolling engine.
//!
//! Provides dice expressions, weighted tables whose entries resolve to static
//! text or to a named action, uniform lists, a registry through which tables
//! can look up and rewrite each other at roll time, composite tables that
//! bundle several sub-rolls into one record, and world tag selection.
//!
//! Every roll takes an injectable [`RandomSource`] so tests can script the
//! exact dice results.

pub mod composite;
pub mod dice;
pub mod error;
pub mod list;
pub mod record;
pub mod registry;
pub mod rng;
pub mod rollable;
pub mod table;
pub mod tag;

pub use composite::{CompositeGroup, CompositeRoll, CompositeTable, FixedComposite, FixedRoll};
pub use dice::{Dice, Die};
pub use error::{TableError, TableResult};
pub use list::UniformList;
pub use record::{Field, Record};
pub use registry::Registry;
pub use rng::{RandomSource, Scripted};
pub use rollable::{Registered, Rollable};
pub use table::{Action, Entry, Outcome, WeightedTable};
pub use tag::{Tag, TagRoll, TagSet};
