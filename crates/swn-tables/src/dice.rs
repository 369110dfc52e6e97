//! Dice and dice expressions.
//!
//! Supports the standard polyhedral dice (d4 through d100) and custom dice
//! such as the d5 some tables collapse to. A [`Dice`] expression is "N dice of
//! size D" and rolls to their sum.

use std::str::FromStr;

use serde::Serialize;

use crate::error::{TableError, TableResult};
use crate::rng::RandomSource;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the die for a given number of sides.
    pub fn with_sides(sides: u32) -> TableResult<Self> {
        match sides {
            4 => Ok(Self::D4),
            6 => Ok(Self::D6),
            8 => Ok(Self::D8),
            10 => Ok(Self::D10),
            12 => Ok(Self::D12),
            20 => Ok(Self::D20),
            100 => Ok(Self::D100),
            n if n >= 2 => Ok(Self::Custom(n)),
            n => Err(TableError::invalid(format!(
                "a die needs at least 2 sides, got {n}"
            ))),
        }
    }

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Roll this die once.
    pub fn roll(self, rng: &mut dyn RandomSource) -> u32 {
        rng.roll_die(self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Most dice a single expression may roll.
pub const MAX_DICE: u32 = 1000;

/// A dice expression: `count` dice of one size, summed.
///
/// Immutable once built; the constructor rejects expressions that could not
/// produce a meaningful range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Dice {
    count: u32,
    die: Die,
}

impl Dice {
    /// Build `count` dice of type `die`.
    pub fn new(count: u32, die: Die) -> TableResult<Self> {
        if count == 0 {
            return Err(TableError::invalid("a dice expression needs at least 1 die"));
        }
        if die.sides() < 2 {
            return Err(TableError::invalid(format!(
                "a die needs at least 2 sides, got {}",
                die.sides()
            )));
        }
        if count > MAX_DICE || count.checked_mul(die.sides()).is_none() {
            return Err(TableError::invalid(format!(
                "{count}{die} is too many dice (at most {MAX_DICE}, with a sum that fits in u32)"
            )));
        }
        Ok(Self { count, die })
    }

    /// Shorthand for `1dN`.
    pub fn one(die: Die) -> TableResult<Self> {
        Self::new(1, die)
    }

    /// Number of dice rolled.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// The die type.
    pub fn die(&self) -> Die {
        self.die
    }

    /// Lowest possible sum.
    pub fn min(&self) -> u32 {
        self.count
    }

    /// Highest possible sum.
    pub fn max(&self) -> u32 {
        self.count * self.die.sides()
    }

    /// Every sum this expression can produce.
    pub fn domain(&self) -> std::ops::RangeInclusive<u32> {
        self.min()..=self.max()
    }

    /// Roll every die and return the sum.
    pub fn roll(&self, rng: &mut dyn RandomSource) -> u32 {
        (0..self.count).map(|_| self.die.roll(rng)).sum()
    }
}

impl std::fmt::Display for Dice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)
    }
}

impl FromStr for Dice {
    type Err = TableError;

    /// Parse `"2d6"`, `"d20"` or `"1D5"`.
    fn from_str(s: &str) -> TableResult<Self> {
        let lower = s.trim().to_lowercase();
        let (count, sides) = lower
            .split_once('d')
            .ok_or_else(|| TableError::invalid(format!("not a dice expression: \"{s}\"")))?;

        let count = if count.is_empty() {
            1
        } else {
            count
                .parse::<u32>()
                .map_err(|_| TableError::invalid(format!("bad dice count in \"{s}\"")))?
        };
        let sides = sides
            .parse::<u32>()
            .map_err(|_| TableError::invalid(format!("bad die size in \"{s}\"")))?;

        Self::new(count, Die::with_sides(sides)?)
    }
}
