//! Configuration for a generator.

use crate::culture::Culture;

/// Configuration for a [`Generator`](crate::Generator).
#[derive(Debug, Clone, Default)]
pub struct GenConfig {
    /// RNG seed for reproducible output. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Culture for worlds and names. `None` picks one at random each time.
    pub culture: Option<Culture>,
    /// Tag names worlds must never receive.
    pub excluded_tags: Vec<String>,
}

impl GenConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Fix the culture.
    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = Some(culture);
        self
    }

    /// Exclude tags by name (case is ignored when matching).
    pub fn with_excluded_tags<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_tags.extend(names.into_iter().map(Into::into));
        self
    }
}
