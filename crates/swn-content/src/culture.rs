//! Cultures that flavour names and worlds.

use std::str::FromStr;

use serde::Serialize;
use swn_tables::{Field, RandomSource, Record};

use crate::error::ContentError;

/// A human culture from the default name tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Culture {
    /// Arabic.
    Arabic,
    /// Chinese.
    Chinese,
    /// English.
    English,
    /// Greek.
    Greek,
    /// Indian.
    Indian,
    /// Japanese.
    Japanese,
    /// Latin.
    Latin,
    /// Nigerian.
    Nigerian,
    /// Russian.
    Russian,
    /// Spanish.
    Spanish,
}

impl Culture {
    /// Every culture, in table order.
    pub const ALL: [Culture; 10] = [
        Self::Arabic,
        Self::Chinese,
        Self::English,
        Self::Greek,
        Self::Indian,
        Self::Japanese,
        Self::Latin,
        Self::Nigerian,
        Self::Russian,
        Self::Spanish,
    ];

    /// Pick a culture uniformly.
    pub fn random(rng: &mut dyn RandomSource) -> Self {
        Self::ALL[rng.pick(Self::ALL.len())]
    }

    /// Position of this culture in [`Culture::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Culture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arabic => write!(f, "Arabic"),
            Self::Chinese => write!(f, "Chinese"),
            Self::English => write!(f, "English"),
            Self::Greek => write!(f, "Greek"),
            Self::Indian => write!(f, "Indian"),
            Self::Japanese => write!(f, "Japanese"),
            Self::Latin => write!(f, "Latin"),
            Self::Nigerian => write!(f, "Nigerian"),
            Self::Russian => write!(f, "Russian"),
            Self::Spanish => write!(f, "Spanish"),
        }
    }
}

impl FromStr for Culture {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ContentError::UnknownCulture(s.to_string()))
    }
}

impl Record for Culture {
    fn title(&self) -> String {
        "Culture".to_string()
    }

    fn fields(&self) -> Vec<Field> {
        vec![Field::new("Culture", self.to_string())]
    }
}
