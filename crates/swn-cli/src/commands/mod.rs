pub mod culture;
pub mod name;
pub mod npc;
pub mod problem;
pub mod religion;
pub mod roll;
pub mod tag;
pub mod world;

use std::io::IsTerminal;

use swn_content::{Culture, GenConfig, Generator};
use swn_tables::Record;

use crate::format::{self, OutputMode};

/// Options shared by every command.
pub struct Output {
    seed: Option<u64>,
    mode: OutputMode,
    color: bool,
}

impl Output {
    pub fn new(seed: Option<u64>, mode: OutputMode) -> Self {
        Self {
            seed,
            mode,
            color: std::io::stdout().is_terminal(),
        }
    }

    /// Build a generator for this invocation.
    fn generator(&self, culture: Option<&str>, exclude: Vec<String>) -> Result<Generator, String> {
        let mut config = GenConfig::default().with_excluded_tags(exclude);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(name) = culture {
            let culture = name.parse::<Culture>().map_err(|e| e.to_string())?;
            config = config.with_culture(culture);
        }
        Generator::new(config).map_err(|e| e.to_string())
    }

    fn print(&self, record: &dyn Record) -> Result<(), String> {
        print!("{}", format::render(record, self.mode, self.color)?);
        Ok(())
    }

    fn print_all(&self, records: &[&dyn Record]) -> Result<(), String> {
        print!("{}", format::render_all(records, self.mode, self.color)?);
        Ok(())
    }
}
