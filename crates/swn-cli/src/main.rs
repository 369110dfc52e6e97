//! CLI frontend for the sector content generators.

mod commands;
mod format;

use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::format::OutputMode;

#[derive(Parser)]
#[command(
    name = "swnt",
    about = "Roll worlds, religions, tags, problems and NPCs for a science fiction sandbox",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible output (default: seeded from the clock)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputMode::Text)]
    format: OutputMode,

    /// Log more detail to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a religion
    Religion,

    /// Generate a world
    World {
        /// Culture for the world name (default: random)
        #[arg(short, long)]
        culture: Option<String>,

        /// Roll a secondary world, with origin, relationship and contact
        #[arg(short, long)]
        secondary: bool,

        /// Tag to leave out (repeatable, case-insensitive)
        #[arg(short, long)]
        exclude: Vec<String>,
    },

    /// Pick a random culture
    Culture,

    /// Roll the hooks of a world tag
    Tag {
        /// Tag name (case-insensitive; default: random)
        name: Option<String>,
    },

    /// List every world tag
    Tags,

    /// Generate an adventure problem
    Problem,

    /// Generate a quick NPC
    Npc {
        /// Culture for the NPC's name (default: random)
        #[arg(short, long)]
        culture: Option<String>,
    },

    /// Generate a person's name and a place name
    Name {
        /// Culture to draw names from (default: random)
        #[arg(short, long)]
        culture: Option<String>,
    },

    /// Roll a dice expression such as 3d6
    Roll {
        /// Dice expression
        expr: String,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(seed = ?cli.seed, format = ?cli.format, "starting");

    let out = commands::Output::new(cli.seed, cli.format);
    let result = match cli.command {
        Commands::Religion => commands::religion::run(&out),
        Commands::World {
            culture,
            secondary,
            exclude,
        } => commands::world::run(&out, culture.as_deref(), secondary, exclude),
        Commands::Culture => commands::culture::run(&out),
        Commands::Tag { name } => commands::tag::run(&out, name.as_deref()),
        Commands::Tags => commands::tag::list(&out),
        Commands::Problem => commands::problem::run(&out),
        Commands::Npc { culture } => commands::npc::run(&out, culture.as_deref()),
        Commands::Name { culture } => commands::name::run(&out, culture.as_deref()),
        Commands::Roll { expr } => commands::roll::run(&out, &expr),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
