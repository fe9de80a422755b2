//! CLI frontend for the Ficha adventure sheet.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ficha_core::{ArrowType, Stat};

#[derive(Parser)]
#[command(
    name = "ficha",
    about = "Adventure sheet for the samurai gamebook",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the saved sheet and roster
    #[arg(
        short,
        long,
        global = true,
        env = "FICHA_DATA_DIR",
        default_value = ".ficha"
    )]
    data_dir: PathBuf,

    /// RNG seed for reproducible dice
    #[arg(long, global = true, env = "FICHA_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the adventure sheet and the encounter roster
    Show,

    /// Show or change a stat (skill, skill-initial, stamina, ...)
    Stat {
        /// Stat name
        stat: Stat,

        /// New value; text that is not a number sets 0
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Add to the current value instead
        #[arg(long, allow_negative_numbers = true, conflicts_with = "value")]
        add: Option<i32>,
    },

    /// Show or change honor
    Honor {
        /// New value; text that is not a number sets 0
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Add to the current value instead
        #[arg(long, allow_negative_numbers = true, conflicts_with = "value")]
        add: Option<i32>,
    },

    /// Eat or gain provisions (never below zero)
    Supplies {
        /// Amount to add; negative to eat
        #[arg(allow_negative_numbers = true)]
        delta: Option<i32>,
    },

    /// Show or change arrow counts (never below zero)
    Ammo {
        /// Arrow type: willow-leaf, bowel-raker, armour-piercer, humming-bulb
        arrow: Option<ArrowType>,

        /// New count; text that is not a number sets 0
        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// Add to the current count instead
        #[arg(long, allow_negative_numbers = true, conflicts_with = "value")]
        add: Option<i32>,
    },

    /// Set the character's skill name
    Skill {
        /// Skill name (e.g. Iaijutsu)
        text: String,
    },

    /// Show, replace or append to the notes
    Notes {
        /// New notes text
        text: Option<String>,

        /// Append as a new line instead of replacing
        #[arg(short, long)]
        append: bool,
    },

    /// Show or edit a slot of the encounter roster
    Monster {
        /// Slot index (0-11) or id (monster-N)
        slot: String,

        /// Opponent name
        #[arg(short, long)]
        name: Option<String>,

        /// Opponent skill; text that is not a number sets 0
        #[arg(short, long, allow_hyphen_values = true)]
        skill: Option<String>,

        /// Opponent stamina; text that is not a number sets 0
        #[arg(long, allow_hyphen_values = true)]
        stamina: Option<String>,
    },

    /// Roll six-sided dice
    Roll {
        /// Number of dice
        #[arg(default_value = "1")]
        count: usize,
    },

    /// Wipe the sheet and roster back to their defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Start an interactive session
    Play,
}

/// Structured logs go to stderr; `RUST_LOG` overrides the default level.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    let mut session = commands::open_session(&cli.data_dir, cli.seed);

    let result = match cli.command {
        Commands::Show => commands::show::run(&session),
        Commands::Stat { stat, value, add } => {
            commands::edit::stat(&mut session, stat, value.as_deref(), add)
        }
        Commands::Honor { value, add } => commands::edit::honor(&mut session, value.as_deref(), add),
        Commands::Supplies { delta } => commands::edit::supplies(&mut session, delta),
        Commands::Ammo { arrow, value, add } => {
            commands::edit::ammo(&mut session, arrow, value.as_deref(), add)
        }
        Commands::Skill { text } => commands::edit::skill_name(&mut session, &text),
        Commands::Notes { text, append } => {
            commands::edit::notes(&mut session, text.as_deref(), append)
        }
        Commands::Monster {
            slot,
            name,
            skill,
            stamina,
        } => commands::monster::run(
            &mut session,
            &slot,
            name,
            skill.as_deref(),
            stamina.as_deref(),
        ),
        Commands::Roll { count } => commands::roll::run(&mut session, count),
        Commands::Reset { yes } => commands::reset::run(&mut session, yes),
        Commands::Play => commands::play::run(&mut session),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
