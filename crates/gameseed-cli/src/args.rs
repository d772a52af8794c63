use clap::{Parser, Subcommand, ValueEnum};

use gameseed_core::generate::SeedSettings;

#[derive(Parser, Debug)]
#[command(
    name = "gameseed",
    about = "Migrate and seed a SQLite games database with fake data",
    version,
    after_help = "Examples:\n  gameseed migrate --db sqlite://seed_db.db\n  gameseed seed --count 50 --seed 42\n  gameseed preview --count 5 --format json\n  gameseed add --title \"Hollow Orbit\" --genre Roguelike --platform PC --price 20\n  gameseed list --limit 10\n  gameseed reprice 3 45"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Database connection URL (sqlite://)
    /// Falls back to DATABASE_URL env var, .env file, gameseed.toml, then sqlite://seed_db.db
    #[arg(long, env = "DATABASE_URL", global = true)]
    pub db: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending schema migrations
    Migrate,

    /// Show which migrations have been applied
    Status,

    /// Delete all games and insert freshly generated ones
    Seed(SeedArgs),

    /// Print generated games without touching the database
    Preview(PreviewArgs),

    /// Insert a single game and print it with its assigned id
    Add(AddArgs),

    /// List stored games
    List(ListArgs),

    /// Show one game by id
    Show {
        /// Game id
        id: i64,
    },

    /// Change the price of a stored game
    Reprice {
        /// Game id
        id: i64,
        /// New price
        price: i64,
    },
}

#[derive(Parser, Debug, Default)]
pub struct GenerationArgs {
    /// Number of games to generate
    #[arg(long)]
    pub count: Option<usize>,

    /// Random seed for deterministic generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Lowest price, inclusive
    #[arg(long)]
    pub price_min: Option<i64>,

    /// Highest price, inclusive
    #[arg(long)]
    pub price_max: Option<i64>,
}

#[derive(Parser, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Rows per multi-row INSERT statement
    #[arg(long)]
    pub batch_size: Option<usize>,
}

#[derive(Parser, Debug)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub generation: GenerationArgs,

    /// Output format
    #[arg(long, default_value = "table")]
    pub format: RowFormat,
}

#[derive(Parser, Debug)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub genre: String,

    #[arg(long)]
    pub platform: String,

    #[arg(long)]
    pub price: i64,
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Maximum number of games to show
    #[arg(long)]
    pub limit: Option<u32>,

    /// Output format
    #[arg(long, default_value = "table")]
    pub format: RowFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum RowFormat {
    Table,
    Json,
    Csv,
}

impl GenerationArgs {
    /// Layer CLI flags over settings resolved from gameseed.toml.
    pub fn apply(&self, settings: &mut SeedSettings) {
        if let Some(count) = self.count {
            settings.count = count;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        let min = self.price_min.unwrap_or(*settings.price_range.start());
        let max = self.price_max.unwrap_or(*settings.price_range.end());
        settings.price_range = min..=max;
    }
}
