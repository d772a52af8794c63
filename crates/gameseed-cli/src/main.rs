use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;

use args::{Cli, Command};

#[tokio::main]
async fn main() {
    // Load .env before parsing so DATABASE_URL reaches the --db fallback
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let db = cli.db.as_deref();
    let result = match &cli.command {
        Command::Migrate => commands::migrate::run(db).await,
        Command::Status => commands::status::run(db).await,
        Command::Seed(args) => commands::seed::run(db, args).await,
        Command::Preview(args) => commands::preview::run(args).await,
        Command::Add(args) => commands::add::run(db, args).await,
        Command::List(args) => commands::list::run(db, args).await,
        Command::Show { id } => commands::show::run(db, *id).await,
        Command::Reprice { id, price } => commands::reprice::run(db, *id, *price).await,
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
