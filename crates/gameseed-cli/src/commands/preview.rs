use anyhow::Result;

use gameseed_core::generate::{GameFactory, SeedSettings};

use crate::args::PreviewArgs;
use crate::commands::{load_config, print_rows};

/// Games shown when --count is not given.
const PREVIEW_COUNT: usize = 5;

/// Print generated games without connecting to the database. With the same
/// --seed, the rows match the first rows `gameseed seed` would insert.
pub async fn run(args: &PreviewArgs) -> Result<()> {
    let config = load_config()?;

    let mut settings = SeedSettings::from_config(config.as_ref());
    args.generation.apply(&mut settings);
    if args.generation.count.is_none() {
        settings.count = PREVIEW_COUNT;
    }
    settings.validate()?;

    let mut factory = GameFactory::new(&settings)?;
    let games = factory.generate_games(settings.count);

    print_rows(&games, &args.format)?;
    eprintln!("(seed {})", factory.seed());

    Ok(())
}
