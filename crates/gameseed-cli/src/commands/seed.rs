use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use gameseed_core::generate::{GameFactory, SeedSettings};

use crate::args::SeedArgs;
use crate::commands::{load_config, open_store, spinner};

/// Generate games, then delete every stored game and insert the new batch.
pub async fn run(db: Option<&str>, args: &SeedArgs) -> Result<()> {
    let config = load_config()?;

    let mut settings = SeedSettings::from_config(config.as_ref());
    args.generation.apply(&mut settings);
    if let Some(batch_size) = args.batch_size {
        settings.batch_size = batch_size;
    }
    settings.validate()?;

    let store = open_store(db, config.as_ref())
        .await?
        .with_batch_size(settings.batch_size);
    store.ensure_schema().await?;

    // Phase 1: Generate
    let pb = spinner("1/2", "Generating games...")?;
    let mut factory = GameFactory::new(&settings)?;
    let games = factory.generate_games(settings.count);
    pb.finish_with_message(format!(
        "Generating games... ✓ {} games (seed {})",
        games.len(),
        factory.seed()
    ));

    // Phase 2: Replace table contents
    let pb2 = ProgressBar::new(games.len() as u64);
    pb2.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.cyan} [2/2] Reseeding games... {bar:40.cyan/dim} {pos}/{len}")?
            .progress_chars("█▓░"),
    );

    let report = store
        .reseed(
            &games,
            Some(&|current, _total| {
                pb2.set_position(current as u64);
            }),
        )
        .await?;

    pb2.finish_with_message("Reseeding games... ✓");
    eprintln!(
        "\n✓ Deleted {} and inserted {} games (replay with --seed {})",
        report.deleted,
        report.inserted,
        factory.seed()
    );

    Ok(())
}
