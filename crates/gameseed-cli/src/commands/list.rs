use anyhow::Result;

use crate::args::{ListArgs, RowFormat};
use crate::commands::{load_config, open_store, print_rows};

pub async fn run(db: Option<&str>, args: &ListArgs) -> Result<()> {
    let config = load_config()?;
    let store = open_store(db, config.as_ref()).await?;
    store.ensure_schema().await?;

    let games = store.list(args.limit).await?;
    if games.is_empty() && matches!(args.format, RowFormat::Table) {
        eprintln!("No games stored. Run `gameseed seed` to add some.");
        return Ok(());
    }

    print_rows(&games, &args.format)?;

    if matches!(args.format, RowFormat::Table) {
        let total = store.count().await?;
        eprintln!("{} of {} games", games.len(), total);
    }

    Ok(())
}
