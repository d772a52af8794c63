use anyhow::Result;

use gameseed_core::GameSeedError;

use crate::args::RowFormat;
use crate::commands::{load_config, open_store, print_rows};

pub async fn run(db: Option<&str>, id: i64) -> Result<()> {
    let config = load_config()?;
    let store = open_store(db, config.as_ref()).await?;
    store.ensure_schema().await?;

    let game = store.find(id).await?.ok_or(GameSeedError::NotFound { id })?;
    print_rows(&[game], &RowFormat::Table)
}
