use anyhow::{Context, Result};

use crate::commands::{load_config, open_store, spinner};

pub async fn run(db: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let store = open_store(db, config.as_ref()).await?;

    let pb = spinner("1/1", "Applying migrations...")?;
    let applied = store.migrate().await.context("Failed to apply migrations")?;

    if applied == 0 {
        pb.finish_with_message("Applying migrations... ✓ schema already up to date");
    } else {
        pb.finish_with_message(format!(
            "Applying migrations... ✓ {} migration(s) applied",
            applied
        ));
    }

    Ok(())
}
