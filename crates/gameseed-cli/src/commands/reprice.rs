use anyhow::{bail, Result};

use crate::commands::{load_config, open_store};

pub async fn run(db: Option<&str>, id: i64, price: i64) -> Result<()> {
    if price < 0 {
        bail!("Price must not be negative (got {})", price);
    }

    let config = load_config()?;
    let store = open_store(db, config.as_ref()).await?;
    store.ensure_schema().await?;

    let game = store.set_price(id, price).await?;
    println!("{}", game);
    if let Some(updated_at) = game.updated_at {
        eprintln!("price = {}, updated_at: {}", game.price, updated_at);
    }

    Ok(())
}
