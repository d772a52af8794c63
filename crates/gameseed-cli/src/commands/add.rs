use anyhow::{bail, Result};

use gameseed_core::NewGame;

use crate::args::AddArgs;
use crate::commands::{load_config, open_store};

pub async fn run(db: Option<&str>, args: &AddArgs) -> Result<()> {
    if args.price < 0 {
        bail!("--price must not be negative (got {})", args.price);
    }

    let config = load_config()?;
    let store = open_store(db, config.as_ref()).await?;
    store.ensure_schema().await?;

    let game = store
        .insert(&NewGame {
            title: args.title.clone(),
            genre: args.genre.clone(),
            platform: args.platform.clone(),
            price: args.price,
        })
        .await?;

    println!("{}", game);
    eprintln!("created_at: {}", game.created_at);

    Ok(())
}
