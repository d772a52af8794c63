use anyhow::Result;
use comfy_table::Table as ComfyTable;

use gameseed_core::migrate::migration_status;

use crate::commands::{load_config, open_store};

pub async fn run(db: Option<&str>) -> Result<()> {
    let config = load_config()?;
    let store = open_store(db, config.as_ref()).await?;
    let migrations = migration_status(store.pool()).await?;

    let mut t = ComfyTable::new();
    t.set_header(vec!["Version", "Description", "Applied"]);
    for m in &migrations {
        t.add_row(vec![
            m.version.to_string(),
            m.description.clone(),
            (if m.applied { "yes" } else { "pending" }).to_string(),
        ]);
    }
    println!("{}", t);

    let pending = migrations.iter().filter(|m| !m.applied).count();
    if pending > 0 {
        eprintln!("\n{} pending migration(s). Run `gameseed migrate`.", pending);
    }

    Ok(())
}
