pub mod add;
pub mod list;
pub mod migrate;
pub mod preview;
pub mod reprice;
pub mod seed;
pub mod show;
pub mod status;

use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table as ComfyTable;
use indicatif::{ProgressBar, ProgressStyle};

use gameseed_core::config::{read_config, GameSeedConfig};
use gameseed_core::output::csv::{write_csv, CsvRecord};
use gameseed_core::output::json::write_json;
use gameseed_core::store::GameStore;
use gameseed_core::{Game, NewGame};

use crate::args::RowFormat;

/// Used when no URL is given anywhere.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://seed_db.db";

/// Load the optional gameseed.toml from the working directory.
pub fn load_config() -> Result<Option<GameSeedConfig>> {
    Ok(read_config(Path::new("."))?)
}

/// Resolve the database URL from the flag (or DATABASE_URL, which clap
/// folds into it), then gameseed.toml, then the default file.
pub fn resolve_db_url(explicit: Option<&str>, config: Option<&GameSeedConfig>) -> String {
    if let Some(url) = explicit {
        return url.to_string();
    }

    if let Some(url) = config.and_then(|c| c.database.url.as_deref()) {
        return url.to_string();
    }

    tracing::debug!("No database URL configured, using {}", DEFAULT_DATABASE_URL);
    DEFAULT_DATABASE_URL.to_string()
}

/// Connect to the resolved database.
pub async fn open_store(explicit: Option<&str>, config: Option<&GameSeedConfig>) -> Result<GameStore> {
    let db_url = resolve_db_url(explicit, config);
    let store = GameStore::connect(&db_url)
        .await
        .with_context(|| format!("Failed to open {}", gameseed_core::store::sanitize_url(&db_url)))?;
    Ok(store)
}

/// A steady-ticking spinner for one numbered phase.
pub fn spinner(prefix: &str, message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} [{prefix}] {msg}")?);
    pb.set_prefix(prefix.to_string());
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Ok(pb)
}

/// Something that can be shown as one table row.
pub trait TableRow: CsvRecord + serde::Serialize {}

impl TableRow for Game {}
impl TableRow for NewGame {}

/// Print rows to stdout in the requested format.
pub fn print_rows<T: TableRow>(rows: &[T], format: &RowFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    match format {
        RowFormat::Table => {
            writeln!(writer, "{}", render_table(rows))?;
        }
        RowFormat::Json => write_json(&mut writer, rows)?,
        RowFormat::Csv => write_csv(&mut writer, rows)?,
    }

    writer.flush()?;
    Ok(())
}

/// Render rows as a terminal table, truncating long cells.
pub fn render_table<T: CsvRecord>(rows: &[T]) -> ComfyTable {
    let mut t = ComfyTable::new();
    t.set_header(T::headers().to_vec());

    for row in rows {
        let values: Vec<String> = row
            .fields()
            .into_iter()
            .map(|s| {
                if s.chars().count() > 40 {
                    format!("{}...", s.chars().take(37).collect::<String>())
                } else {
                    s
                }
            })
            .collect();
        t.add_row(values);
    }

    t
}
