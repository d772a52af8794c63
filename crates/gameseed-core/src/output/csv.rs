use std::io::Write;

use crate::error::{GameSeedError, Result};
use crate::model::{Game, NewGame};

/// A row that can be written as one CSV line.
pub trait CsvRecord {
    fn headers() -> &'static [&'static str];
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for NewGame {
    fn headers() -> &'static [&'static str] {
        &["title", "genre", "platform", "price"]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.genre.clone(),
            self.platform.clone(),
            self.price.to_string(),
        ]
    }
}

impl CsvRecord for Game {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "title",
            "genre",
            "platform",
            "price",
            "created_at",
            "updated_at",
        ]
    }

    fn fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.genre.clone(),
            self.platform.clone(),
            self.price.to_string(),
            self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            self.updated_at
                .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
        ]
    }
}

/// Write a header line followed by one line per row.
pub fn write_csv<W: Write, T: CsvRecord>(writer: &mut W, rows: &[T]) -> Result<()> {
    let header: Vec<String> = T::headers().iter().map(|h| csv_escape(h)).collect();
    writeln!(writer, "{}", header.join(",")).map_err(|e| GameSeedError::Output {
        message: "writing CSV header".to_string(),
        source: e,
    })?;

    for (i, row) in rows.iter().enumerate() {
        let values: Vec<String> = row.fields().iter().map(|v| csv_escape(v)).collect();
        writeln!(writer, "{}", values.join(",")).map_err(|e| GameSeedError::Output {
            message: format!("writing CSV row {}", i),
            source: e,
        })?;
    }

    Ok(())
}

/// Escape a CSV field (RFC 4180).
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
