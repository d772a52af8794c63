use std::io::Write;

use serde::Serialize;

use crate::error::{GameSeedError, Result};

/// Write rows as a pretty-printed JSON array followed by a newline.
pub fn write_json<W: Write, T: Serialize>(writer: &mut W, rows: &[T]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, rows).map_err(|e| GameSeedError::Output {
        message: "serializing JSON".to_string(),
        source: e.into(),
    })?;
    writeln!(writer).map_err(|e| GameSeedError::Output {
        message: "writing newline".to_string(),
        source: e,
    })
}
