//! The `games` table and its two row shapes: [`Game`] as stored, and
//! [`NewGame`] as built by the generator before the database assigns an id
//! and timestamps.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Name of the table every store operation targets.
pub const GAMES_TABLE: &str = "games";

/// A row read back from the `games` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: i64,
    /// Filled by the column default when the row is inserted.
    pub created_at: NaiveDateTime,
    /// Null until the row is first updated.
    pub updated_at: Option<NaiveDateTime>,
}

/// A game that has not been written yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub title: String,
    pub genre: String,
    pub platform: String,
    pub price: i64,
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Game(id={}, title=\"{}\", platform=\"{}\")",
            self.id, self.title, self.platform
        )
    }
}
