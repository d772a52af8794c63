use std::path::PathBuf;

use gameseed_core::generate::SeedSettings;
use gameseed_core::model::NewGame;
use gameseed_core::store::GameStore;
use tempfile::TempDir;

/// A SQLite file inside a temporary directory, removed on drop.
pub struct TempDatabase {
    _dir: TempDir,
    pub path: PathBuf,
    pub url: String,
}

/// Create an empty on-disk database location (the file itself is created on connect).
pub fn temp_database() -> TempDatabase {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("games.db");
    let url = format!("sqlite://{}", path.display());
    TempDatabase {
        _dir: dir,
        path,
        url,
    }
}

/// Connect to an in-memory database and apply all migrations.
pub async fn migrated_memory_store() -> GameStore {
    let store = GameStore::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    store.migrate().await.expect("migrations failed");
    store
}

/// Deterministic settings for tests.
pub fn fixed_settings(seed: u64, count: usize) -> SeedSettings {
    SeedSettings {
        count,
        seed: Some(seed),
        ..SeedSettings::default()
    }
}

/// Hand-written games with predictable titles ("Game 0", "Game 1", ...).
pub fn sample_games(count: usize) -> Vec<NewGame> {
    (0..count)
        .map(|i| NewGame {
            title: format!("Game {}", i),
            genre: "Puzzle".to_string(),
            platform: "PC".to_string(),
            price: (i % 61) as i64,
        })
        .collect()
}
