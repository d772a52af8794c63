//! # Schema Migrations
//!
//! Versioned SQL files under `migrations/` are embedded at compile time and
//! applied with sqlx's migrator, which records each applied version in
//! `_sqlx_migrations`. Migrating is a separate step from seeding: seeding
//! never creates or alters tables.

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

use crate::error::{GameSeedError, Result};

/// Migrations embedded from `crates/gameseed-core/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Bookkeeping table maintained by sqlx.
const MIGRATIONS_TABLE: &str = "_sqlx_migrations";

/// One known migration and whether the database has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub version: i64,
    pub description: String,
    pub applied: bool,
}

/// Apply every pending migration. Already-applied versions are skipped,
/// so running this repeatedly is safe.
pub async fn run_migrations(pool: &SqlitePool) -> Result<usize> {
    let before = applied_versions(pool).await?;
    MIGRATOR.run(pool).await?;

    let newly_applied = MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .filter(|m| !before.contains(&m.version))
        .count();
    tracing::info!("Applied {} pending migration(s)", newly_applied);
    Ok(newly_applied)
}

/// List every embedded migration with its applied flag.
pub async fn migration_status(pool: &SqlitePool) -> Result<Vec<MigrationState>> {
    let applied = applied_versions(pool).await?;
    Ok(MIGRATOR
        .iter()
        .filter(|m| !m.migration_type.is_down_migration())
        .map(|m| MigrationState {
            version: m.version,
            description: m.description.to_string(),
            applied: applied.contains(&m.version),
        })
        .collect())
}

/// Versions recorded as successfully applied. Empty before the first migration.
async fn applied_versions(pool: &SqlitePool) -> Result<Vec<i64>> {
    if !table_exists(pool, MIGRATIONS_TABLE).await? {
        return Ok(Vec::new());
    }

    let query = format!(
        "SELECT version FROM {} WHERE success = 1 ORDER BY version",
        MIGRATIONS_TABLE
    );
    sqlx::query_scalar::<_, i64>(&query)
        .fetch_all(pool)
        .await
        .map_err(|e| GameSeedError::Query {
            table: MIGRATIONS_TABLE.to_string(),
            message: "Failed to read applied migrations".to_string(),
            source: e,
        })
}

/// Whether a table of this name exists in the main schema.
pub(crate) async fn table_exists(pool: &SqlitePool, name: &str) -> Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|e| GameSeedError::Query {
        table: "sqlite_master".to_string(),
        message: format!("Failed to look up table '{}'", name),
        source: e,
    })?;
    Ok(count > 0)
}
