//! # Configuration File Parser
//!
//! Reads and parses `gameseed.toml`, the optional configuration file that
//! sets defaults for the CLI without repeating flags. Supports:
//!
//! - `[database]` — default connection URL
//! - `[seed]` — row count, fixed RNG seed, price range, insert batch size and
//!   optional replacement catalogues for genres and platforms
//!
//! Example `gameseed.toml`:
//!
//! ```toml
//! [database]
//! url = "sqlite://seed_db.db"
//!
//! [seed]
//! count = 50
//! seed = 42
//! price_min = 0
//! price_max = 60
//! batch_size = 100
//! platforms = ["PC", "Switch"]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{GameSeedError, Result};
use crate::generate::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = "gameseed.toml";

/// Top-level gameseed.toml structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameSeedConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Seeding defaults.
    pub seed: SeedConfig,

    /// Sections gameseed does not recognise.
    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Database connection configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://seed_db.db").
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Seeding defaults. Every field falls back to the built-in default when absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of games to generate.
    pub count: Option<usize>,
    /// Fixed random seed for deterministic generation.
    pub seed: Option<u64>,
    /// Lowest price, inclusive.
    pub price_min: Option<i64>,
    /// Highest price, inclusive.
    pub price_max: Option<i64>,
    /// Rows per multi-row INSERT statement.
    pub batch_size: Option<usize>,
    /// Replaces the built-in genre catalogue.
    pub genres: Option<Vec<String>>,
    /// Replaces the built-in platform catalogue.
    pub platforms: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: toml::Table,
}

/// Read and parse a gameseed.toml file from the given directory.
///
/// Returns `None` if the file doesn't exist (config is optional).
/// Returns an error if the file exists but can't be parsed or fails validation.
pub fn read_config(dir: &Path) -> Result<Option<GameSeedConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| GameSeedError::Config {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let config: GameSeedConfig = toml::from_str(&content).map_err(|e| GameSeedError::Config {
        message: format!("Failed to parse {}: {}", path.display(), e),
    })?;

    config.validate()?;

    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(Some(config))
}

impl GameSeedConfig {
    /// Validate semantic constraints that serde cannot enforce.
    pub fn validate(&self) -> Result<()> {
        let seed = &self.seed;

        for key in self.ignored_keys() {
            tracing::warn!("Ignoring unknown key '{}' in {}", key, CONFIG_FILE_NAME);
        }

        // A lone bound is checked against the built-in default for the other.
        let min = seed.price_min.unwrap_or(DEFAULT_PRICE_MIN);
        let max = seed.price_max.unwrap_or(DEFAULT_PRICE_MAX);
        if min > max {
            return Err(GameSeedError::Config {
                message: format!(
                    "seed.price_min ({}) is greater than seed.price_max ({}{})",
                    min,
                    max,
                    if seed.price_max.is_none() { ", the default" } else { "" }
                ),
            });
        }
        for (key, value) in [("price_min", seed.price_min), ("price_max", seed.price_max)] {
            if let Some(v) = value {
                if v < 0 {
                    return Err(GameSeedError::Config {
                        message: format!("seed.{} must not be negative (got {})", key, v),
                    });
                }
            }
        }

        if seed.batch_size == Some(0) {
            return Err(GameSeedError::Config {
                message: "seed.batch_size must be at least 1".to_string(),
            });
        }

        for (key, list) in [("genres", &seed.genres), ("platforms", &seed.platforms)] {
            if let Some(values) = list {
                if values.is_empty() {
                    return Err(GameSeedError::Config {
                        message: format!(
                            "seed.{} is empty. Add at least one entry or remove the key \
                             to use the built-in list.",
                            key
                        ),
                    });
                }
            }
        }

        if seed.count == Some(0) {
            tracing::warn!("seed.count = 0: seeding will empty the games table");
        }

        Ok(())
    }

    /// Dotted paths of keys that were parsed but have no meaning, such as typos.
    pub fn ignored_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.extra.keys().cloned().collect();
        keys.extend(self.database.extra.keys().map(|k| format!("database.{}", k)));
        keys.extend(self.seed.extra.keys().map(|k| format!("seed.{}", k)));
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[database]
url = "sqlite://games.db"

[seed]
count = 75
seed = 42
price_min = 5
price_max = 70
batch_size = 25
genres = ["Puzzle", "Racing"]
platforms = ["PC"]
"#;

        let config: GameSeedConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.database.url.as_deref(), Some("sqlite://games.db"));
        assert_eq!(config.seed.count, Some(75));
        assert_eq!(config.seed.seed, Some(42));
        assert_eq!(config.seed.price_min, Some(5));
        assert_eq!(config.seed.price_max, Some(70));
        assert_eq!(config.seed.batch_size, Some(25));
        assert_eq!(
            config.seed.genres.as_deref(),
            Some(&["Puzzle".to_string(), "Racing".to_string()][..])
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: GameSeedConfig = toml::from_str("").unwrap();

        assert!(config.database.url.is_none());
        assert!(config.seed.count.is_none());
        assert!(config.seed.genres.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_read_config_nonexistent() {
        let result = read_config(Path::new("/nonexistent/dir"));
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_read_config_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"
[database]
url = "sqlite://from_disk.db"

[seed]
count = 10
"#,
        )
        .unwrap();

        let config = read_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.database.url.as_deref(), Some("sqlite://from_disk.db"));
        assert_eq!(config.seed.count, Some(10));
        assert!(config.ignored_keys().is_empty());
    }

    #[test]
    fn test_read_config_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "this is not valid [[[toml").unwrap();

        let result = read_config(dir.path());
        assert!(matches!(result, Err(GameSeedError::Config { .. })));
    }

    #[test]
    fn test_validate_inverted_price_range_fails() {
        let toml = r#"
[seed]
price_min = 80
price_max = 10
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("80"), "Error should mention price_min: {}", msg);
        assert!(msg.contains("10"), "Error should mention price_max: {}", msg);
    }

    #[test]
    fn test_validate_negative_price_fails() {
        let toml = r#"
[seed]
price_min = -1
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_batch_size_fails() {
        let toml = r#"
[seed]
batch_size = 0
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_catalogue_fails() {
        let toml = r#"
[seed]
platforms = []
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("platforms"), "Error should name the key: {}", msg);
    }

    #[test]
    fn test_validate_zero_count_ok() {
        let toml = r#"
[seed]
count = 0
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_misspelled_keys_are_reported() {
        let toml = r#"
[seed]
price_mx = 10

[databse]
url = "sqlite://typo.db"
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();

        assert!(config.seed.price_max.is_none());
        assert_eq!(config.ignored_keys(), vec!["databse", "seed.price_mx"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_lone_price_min_above_default_max_fails() {
        let toml = r#"
[seed]
price_min = 70
"#;
        let config: GameSeedConfig = toml::from_str(toml).unwrap();
        let msg = config.validate().unwrap_err().to_string();
        assert!(msg.contains("70"), "Error should mention price_min: {}", msg);
        assert!(msg.contains("60"), "Error should mention the default max: {}", msg);
    }

    #[test]
    fn test_read_config_rejects_lone_bound_on_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "[seed]\nprice_max = -5\n").unwrap();

        assert!(matches!(
            read_config(dir.path()),
            Err(GameSeedError::Config { .. })
        ));
    }
}
