//! # Game Generation
//!
//! Builds [`NewGame`] rows from fake data. A [`GameFactory`] owns a seeded
//! `StdRng`, so two factories created from the same [`SeedSettings`] produce
//! identical batches. When no seed is supplied one is drawn at random and
//! logged, so any run can be replayed with `--seed`.

pub mod providers;

use std::borrow::Cow;
use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameSeedConfig;
use crate::error::{GameSeedError, Result};
use crate::model::NewGame;

/// Games generated per run when nothing else is configured.
pub const DEFAULT_COUNT: usize = 50;

/// Default inclusive price range.
pub const DEFAULT_PRICE_MIN: i64 = 0;
pub const DEFAULT_PRICE_MAX: i64 = 60;

/// Rows per multi-row INSERT statement.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Fully resolved settings for one seeding run.
#[derive(Debug, Clone)]
pub struct SeedSettings {
    pub count: usize,
    pub seed: Option<u64>,
    pub price_range: RangeInclusive<i64>,
    pub batch_size: usize,
    pub genres: Vec<Cow<'static, str>>,
    pub platforms: Vec<Cow<'static, str>>,
}

impl Default for SeedSettings {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            price_range: DEFAULT_PRICE_MIN..=DEFAULT_PRICE_MAX,
            batch_size: DEFAULT_BATCH_SIZE,
            genres: providers::builtin(providers::GENRES),
            platforms: providers::builtin(providers::PLATFORMS),
        }
    }
}

impl SeedSettings {
    /// Settings from the `[seed]` section, with built-in defaults for absent keys.
    pub fn from_config(config: Option<&GameSeedConfig>) -> Self {
        let mut settings = Self::default();
        let Some(cfg) = config.map(|c| &c.seed) else {
            return settings;
        };

        if let Some(count) = cfg.count {
            settings.count = count;
        }
        settings.seed = cfg.seed;
        settings.price_range = cfg.price_min.unwrap_or(DEFAULT_PRICE_MIN)
            ..=cfg.price_max.unwrap_or(DEFAULT_PRICE_MAX);
        if let Some(batch_size) = cfg.batch_size {
            settings.batch_size = batch_size;
        }
        if let Some(ref genres) = cfg.genres {
            settings.genres = genres.iter().cloned().map(Cow::Owned).collect();
        }
        if let Some(ref platforms) = cfg.platforms {
            settings.platforms = platforms.iter().cloned().map(Cow::Owned).collect();
        }
        settings
    }

    /// Check the merged settings. Flags can undo what config validation allowed,
    /// so this runs after every override is applied.
    pub fn validate(&self) -> Result<()> {
        check_price_range(&self.price_range)?;
        if self.batch_size == 0 {
            return Err(GameSeedError::Config {
                message: "batch_size must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

fn check_price_range(range: &RangeInclusive<i64>) -> Result<()> {
    let (min, max) = (*range.start(), *range.end());
    if min > max {
        return Err(GameSeedError::Config {
            message: format!("price_min ({}) is greater than price_max ({})", min, max),
        });
    }
    if min < 0 {
        return Err(GameSeedError::Config {
            message: format!("price_min must not be negative (got {})", min),
        });
    }
    Ok(())
}

/// Seeded source of fake games.
pub struct GameFactory {
    rng: StdRng,
    seed: u64,
    price_range: RangeInclusive<i64>,
    genres: Vec<Cow<'static, str>>,
    platforms: Vec<Cow<'static, str>>,
}

impl GameFactory {
    /// Fails with `Config` when the price range is empty or negative.
    pub fn new(settings: &SeedSettings) -> Result<Self> {
        check_price_range(&settings.price_range)?;

        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        tracing::info!("Generating games with seed {}", seed);

        // An empty catalogue cannot be sampled; fall back to the built-in one.
        let genres = if settings.genres.is_empty() {
            providers::builtin(providers::GENRES)
        } else {
            settings.genres.clone()
        };
        let platforms = if settings.platforms.is_empty() {
            providers::builtin(providers::PLATFORMS)
        } else {
            settings.platforms.clone()
        };

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            price_range: settings.price_range.clone(),
            genres,
            platforms,
        })
    }

    /// The seed actually in use, including one drawn at random.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Build a single fake game.
    pub fn fake_game(&mut self) -> NewGame {
        NewGame {
            title: providers::title(&mut self.rng),
            genre: providers::pick(&mut self.rng, &self.genres),
            platform: providers::pick(&mut self.rng, &self.platforms),
            price: providers::price(&mut self.rng, &self.price_range),
        }
    }

    /// Build `count` fake games.
    pub fn generate_games(&mut self, count: usize) -> Vec<NewGame> {
        (0..count).map(|_| self.fake_game()).collect()
    }
}
