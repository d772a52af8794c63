pub mod config;
pub mod error;
pub mod generate;
pub mod migrate;
pub mod model;
pub mod output;
pub mod store;

// Re-export key types for convenience
pub use error::{GameSeedError, Result};
pub use generate::{GameFactory, SeedSettings};
pub use model::{Game, NewGame};
pub use store::{GameStore, SeedReport};
