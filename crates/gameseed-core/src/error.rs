//! # Error Types
//!
//! Defines `GameSeedError`, the unified error enum for every failure mode in
//! the migrate / seed workflow. Variants carry enough context (table name,
//! row index, SQL snippet, masked connection string) to debug without
//! digging through logs.

use thiserror::Error;

/// All errors that can occur in gameseed operations.
#[derive(Error, Debug)]
pub enum GameSeedError {
    #[error("Database connection failed: {message}\n  Connection string: {connection_hint}\n  Cause: {source}")]
    Connection {
        message: String,
        connection_hint: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Unsupported database scheme '{scheme}'. Supported: sqlite://")]
    UnsupportedDatabase { scheme: String },

    #[error("Migration failed: {source}")]
    Migration {
        #[from]
        source: sqlx::migrate::MigrateError,
    },

    #[error("Table '{table}' does not exist. Run `gameseed migrate` before seeding.")]
    SchemaMissing { table: String },

    #[error("Query failed on {table}: {message}\n  DB error: {source}")]
    Query {
        table: String,
        message: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("Insert failed on {table} row {row_index}: {message}\n  SQL: {sql_preview}\n  DB error: {source}")]
    InsertFailed {
        table: String,
        row_index: usize,
        message: String,
        sql_preview: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("No game with id {id}")]
    NotFound { id: i64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameSeedError>;
