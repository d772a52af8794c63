//! Writers for game rows: pretty JSON and CSV.

pub mod csv;
pub mod json;
