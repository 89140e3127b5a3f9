//! Tabular input: read one column of a CSV file as scalar cells.

pub mod column;

pub use column::{load_column, read_column};
