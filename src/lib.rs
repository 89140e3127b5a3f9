//! Benford engine: command line facade over the analysis core.

pub mod facade;

pub use facade::{BenfordCLI, RunOutcome, run};
