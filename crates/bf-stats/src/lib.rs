//! Benford's Law analysis core.
//!
//! Pipeline: raw column values -> [`extract`] -> [`build_observed`] /
//! [`build_expected`] -> [`ChiSquareTester`] -> [`AnalysisReport`].
//! Every stage is a pure function of its input.

pub mod chi_square;
pub mod digit;
pub mod distribution;
pub mod error;
pub mod report;
pub mod value;

pub use chi_square::{
    BENFORD_DEGREES_OF_FREEDOM, ChiSquareTester, DEFAULT_SIGNIFICANCE, GoodnessOfFitConfig,
    TestResult,
};
pub use digit::{DigitSequence, LeadingDigit, extract};
pub use distribution::{
    BENFORD_PERCENTS, BENFORD_PERMILLE, DigitCounts, DigitPercents, ObservedDistribution, build_expected,
    build_observed,
};
pub use error::{StatError, StatResult};
pub use report::{
    AnalysisReport, BenfordAnalyzer, REJECTED_EXPLANATION, VALIDATED_EXPLANATION, analyze,
};
pub use value::Scalar;
