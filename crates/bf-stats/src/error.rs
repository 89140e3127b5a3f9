use thiserror::Error;

use crate::digit::LeadingDigit;

/// Errors raised by the analysis core.
///
/// Malformed input values are not errors: they are dropped during digit
/// extraction and only show up in [`crate::DigitSequence::dropped`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// No input value yielded a leading digit.
    #[error("empty input: no value yields a leading digit 1-9")]
    EmptyInput,

    /// An expected count is zero, the chi-square term would divide by zero.
    #[error(
        "degenerate expected distribution: digit {digit} has expected count {expected} \
         (sample too small for a chi-square test)"
    )]
    DegenerateDistribution { digit: LeadingDigit, expected: u64 },

    /// No critical value is tabulated for the requested significance level.
    #[error("unsupported significance level: {0} (no critical value tabulated)")]
    UnsupportedSignificance(f64),
}

pub type StatResult<T> = Result<T, StatError>;
