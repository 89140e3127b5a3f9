//! Pearson's chi-square goodness-of-fit test of observed against expected
//! digit counts.

use derive_getters::Getters;
use serde::Serialize;

use crate::distribution::DigitCounts;
use crate::error::{StatError, StatResult};

pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Nine digit categories, one constraint (the sample size).
pub const BENFORD_DEGREES_OF_FREEDOM: u32 = 8;

/// (significance level, critical value) at 8 degrees of freedom.
const CRITICAL_VALUES_DF8: &[(f64, f64)] = &[(0.05, 15.51)];

/// Significance level and the matching critical value the tester compares
/// the statistic against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Getters)]
pub struct GoodnessOfFitConfig {
    significance: f64,
    degrees_of_freedom: u32,
    critical_value: f64,
}

impl GoodnessOfFitConfig {
    /// Look up the critical value tabulated for `significance`.
    pub fn at_significance(significance: f64) -> StatResult<Self> {
        CRITICAL_VALUES_DF8
            .iter()
            .find(|(level, _)| (level - significance).abs() < 1e-9)
            .map(|&(level, critical_value)| Self {
                significance: level,
                degrees_of_freedom: BENFORD_DEGREES_OF_FREEDOM,
                critical_value,
            })
            .ok_or(StatError::UnsupportedSignificance(significance))
    }

    /// Significance levels with a tabulated critical value.
    pub fn supported_levels() -> impl Iterator<Item = f64> {
        CRITICAL_VALUES_DF8.iter().map(|(level, _)| *level)
    }
}

impl Default for GoodnessOfFitConfig {
    fn default() -> Self {
        Self {
            significance: DEFAULT_SIGNIFICANCE,
            degrees_of_freedom: BENFORD_DEGREES_OF_FREEDOM,
            critical_value: 15.51,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Getters)]
pub struct TestResult {
    /// Raw statistic, the value compared against the critical value.
    statistic: f64,
    /// Statistic rounded half up, for display.
    rounded_statistic: u64,
    /// `statistic < critical_value`: the data is consistent with Benford's Law.
    verdict: bool,
    critical_value: f64,
    significance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ChiSquareTester {
    config: GoodnessOfFitConfig,
}

impl ChiSquareTester {
    pub fn new(config: GoodnessOfFitConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GoodnessOfFitConfig {
        &self.config
    }

    /// `sum over d of (observed[d] - expected[d])^2 / expected[d]`.
    ///
    /// Every expected count must be positive; a zero count is reported as
    /// [`StatError::DegenerateDistribution`].
    pub fn statistic(observed: &DigitCounts, expected: &DigitCounts) -> StatResult<f64> {
        let mut stat = 0.0;
        for (digit, exp) in expected.iter() {
            if exp == 0 {
                return Err(StatError::DegenerateDistribution {
                    digit,
                    expected: exp,
                });
            }
            let diff = observed[digit] as f64 - exp as f64;
            stat += diff * diff / exp as f64;
        }
        Ok(stat)
    }

    pub fn test(&self, observed: &DigitCounts, expected: &DigitCounts) -> StatResult<TestResult> {
        let statistic = Self::statistic(observed, expected)?;
        let verdict = statistic < self.config.critical_value;
        log::debug!(
            "chi-square statistic {:.4} against critical value {} (alpha={})",
            statistic,
            self.config.critical_value,
            self.config.significance
        );
        Ok(TestResult {
            statistic,
            rounded_statistic: statistic.round() as u64,
            verdict,
            critical_value: self.config.critical_value,
            significance: self.config.significance,
        })
    }
}
