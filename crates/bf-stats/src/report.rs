//! Benford analysis of one column: extraction, distributions, test.

use derive_getters::Getters;
use serde::Serialize;

use crate::chi_square::{ChiSquareTester, GoodnessOfFitConfig, TestResult};
use crate::digit::{DigitSequence, extract};
use crate::distribution::{DigitCounts, DigitPercents, build_expected, build_observed};
use crate::error::{StatError, StatResult};
use crate::value::Scalar;

pub const VALIDATED_EXPLANATION: &str = "The Chi-Square statistic is lower than the critical value.";
pub const REJECTED_EXPLANATION: &str = "The Chi-Square statistic is higher than the critical value.";

/// 分析结果：观测分布、期望分布与卡方检验结论
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct AnalysisReport {
    /// 参与统计的首位数字个数
    sample_size: u64,
    /// 无法提取首位数字而被丢弃的值个数
    dropped: u64,
    observed: DigitCounts,
    observed_percent: DigitPercents,
    expected: DigitCounts,
    test: TestResult,
    #[getter(skip)]
    explanation: &'static str,
}

impl AnalysisReport {
    pub fn validates(&self) -> bool {
        *self.test.verdict()
    }

    /// Fixed explanation string keyed by the verdict.
    pub fn explanation(&self) -> &'static str {
        self.explanation
    }

    /// Verdict headline, `YES` when the column validates Benford's Law.
    pub fn answer(&self) -> &'static str {
        if self.validates() { "YES" } else { "NO" }
    }
}

/// Runs extraction, distribution building and the chi-square test in order.
#[derive(Debug, Clone, Default)]
pub struct BenfordAnalyzer {
    tester: ChiSquareTester,
}

impl BenfordAnalyzer {
    pub fn new(config: GoodnessOfFitConfig) -> Self {
        Self {
            tester: ChiSquareTester::new(config),
        }
    }

    pub fn config(&self) -> &GoodnessOfFitConfig {
        self.tester.config()
    }

    pub fn analyze<'a, I>(&self, values: I) -> StatResult<AnalysisReport>
    where
        I: IntoIterator<Item = &'a Scalar>,
    {
        self.analyze_digits(&extract(values))
    }

    pub fn analyze_digits(&self, digits: &DigitSequence) -> StatResult<AnalysisReport> {
        if digits.is_empty() {
            return Err(StatError::EmptyInput);
        }
        let observed = build_observed(digits)?;
        let sample_size = digits.len() as u64;
        let expected = build_expected(sample_size);
        let test = self.tester.test(observed.counts(), &expected)?;
        let explanation = if *test.verdict() {
            VALIDATED_EXPLANATION
        } else {
            REJECTED_EXPLANATION
        };
        log::info!(
            "benford analysis: {} digits ({} dropped), chi-square {:.3}, validates={}",
            sample_size,
            digits.dropped(),
            test.statistic(),
            test.verdict()
        );
        Ok(AnalysisReport {
            sample_size,
            dropped: digits.dropped() as u64,
            observed: *observed.counts(),
            observed_percent: *observed.percents(),
            expected,
            test,
            explanation,
        })
    }
}

/// Analyze with the default 0.05 significance level.
pub fn analyze<'a, I>(values: I) -> StatResult<AnalysisReport>
where
    I: IntoIterator<Item = &'a Scalar>,
{
    BenfordAnalyzer::default().analyze(values)
}
