//! Observed and Benford-expected digit distributions.
//!
//! Counts are keyed by digit 1-9 only. There is no digit-0 slot: zero is never
//! a leading digit, so it takes no part in the distributions or the test.

use std::ops::Index;

use derive_getters::Getters;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::digit::{DigitSequence, LeadingDigit};
use crate::error::{StatError, StatResult};

/// Benford percentages for digits 1-9, as tabulated (sums to 100).
pub const BENFORD_PERCENTS: [f64; 9] = [30.1, 17.6, 12.5, 9.7, 7.9, 6.7, 5.8, 5.1, 4.6];

/// The same table in tenths of a percent (sums to 1000). Expected counts are
/// computed from these so that exact `.5` ties round up.
pub const BENFORD_PERMILLE: [u64; 9] = [301, 176, 125, 97, 79, 67, 58, 51, 46];

/// Per-digit counts for digits 1-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitCounts([u64; 9]);

impl DigitCounts {
    pub fn from_array(counts: [u64; 9]) -> Self {
        Self(counts)
    }

    pub fn get(&self, digit: LeadingDigit) -> u64 {
        self.0[digit.index()]
    }

    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    pub fn as_array(&self) -> &[u64; 9] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadingDigit, u64)> + '_ {
        LeadingDigit::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Index<LeadingDigit> for DigitCounts {
    type Output = u64;

    fn index(&self, digit: LeadingDigit) -> &u64 {
        &self.0[digit.index()]
    }
}

impl Serialize for DigitCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (digit, count) in self.iter() {
            map.serialize_entry(&digit.to_string(), &count)?;
        }
        map.end()
    }
}

/// Per-digit percentages of the sample, for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DigitPercents([f64; 9]);

impl DigitPercents {
    pub fn get(&self, digit: LeadingDigit) -> f64 {
        self.0[digit.index()]
    }

    pub fn as_array(&self) -> &[f64; 9] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadingDigit, f64)> + '_ {
        LeadingDigit::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl Serialize for DigitPercents {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (digit, percent) in self.iter() {
            map.serialize_entry(&digit.to_string(), &percent)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Getters)]
pub struct ObservedDistribution {
    counts: DigitCounts,
    percents: DigitPercents,
}

/// Count each digit of the sequence and derive its share of the sample.
///
/// An empty sequence has no percentages and yields [`StatError::EmptyInput`].
pub fn build_observed(digits: &DigitSequence) -> StatResult<ObservedDistribution> {
    if digits.is_empty() {
        return Err(StatError::EmptyInput);
    }
    let mut counts = [0u64; 9];
    for digit in digits.iter() {
        counts[digit.index()] += 1;
    }
    let total = digits.len() as f64;
    let percents = counts.map(|c| c as f64 / total * 100.0);
    Ok(ObservedDistribution {
        counts: DigitCounts(counts),
        percents: DigitPercents(percents),
    })
}

/// Benford-expected counts for a sample of `sample_size` digits.
///
/// `expected[d] = round(percent[d] * sample_size / 100)`, rounding half up
/// (`112.5 -> 113`). Depends on the sample size only.
pub fn build_expected(sample_size: u64) -> DigitCounts {
    // 整数运算：f64 乘积会让 x.5 落在 .5 之下
    let n = u128::from(sample_size);
    DigitCounts(BENFORD_PERMILLE.map(|permille| {
        let count = (u128::from(permille) * n + 500) / 1000;
        u64::try_from(count).unwrap_or(u64::MAX)
    }))
}
