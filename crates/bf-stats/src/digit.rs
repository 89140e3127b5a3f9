//! Leading digit extraction.
//!
//! A value's leading digit is the first digit 1-9 of its decimal form, with
//! sign, zero prefix and decimal point skipped: `0.053 -> 5`, `-17 -> 1`.
//! Values without such a digit (zero, blank, non-numeric text, NaN) are
//! dropped from the sequence and counted in [`DigitSequence::dropped`].

use std::fmt::{Display, Formatter};

use serde::Serialize;
use winnow::ascii::digit1;
use winnow::combinator::{alt, opt};
use winnow::token::one_of;
use winnow::{ModalResult, Parser};

use crate::value::Scalar;

/// A first significant digit, always in `1..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LeadingDigit(u8);

impl LeadingDigit {
    pub const ALL: [LeadingDigit; 9] = [
        LeadingDigit(1),
        LeadingDigit(2),
        LeadingDigit(3),
        LeadingDigit(4),
        LeadingDigit(5),
        LeadingDigit(6),
        LeadingDigit(7),
        LeadingDigit(8),
        LeadingDigit(9),
    ];

    pub fn new(digit: u8) -> Option<Self> {
        (1..=9).contains(&digit).then_some(Self(digit))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Slot of this digit in a 9-entry table (digit 1 -> 0).
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    fn from_ascii(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }
}

impl TryFrom<u8> for LeadingDigit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl Display for LeadingDigit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered leading digits of one column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitSequence {
    digits: Vec<LeadingDigit>,
    dropped: usize,
}

impl DigitSequence {
    pub fn new(digits: Vec<LeadingDigit>, dropped: usize) -> Self {
        Self { digits, dropped }
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Number of input values that yielded no leading digit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = LeadingDigit> + '_ {
        self.digits.iter().copied()
    }
}

impl FromIterator<LeadingDigit> for DigitSequence {
    fn from_iter<T: IntoIterator<Item = LeadingDigit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect(), 0)
    }
}

impl Scalar {
    /// First significant digit of this cell, `None` when it has none.
    pub fn leading_digit(&self) -> Option<LeadingDigit> {
        match self {
            Scalar::Int(v) => first_significant(&v.unsigned_abs().to_string()),
            Scalar::Float(v) => {
                if !v.is_finite() {
                    return None;
                }
                // f64 Display never switches to exponent notation
                first_significant(&v.abs().to_string())
            }
            Scalar::Text(s) => numeric_mantissa
                .parse(s.trim())
                .ok()
                .and_then(first_significant),
            Scalar::Empty => None,
        }
    }
}

/// Extract the leading digit of every value, silently dropping values that
/// have none.
pub fn extract<'a, I>(values: I) -> DigitSequence
where
    I: IntoIterator<Item = &'a Scalar>,
{
    let mut digits = Vec::new();
    let mut dropped = 0;
    for value in values {
        match value.leading_digit() {
            Some(d) => digits.push(d),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        log::debug!(
            "leading digit extraction dropped {} of {} values",
            dropped,
            digits.len() + dropped
        );
    }
    DigitSequence::new(digits, dropped)
}

fn first_significant(decimal: &str) -> Option<LeadingDigit> {
    decimal.chars().find_map(LeadingDigit::from_ascii)
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`, yielding the
/// mantissa. Digits after the exponent marker never count.
fn numeric_mantissa<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    opt(one_of(['+', '-'])).parse_next(input)?;
    let mantissa = alt((
        (digit1, opt(('.', opt(digit1)))).take(),
        ('.', digit1).take(),
    ))
    .parse_next(input)?;
    opt(exponent).parse_next(input)?;
    Ok(mantissa)
}

fn exponent(input: &mut &str) -> ModalResult<()> {
    (one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)
        .void()
        .parse_next(input)
}
