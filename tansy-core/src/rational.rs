//! Exact rational arithmetic for Tansy numbers.
//!
//! Built on `num_rational::Ratio<i64>`: construction reduces to lowest
//! terms and keeps the sign on the numerator, so every value handed out
//! of this module is already in normal form. Arithmetic goes through the
//! `Checked*` traits; component overflow surfaces as `NumericOverflow`
//! instead of a panic.

use std::fmt;

use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::value::RuntimeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rational(Rational64);

impl Rational {
    /// Builds `numerator / denominator` in lowest terms with a positive
    /// denominator.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, RuntimeError> {
        if denominator == 0 {
            return Err(RuntimeError::DivisionByZero);
        }
        Ok(Rational(Rational64::new(numerator, denominator)))
    }

    pub fn integer(n: i64) -> Self {
        Rational(Rational64::from_integer(n))
    }

    pub fn numerator(&self) -> i64 {
        *self.0.numer()
    }

    pub fn denominator(&self) -> i64 {
        *self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// The integer value, when the denominator is 1.
    pub fn to_integer(&self) -> Option<i64> {
        if self.0.is_integer() {
            Some(self.0.to_integer())
        } else {
            None
        }
    }

    pub fn checked_add(&self, other: &Self) -> Result<Self, RuntimeError> {
        self.0
            .checked_add(&other.0)
            .map(Rational)
            .ok_or(RuntimeError::NumericOverflow)
    }

    pub fn checked_sub(&self, other: &Self) -> Result<Self, RuntimeError> {
        self.0
            .checked_sub(&other.0)
            .map(Rational)
            .ok_or(RuntimeError::NumericOverflow)
    }

    pub fn checked_mul(&self, other: &Self) -> Result<Self, RuntimeError> {
        self.0
            .checked_mul(&other.0)
            .map(Rational)
            .ok_or(RuntimeError::NumericOverflow)
    }

    pub fn checked_div(&self, other: &Self) -> Result<Self, RuntimeError> {
        if other.is_zero() {
            return Err(RuntimeError::DivisionByZero);
        }
        self.0
            .checked_div(&other.0)
            .map(Rational)
            .ok_or(RuntimeError::NumericOverflow)
    }

    /// Reads an integer (`-12`), fraction (`3/4`) or decimal (`1.25`)
    /// literal. Decimals are read exactly, as `mantissa / 10^places`.
    ///
    /// Returns `None` when the text is not number-shaped at all (it is an
    /// identifier then); number-shaped text whose components do not fit
    /// `i64` is `NumericOverflow`, and a zero denominator is
    /// `DivisionByZero`.
    pub fn parse_literal(text: &str) -> Option<Result<Self, RuntimeError>> {
        let unsigned = text.strip_prefix('-').unwrap_or(text);
        let (int_part, sep, rest) = match unsigned.find(['/', '.']) {
            Some(pos) => {
                let (head, tail) = unsigned.split_at(pos);
                (head, tail.chars().next(), &tail[1..])
            }
            None => (unsigned, None, ""),
        };
        if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if sep.is_some() && (rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit())) {
            return None;
        }

        let negative = text.starts_with('-');
        Some(Self::build_literal(int_part, sep, rest, negative))
    }

    fn build_literal(
        int_part: &str,
        sep: Option<char>,
        rest: &str,
        negative: bool,
    ) -> Result<Self, RuntimeError> {
        let magnitude = int_part
            .parse::<i64>()
            .map_err(|_| RuntimeError::NumericOverflow)?;
        match sep {
            None => Self::apply_sign(magnitude, 1, negative),
            Some('/') => {
                let denominator = rest
                    .parse::<i64>()
                    .map_err(|_| RuntimeError::NumericOverflow)?;
                Self::apply_sign(magnitude, denominator, negative)
            }
            Some(_) => {
                // Decimal: digits after the point scale the denominator.
                let places = rest.len() as u32;
                let denominator = 10i64
                    .checked_pow(places)
                    .ok_or(RuntimeError::NumericOverflow)?;
                let fraction = rest
                    .parse::<i64>()
                    .map_err(|_| RuntimeError::NumericOverflow)?;
                let numerator = magnitude
                    .checked_mul(denominator)
                    .and_then(|n| n.checked_add(fraction))
                    .ok_or(RuntimeError::NumericOverflow)?;
                Self::apply_sign(numerator, denominator, negative)
            }
        }
    }

    fn apply_sign(numerator: i64, denominator: i64, negative: bool) -> Result<Self, RuntimeError> {
        let numerator = if negative {
            numerator.checked_neg().ok_or(RuntimeError::NumericOverflow)?
        } else {
            numerator
        };
        Self::new(numerator, denominator)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}
