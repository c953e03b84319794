use std::{fmt, iter::Sum, str::FromStr};

use rust_decimal::{Decimal, prelude::FromPrimitive};

use crate::EngineError;

/// Largest magnitude accepted for a single amount, in major units.
///
/// Totals are kept in `Decimal` (max ~7.9e28), so no collection of
/// accepted amounts that fits in memory can overflow them.
const MAX_MAGNITUDE: f64 = 1e18;

/// Signed money amount in major units, backed by a `Decimal`.
///
/// Use this type for every monetary value in the engine (transaction
/// amounts, goal targets, summary totals) so sums do not pick up
/// floating-point drift.
///
/// # Examples
///
/// Input follows the usual float syntax, surrounding whitespace allowed:
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!("12.345".parse::<Money>().unwrap().to_string(), "12.345");
/// assert_eq!(" 1e3 ".parse::<Money>().unwrap().to_string(), "1000");
/// assert!("10,5".parse::<Money>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns `true` if the amount is positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns `true` if the amount is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    #[must_use]
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    #[must_use]
    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    /// Converts a JSON number into an amount.
    ///
    /// The decimal value is the shortest one that round-trips to `value`,
    /// so `12.345` is stored as `12.345` and not as its binary expansion.
    pub fn from_number(value: f64) -> Result<Self, EngineError> {
        if !value.is_finite() {
            return Err(EngineError::Validation(
                "amount must be a finite number".to_string(),
            ));
        }
        if value.abs() > MAX_MAGNITUDE {
            return Err(EngineError::Validation("amount too large".to_string()));
        }

        let decimal = Decimal::from_str(&value.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(value))
            .ok_or_else(|| EngineError::Validation("amount must be a number".to_string()))?;
        Ok(Money(decimal.normalize()))
    }

    /// Returns the float nearest to the amount, for JSON output.
    #[must_use]
    pub fn to_f64(self) -> f64 {
        self.0.to_string().parse().unwrap_or_default()
    }

    /// Formats the amount with `,` thousands separators and two decimals,
    /// rounding half to even.
    ///
    /// ```rust
    /// use engine::Money;
    ///
    /// let amount: Money = "1234567.891".parse().unwrap();
    /// assert_eq!(amount.grouped(), "1,234,567.89");
    /// ```
    #[must_use]
    pub fn grouped(self) -> String {
        let mut rounded = self.0.round_dp(2);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        rounded.set_sign_positive(true);
        rounded.rescale(2);

        let text = rounded.to_string();
        let (digits, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
        let mut units = String::with_capacity(digits.len() + digits.len() / 3);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (digits.len() - idx) % 3 == 0 {
                units.push(',');
            }
            units.push(ch);
        }
        format!("{sign}{units}.{fraction}")
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl FromStr for Money {
    type Err = EngineError;

    /// Parses a numeric string the way a float literal is read: optional
    /// sign, optional fraction, optional exponent. `,` is not a decimal
    /// separator.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| EngineError::Validation("amount must be a number".to_string()))?;
        Self::from_number(value)
    }
}
