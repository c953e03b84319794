use serde::{Deserialize, Serialize};

use crate::Money;

/// Currency code used by every money value in the tracker.
///
/// The tracker is mono-currency, but the engine models currency explicitly
/// so formatting lives in one place.
///
/// Amounts keep whatever precision they were entered with; only the
/// formatted form is rounded to two decimals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }

    /// Symbol printed in front of formatted amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
        }
    }

    /// Formats `amount` with the currency symbol, thousands separators and
    /// exactly two decimals.
    ///
    /// ```rust
    /// use engine::{Currency, Money};
    ///
    /// let amount: Money = "123456.78".parse().unwrap();
    /// assert_eq!(Currency::Inr.format(amount), "₹123,456.78");
    /// let amount: Money = "-50".parse().unwrap();
    /// assert_eq!(Currency::Inr.format(amount), "₹-50.00");
    /// ```
    #[must_use]
    pub fn format(self, amount: Money) -> String {
        format!("{}{}", self.symbol(), amount.grouped())
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_groups_thousands() {
        assert_eq!(Currency::Inr.format(Money::ZERO), "₹0.00");
        assert_eq!(Currency::Inr.format(Money::new(dec!(999.99))), "₹999.99");
        assert_eq!(Currency::Inr.format(Money::new(dec!(1000))), "₹1,000.00");
        assert_eq!(
            Currency::Inr.format(Money::new(dec!(1234567.05))),
            "₹1,234,567.05"
        );
    }

    #[test]
    fn format_keeps_sign_after_symbol() {
        assert_eq!(Currency::Inr.format(Money::new(dec!(-1500))), "₹-1,500.00");
    }
}
