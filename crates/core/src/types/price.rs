//! Type-safe price representation using decimal arithmetic.
//!
//! Money is never represented as a float. All derived amounts (line totals,
//! cart totals, tax) go through [`Price::round_to_cents`], which rounds
//! half-away-from-zero at the cent boundary.

use core::fmt;
use core::ops::Add;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price from an amount in the smallest currency unit.
    #[must_use]
    pub fn from_cents(cents: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(cents, 2),
            currency_code,
        }
    }

    /// A zero price in the given currency.
    #[must_use]
    pub fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// Round to two decimal places, half-away-from-zero.
    ///
    /// `9.995` rounds to `10.00`, not `9.99`.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            currency_code: self.currency_code,
        }
    }

    /// Multiply by a quantity, producing a cent-rounded line total.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
        .round_to_cents()
    }

    /// Whether this price is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl Add for Price {
    type Output = Self;

    /// Add two prices. The left-hand currency wins; mixing currencies is a
    /// caller bug (the demo store is single-currency).
    fn add(self, rhs: Self) -> Self {
        Self {
            amount: self.amount + rhs.amount,
            currency_code: self.currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code string.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(s: &str) -> Price {
        Price::new(s.parse().unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(usd("9.995").round_to_cents(), usd("10.00"));
        assert_eq!(usd("9.994").round_to_cents(), usd("9.99"));
        assert_eq!(usd("-9.995").round_to_cents(), usd("-10.00"));
    }

    #[test]
    fn test_times_rounds_line_total() {
        // 3 * 9.99 = 29.97, exact
        assert_eq!(usd("9.99").times(3), usd("29.97"));
        // 2 * 9.995 = 19.99, midpoint already resolved by multiplication
        assert_eq!(usd("9.995").times(2), usd("19.99"));
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(1999, CurrencyCode::USD), usd("19.99"));
    }

    #[test]
    fn test_display() {
        assert_eq!(usd("19.99").to_string(), "$19.99");
        assert_eq!(usd("5").to_string(), "$5.00");
    }

    #[test]
    fn test_add() {
        assert_eq!(usd("1.50") + usd("2.25"), usd("3.75"));
    }
}
