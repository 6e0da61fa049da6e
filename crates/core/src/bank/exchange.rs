//! Exchange rate types.

use moneta_shared::config::RateEntry;
use moneta_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Source currency code.
    pub from_currency: Currency,
    /// Target currency code.
    pub to_currency: Currency,
    /// Units of `from_currency` per unit of `to_currency`.
    pub rate: Decimal,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(
        from_currency: impl Into<Currency>,
        to_currency: impl Into<Currency>,
        rate: Decimal,
    ) -> Self {
        Self {
            from_currency: from_currency.into(),
            to_currency: to_currency.into(),
            rate,
        }
    }

    /// Returns the reverse pair with the reciprocal rate.
    ///
    /// Returns `None` for a zero rate.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let rate = Decimal::ONE.checked_div(self.rate)?;
        Some(Self {
            from_currency: self.to_currency.clone(),
            to_currency: self.from_currency.clone(),
            rate,
        })
    }
}

impl From<&RateEntry> for ExchangeRate {
    fn from(entry: &RateEntry) -> Self {
        Self::new(&entry.from, &entry.to, entry.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_inverse() {
        let rate = ExchangeRate::new("CHF", "USD", dec!(2));
        let inverse = rate.inverse().unwrap();
        assert_eq!(inverse.from_currency, "USD");
        assert_eq!(inverse.to_currency, "CHF");
        assert_eq!(inverse.rate, dec!(0.5));
    }

    #[test]
    fn test_inverse_of_zero_rate() {
        assert!(ExchangeRate::new("CHF", "USD", Decimal::ZERO).inverse().is_none());
    }

    #[test]
    fn test_from_rate_entry() {
        let entry = RateEntry {
            from: Currency::from("EUR"),
            to: Currency::from("USD"),
            rate: dec!(0.92),
        };
        assert_eq!(
            ExchangeRate::from(&entry),
            ExchangeRate::new("EUR", "USD", dec!(0.92))
        );
    }
}
