//! Exchange rate table and reduction to a single currency.
//!
//! Rates are stored per ordered pair and mean "units of source currency per
//! unit of target currency". Lookups are strict: the reverse pair is never
//! derived and no multi-hop path is searched. A pair of identical
//! currencies always has rate 1.

pub mod error;
pub mod exchange;

#[cfg(test)]
mod props;

use std::collections::HashMap;

use moneta_shared::config::BankConfig;
use moneta_shared::Currency;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::expression::{Expression, Money};

pub use error::BankError;
pub use exchange::ExchangeRate;

/// Registry of exchange rates that evaluates expressions.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    // source -> target -> rate
    rates: HashMap<Currency, HashMap<Currency, Decimal>>,
}

impl Bank {
    /// Creates a bank with no rates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a bank holding every rate in the configuration.
    #[must_use]
    pub fn from_config(config: &BankConfig) -> Self {
        config.rates.iter().map(ExchangeRate::from).collect()
    }

    /// Registers `rate` for `from -> to`, replacing any previous entry.
    ///
    /// The rate is not validated and the inverse pair is left untouched.
    pub fn add_rate(&mut self, from: impl Into<Currency>, to: impl Into<Currency>, rate: Decimal) {
        let from = from.into();
        let to = to.into();
        debug!(from = %from, to = %to, rate = %rate, "Registering exchange rate");
        if let Some(previous) = self.rates.entry(from).or_default().insert(to, rate) {
            debug!(previous = %previous, "Replaced existing exchange rate");
        }
    }

    /// Registers an [`ExchangeRate`].
    pub fn add_exchange_rate(&mut self, rate: ExchangeRate) {
        self.add_rate(rate.from_currency, rate.to_currency, rate.rate);
    }

    /// Returns the rate for `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`BankError::RateNotFound`] if the currencies differ and no
    /// rate is registered for this exact ordered pair.
    pub fn rate(&self, from: &str, to: &str) -> Result<Decimal, BankError> {
        if from == to {
            return Ok(Decimal::ONE);
        }

        match self.rates.get(from).and_then(|targets| targets.get(to)) {
            Some(rate) => {
                debug!(from, to, rate = %rate, "Exchange rate lookup");
                Ok(*rate)
            }
            None => {
                warn!(from, to, "No exchange rate registered");
                Err(BankError::RateNotFound {
                    from: Currency::from(from),
                    to: Currency::from(to),
                })
            }
        }
    }

    /// Reduces `expression` to a single amount in `to`.
    ///
    /// # Errors
    ///
    /// Propagates any [`BankError`] raised by the expression.
    pub fn reduce<E>(&self, expression: &E, to: &str) -> Result<Money, BankError>
    where
        E: Expression + ?Sized,
    {
        let result = expression.reduce(self, to);
        if let Ok(money) = &result {
            debug!(result = %money, "Reduced expression");
        }
        result
    }

    /// Returns the number of registered pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.values().map(HashMap::len).sum()
    }

    /// Returns true if no rate is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the registered rates in no particular order.
    pub fn rates(&self) -> impl Iterator<Item = ExchangeRate> + '_ {
        self.rates.iter().flat_map(|(from, targets)| {
            targets
                .iter()
                .map(move |(to, rate)| ExchangeRate::new(from, to, *rate))
        })
    }
}

impl FromIterator<ExchangeRate> for Bank {
    fn from_iter<I: IntoIterator<Item = ExchangeRate>>(iter: I) -> Self {
        let mut bank = Self::new();
        bank.extend(iter);
        bank
    }
}

impl Extend<ExchangeRate> for Bank {
    fn extend<I: IntoIterator<Item = ExchangeRate>>(&mut self, iter: I) {
        for rate in iter {
            self.add_exchange_rate(rate);
        }
    }
}
