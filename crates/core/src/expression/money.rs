//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use moneta_shared::types::currency::{CHF, USD};
use moneta_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Expr, Expression, Sum};
use crate::bank::{Bank, BankError};

/// Represents a monetary amount with currency.
///
/// Values are immutable: arithmetic returns new instances. Two values are
/// equal when the amounts are numerically equal and the codes match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money instance. Any amount and code are accepted.
    #[must_use]
    pub fn new(amount: Decimal, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates an amount in US dollars.
    #[must_use]
    pub fn dollar(amount: Decimal) -> Self {
        Self::new(amount, USD)
    }

    /// Creates an amount in Swiss francs.
    #[must_use]
    pub fn franc(amount: Decimal) -> Self {
        Self::new(amount, CHF)
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: impl Into<Currency>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency code.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns `amount * multiplier` in the same currency.
    ///
    /// Use [`Money::checked_times`] when the multiplier is untrusted.
    ///
    /// # Panics
    ///
    /// Panics if the product overflows `Decimal`.
    #[must_use]
    pub fn times(&self, multiplier: Decimal) -> Self {
        Self {
            amount: self.amount * multiplier,
            currency: self.currency.clone(),
        }
    }

    /// Returns `amount * multiplier`, or `None` if the product overflows.
    #[must_use]
    pub fn checked_times(&self, multiplier: Decimal) -> Option<Self> {
        Some(Self {
            amount: self.amount.checked_mul(multiplier)?,
            currency: self.currency.clone(),
        })
    }

    /// Builds the deferred sum `self + addend`.
    ///
    /// No conversion happens here; the sum is only evaluated by
    /// [`Bank::reduce`].
    #[must_use]
    pub fn plus(&self, addend: impl Into<Expr>) -> Sum {
        Sum::new(self.clone(), addend)
    }
}

impl Expression for Money {
    fn reduce(&self, bank: &Bank, to: &str) -> Result<Money, BankError> {
        let rate = bank.rate(self.currency.as_str(), to)?;
        if rate.is_zero() {
            return Err(BankError::ZeroRate {
                from: self.currency.clone(),
                to: Currency::from(to),
            });
        }
        let amount = self
            .amount
            .checked_div(rate)
            .ok_or_else(|| BankError::Overflow {
                currency: Currency::from(to),
            })?;
        Ok(Money::new(amount, to))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
