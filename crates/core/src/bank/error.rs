//! Bank error types.

use moneta_shared::{AppError, Currency};
use thiserror::Error;

/// Errors raised while reducing an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// No exchange rate registered for the ordered currency pair.
    #[error("No exchange rate found for {from} to {to}")]
    RateNotFound {
        /// Source currency code.
        from: Currency,
        /// Target currency code.
        to: Currency,
    },

    /// The registered rate is zero, so the amount cannot be divided by it.
    #[error("Exchange rate for {from} to {to} is zero")]
    ZeroRate {
        /// Source currency code.
        from: Currency,
        /// Target currency code.
        to: Currency,
    },

    /// A converted or summed amount does not fit in a `Decimal`.
    #[error("Amount overflow while reducing to {currency}")]
    Overflow {
        /// Target currency code.
        currency: Currency,
    },
}

impl From<BankError> for AppError {
    fn from(err: BankError) -> Self {
        match err {
            BankError::RateNotFound { .. } => Self::NotFound(err.to_string()),
            BankError::ZeroRate { .. } => Self::Validation(err.to_string()),
            BankError::Overflow { .. } => Self::Internal(err.to_string()),
        }
    }
}
