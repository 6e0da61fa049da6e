//! Core money arithmetic for Moneta.
//!
//! This crate contains pure domain logic with ZERO I/O dependencies.
//!
//! # Modules
//!
//! - `expression` - Money values and deferred arithmetic over them
//! - `bank` - Exchange rate table and reduction to a single currency
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use moneta_core::bank::Bank;
//! use moneta_core::expression::Money;
//!
//! let mut bank = Bank::new();
//! bank.add_rate("CHF", "USD", dec!(2));
//!
//! let total = Money::dollar(dec!(1)).plus(Money::franc(dec!(2)));
//! assert_eq!(bank.reduce(&total, "USD").unwrap(), Money::dollar(dec!(2)));
//! ```

pub mod bank;
pub mod expression;

pub use bank::{Bank, BankError, ExchangeRate};
pub use expression::{Expr, Expression, Money, Sum};
pub use moneta_shared::Currency;
