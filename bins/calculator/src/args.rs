//! Command-line arguments.

use std::str::FromStr;

use clap::Parser;
use moneta_core::Money;
use moneta_shared::{AppError, AppResult, Currency};
use rust_decimal::Decimal;

/// Adds money amounts and prints the total in one currency.
#[derive(Debug, Parser)]
#[command(name = "moneta")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Target currency (default: calculator.target_currency)
    #[arg(short, long)]
    pub to: Option<Currency>,

    /// Amount and currency pairs, e.g. `5 USD 10 CHF`
    #[arg(
        required = true,
        num_args = 1..,
        allow_negative_numbers = true,
        value_name = "AMOUNT CURRENCY"
    )]
    pub terms: Vec<String>,
}

/// A validated reduction request.
#[derive(Debug, PartialEq, Eq)]
pub struct Request {
    /// Target currency, if given on the command line.
    pub to: Option<Currency>,
    /// Terms to add, never empty.
    pub terms: Vec<Money>,
}

impl Cli {
    /// Pairs up amounts with currencies.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed amount or an amount
    /// without a currency.
    pub fn into_request(self) -> AppResult<Request> {
        let mut terms = Vec::with_capacity(self.terms.len() / 2);
        let mut args = self.terms.into_iter();
        while let Some(amount) = args.next() {
            let currency = args.next().ok_or_else(|| {
                AppError::Validation(format!("Missing currency for amount {amount}"))
            })?;
            let value = Decimal::from_str(&amount)
                .map_err(|_| AppError::Validation(format!("Invalid amount: {amount}")))?;
            terms.push(Money::new(value, currency));
        }

        Ok(Request { to: self.to, terms })
    }
}
