//! Moneta calculator
//!
//! Adds money amounts in any currency and prints the total in one currency,
//! using the exchange rates from configuration.
//!
//! Usage: moneta [--to CHF] 5 USD 10 CHF

mod args;

use clap::Parser;
use moneta_core::{Bank, Expr, Money};
use moneta_shared::{AppConfig, AppError, AppResult};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::args::{Cli, Request};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "moneta=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let request = Cli::parse().into_request()?;

    let config = AppConfig::load().map_err(AppError::from)?;
    let total = run(&config, request)?;
    println!("{total}");

    Ok(())
}

fn run(config: &AppConfig, request: Request) -> AppResult<Money> {
    let bank = Bank::from_config(&config.bank);
    info!(rates = bank.len(), "Exchange rates loaded");

    let to = request
        .to
        .unwrap_or_else(|| config.calculator.target_currency.clone());
    let expression = Expr::total(request.terms)
        .ok_or_else(|| AppError::Validation("At least one amount is required".to_string()))?;
    info!(expression = %expression, to = %to, "Reducing");

    Ok(bank.reduce(&expression, to.as_str())?)
}
