//! Property-based tests for money expressions.
//!
//! - Scalar multiplication
//! - Same-currency addition through an empty bank
//! - Conversion by division
//! - Currency-sensitive equality

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Expr, Money};
use crate::bank::Bank;

/// Strategy to generate amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate multipliers (-1000.000 to 1000.000).
fn multiplier() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|v| Decimal::new(v, 3))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to generate currency codes.
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* amount, multiplier and currency, `times` multiplies the
    /// amount and keeps the currency.
    #[test]
    fn prop_times_multiplies_amount(
        a in amount(),
        m in multiplier(),
        code in currency_code(),
    ) {
        let money = Money::new(a, code.as_str());
        prop_assert_eq!(money.times(m), Money::new(a * m, code.as_str()));
    }

    /// *For any* two amounts in one currency, their sum reduced by an empty
    /// bank is the numeric sum.
    #[test]
    fn prop_same_currency_sum(
        a1 in amount(),
        a2 in amount(),
        code in currency_code(),
    ) {
        let bank = Bank::new();
        let sum = Money::new(a1, code.as_str()).plus(Money::new(a2, code.as_str()));
        prop_assert_eq!(bank.reduce(&sum, &code), Ok(Money::new(a1 + a2, code.as_str())));
    }

    /// *For any* nested total of same-currency terms, reduction equals the
    /// numeric total.
    #[test]
    fn prop_nested_total(
        amounts in prop::collection::vec(amount(), 1..20),
    ) {
        let bank = Bank::new();
        let expr = Expr::total(amounts.iter().map(|a| Money::dollar(*a))).unwrap();
        let expected: Decimal = amounts.iter().copied().sum();
        prop_assert_eq!(bank.reduce(&expr, "USD"), Ok(Money::dollar(expected)));
    }

    /// *For any* rate r, `amount * r` francs reduce to `amount` dollars when
    /// CHF -> USD is r.
    #[test]
    fn prop_reduce_divides_by_rate(
        a in amount(),
        rate in positive_rate(),
    ) {
        let mut bank = Bank::new();
        bank.add_rate("CHF", "USD", rate);
        let francs = Money::franc(a * rate);
        prop_assert_eq!(bank.reduce(&francs, "USD"), Ok(Money::dollar(a)));
    }

    /// *For any* amount, equality is reflexive, symmetric and sensitive to
    /// the currency code.
    #[test]
    fn prop_equality_is_currency_sensitive(
        a in amount(),
        c1 in currency_code(),
        c2 in currency_code(),
    ) {
        let left = Money::new(a, c1.as_str());
        let right = Money::new(a, c2.as_str());
        prop_assert_eq!(&left, &left.clone());
        prop_assert_eq!(left == right, right == left);
        prop_assert_eq!(left == right, c1 == c2);
    }
}
