//! Property-based tests for rate lookups.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::{Bank, BankError};

/// Strategy to generate currency codes ("AAA" to "ZZZ").
fn currency_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}"
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identity pairs resolve to 1 whatever the table holds.
    #[test]
    fn prop_identity_rate_is_one(
        code in currency_code(),
        other in currency_code(),
        rate in positive_rate(),
    ) {
        let mut bank = Bank::new();
        bank.add_rate(other.as_str(), code.as_str(), rate);
        prop_assert_eq!(bank.rate(&code, &code), Ok(Decimal::ONE));
    }

    /// A registered pair returns exactly the registered rate.
    #[test]
    fn prop_registered_rate_is_returned(
        from in currency_code(),
        to in currency_code(),
        rate in positive_rate(),
    ) {
        prop_assume!(from != to);
        let mut bank = Bank::new();
        bank.add_rate(from.as_str(), to.as_str(), rate);
        prop_assert_eq!(bank.rate(&from, &to), Ok(rate));
    }

    /// Registering one direction never makes the reverse resolvable.
    #[test]
    fn prop_reverse_pair_not_inferred(
        from in currency_code(),
        to in currency_code(),
        rate in positive_rate(),
    ) {
        prop_assume!(from != to);
        let mut bank = Bank::new();
        bank.add_rate(from.as_str(), to.as_str(), rate);
        let is_rate_not_found = matches!(bank.rate(&to, &from), Err(BankError::RateNotFound { .. }));
        prop_assert!(is_rate_not_found, "reverse pair {} -> {} should be missing", to, from);
    }
}
