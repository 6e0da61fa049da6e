//! Money values and deferred arithmetic over them.
//!
//! Adding two amounts does not add numbers: it builds a [`Sum`] node.
//! Nothing is converted until the tree is handed to a [`Bank`] together
//! with a target currency.

pub mod money;
pub mod sum;

#[cfg(test)]
mod props;

use rust_decimal::Decimal;

use crate::bank::{Bank, BankError};

pub use money::Money;
pub use sum::Sum;

/// Anything that can be reduced to a single [`Money`] in a target currency.
pub trait Expression {
    /// Reduces the expression to `to`, asking `bank` for every rate it needs.
    ///
    /// # Errors
    ///
    /// Returns the first [`BankError`] raised while resolving a rate or
    /// combining amounts.
    fn reduce(&self, bank: &Bank, to: &str) -> Result<Money, BankError>;
}

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Leaf amount.
    Money(Money),
    /// Binary addition of two subtrees.
    Sum(Box<Sum>),
}

impl Expr {
    /// Builds `self + addend`.
    #[must_use]
    pub fn plus(&self, addend: impl Into<Expr>) -> Sum {
        Sum::new(self.clone(), addend)
    }

    /// Multiplies every leaf of the tree by `multiplier`.
    #[must_use]
    pub fn times(&self, multiplier: Decimal) -> Self {
        match self {
            Self::Money(money) => Self::Money(money.times(multiplier)),
            Self::Sum(sum) => Self::Sum(Box::new(sum.times(multiplier))),
        }
    }

    /// Multiplies every leaf by `multiplier`, or returns `None` if any
    /// product overflows.
    #[must_use]
    pub fn checked_times(&self, multiplier: Decimal) -> Option<Self> {
        match self {
            Self::Money(money) => money.checked_times(multiplier).map(Self::Money),
            Self::Sum(sum) => sum.checked_times(multiplier).map(Self::from),
        }
    }

    /// Folds expressions into a balanced sum, keeping their order.
    ///
    /// Adjacent terms are paired level by level, so the tree is only
    /// `log2(n)` deep. Returns `None` when `terms` is empty; a single term is
    /// returned as is.
    pub fn total<I, E>(terms: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Expr>,
    {
        let mut level: Vec<Self> = terms.into_iter().map(Into::into).collect();
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut pairs = level.into_iter();
            while let Some(augend) = pairs.next() {
                next.push(match pairs.next() {
                    Some(addend) => Self::from(Sum::new(augend, addend)),
                    None => augend,
                });
            }
            level = next;
        }
        level.pop()
    }
}

impl Expression for Expr {
    fn reduce(&self, bank: &Bank, to: &str) -> Result<Money, BankError> {
        match self {
            Self::Money(money) => money.reduce(bank, to),
            Self::Sum(sum) => sum.reduce(bank, to),
        }
    }
}

impl From<Money> for Expr {
    fn from(money: Money) -> Self {
        Self::Money(money)
    }
}

impl From<Sum> for Expr {
    fn from(sum: Sum) -> Self {
        Self::Sum(Box::new(sum))
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Money(money) => std::fmt::Display::fmt(money, f),
            Self::Sum(sum) => std::fmt::Display::fmt(sum, f),
        }
    }
}
