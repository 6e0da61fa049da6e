//! Deferred addition of two expressions.

use moneta_shared::Currency;
use rust_decimal::Decimal;

use super::{Expr, Expression, Money};
use crate::bank::{Bank, BankError};

/// `augend + addend`, evaluated only when reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sum {
    augend: Expr,
    addend: Expr,
}

impl Sum {
    /// Creates a sum that owns both operands.
    #[must_use]
    pub fn new(augend: impl Into<Expr>, addend: impl Into<Expr>) -> Self {
        Self {
            augend: augend.into(),
            addend: addend.into(),
        }
    }

    /// Returns the left operand.
    #[must_use]
    pub const fn augend(&self) -> &Expr {
        &self.augend
    }

    /// Returns the right operand.
    #[must_use]
    pub const fn addend(&self) -> &Expr {
        &self.addend
    }

    /// Builds `self + addend`.
    #[must_use]
    pub fn plus(&self, addend: impl Into<Expr>) -> Self {
        Self::new(self.clone(), addend)
    }

    /// Multiplies both operands by `multiplier`.
    #[must_use]
    pub fn times(&self, multiplier: Decimal) -> Self {
        Self {
            augend: self.augend.times(multiplier),
            addend: self.addend.times(multiplier),
        }
    }

    /// Multiplies both operands, or returns `None` if any product overflows.
    #[must_use]
    pub fn checked_times(&self, multiplier: Decimal) -> Option<Self> {
        Some(Self {
            augend: self.augend.checked_times(multiplier)?,
            addend: self.addend.checked_times(multiplier)?,
        })
    }
}

impl Expression for Sum {
    /// Reduces every leaf to `to` on its own, then adds the results from
    /// left to right.
    ///
    /// Walks the tree with an explicit stack, so depth is bounded by memory
    /// rather than by the thread stack.
    fn reduce(&self, bank: &Bank, to: &str) -> Result<Money, BankError> {
        let mut total = Decimal::ZERO;
        let mut pending: Vec<&Expr> = vec![&self.addend, &self.augend];

        while let Some(expr) = pending.pop() {
            match expr {
                Expr::Money(money) => {
                    let converted = money.reduce(bank, to)?;
                    total = total.checked_add(converted.amount()).ok_or_else(|| {
                        BankError::Overflow {
                            currency: Currency::from(to),
                        }
                    })?;
                }
                Expr::Sum(sum) => {
                    pending.push(&sum.addend);
                    pending.push(&sum.augend);
                }
            }
        }

        Ok(Money::new(total, to))
    }
}

// Unlinks nested sums onto a heap stack so dropping a deep chain does not
// recurse once per level.
impl Drop for Sum {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        detach_sum(&mut self.augend, &mut pending);
        detach_sum(&mut self.addend, &mut pending);

        while let Some(mut sum) = pending.pop() {
            detach_sum(&mut sum.augend, &mut pending);
            detach_sum(&mut sum.addend, &mut pending);
        }
    }
}

fn detach_sum(expr: &mut Expr, pending: &mut Vec<Box<Sum>>) {
    if matches!(expr, Expr::Sum(_)) {
        if let Expr::Sum(sum) = std::mem::replace(expr, Expr::Money(Money::zero(""))) {
            pending.push(sum);
        }
    }
}

impl std::fmt::Display for Sum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} + {})", self.augend, self.addend)
    }
}
