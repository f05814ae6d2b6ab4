use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::transactions::{Transaction, TransactionType};

const SHARE_PRECISION: u32 = 1;

#[derive(Debug, PartialEq, Default)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, PartialEq, Default)]
pub struct Shares {
    pub income_pct: Decimal,
    pub expense_pct: Decimal,
}

/// Sums the snapshot per kind. An empty snapshot yields all zeros.
pub fn totals(entries: &[Transaction]) -> Totals {
    let mut income = Decimal::ZERO;
    let mut expense = Decimal::ZERO;

    for entry in entries {
        match entry.kind() {
            TransactionType::Income => income += entry.amount(),
            TransactionType::Expense => expense += entry.amount(),
        }
    }

    Totals {
        income,
        expense,
        balance: income - expense,
    }
}

/// Percentage contribution of each kind to the combined volume, rounded to
/// one decimal place. A zero combined volume yields zero shares rather than
/// a division error.
pub fn shares(totals: &Totals) -> Shares {
    let combined = totals.income + totals.expense;
    if combined.is_zero() {
        return Shares::default();
    }

    Shares {
        income_pct: (totals.income / combined * dec!(100)).round_dp(SHARE_PRECISION),
        expense_pct: (totals.expense / combined * dec!(100)).round_dp(SHARE_PRECISION),
    }
}
