use std::str::FromStr;

use chrono::NaiveDate;
use getset::{CopyGetters, Getters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LedgerError;

const PRECISION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

/// A single recorded income or expense event. Entries are immutable once
/// stored; correcting a mistake is delete-then-re-add.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct Transaction {
    #[getset(get_copy = "pub")]
    id: u64,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    amount: Decimal,
    #[getset(get_copy = "pub")]
    kind: TransactionType,
    #[getset(get_copy = "pub")]
    date: NaiveDate,
}

/// Candidate entry as it comes out of the input form, without an id. The
/// amount is kept as the raw text the user typed and is only parsed when the
/// ledger accepts the draft.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub name: String,
    pub amount: String,
    pub kind: TransactionType,
    pub date: NaiveDate,
}

impl TransactionDraft {
    /// Direction is carried by `kind`, so the amount itself must be a plain
    /// non-negative decimal.
    pub(super) fn into_transaction(self, id: u64) -> Result<Transaction, LedgerError> {
        let amount = Decimal::from_str(self.amount.trim()).map_err(|_| LedgerError::InvalidAmount)?;
        if amount < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        Ok(Transaction {
            id,
            name: self.name,
            amount: amount.round_dp(PRECISION),
            kind: self.kind,
            date: self.date,
        })
    }
}
