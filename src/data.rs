use std::fs::File;

use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::accounting::ledger::Ledger;
use crate::accounting::summary::{self, Shares, Totals};
use crate::accounting::transactions::{Transaction, TransactionDraft, TransactionType};

/// One row of the input file. The amount stays in the raw form the user
/// typed so the ledger can decide whether it parses.
#[derive(Debug, Deserialize)]
pub struct EntryRecord {
    pub name: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    pub date: NaiveDate,
}

impl From<EntryRecord> for TransactionDraft {
    fn from(record: EntryRecord) -> Self {
        TransactionDraft {
            name: record.name,
            amount: record.amount,
            kind: record.type_,
            date: record.date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct EntryRow {
    pub id: u64,
    pub name: String,
    pub amount: Decimal,
    #[serde(rename = "type")]
    pub type_: TransactionType,
    pub date: NaiveDate,
}

impl From<&Transaction> for EntryRow {
    fn from(transaction: &Transaction) -> Self {
        EntryRow {
            id: transaction.id(),
            name: transaction.name().clone(),
            amount: transaction.amount(),
            type_: transaction.kind(),
            date: transaction.date(),
        }
    }
}

/// The row a summary or chart view consumes: totals plus the percentage
/// split between income and expense.
#[derive(Debug, Serialize)]
pub struct SummaryRecord {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub income_pct: Decimal,
    pub expense_pct: Decimal,
}

impl From<(&Totals, &Shares)> for SummaryRecord {
    fn from((totals, shares): (&Totals, &Shares)) -> Self {
        SummaryRecord {
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance,
            income_pct: shares.income_pct,
            expense_pct: shares.expense_pct,
        }
    }
}

pub fn process_csv(file_path: &str, ledger: &mut Ledger) -> Result<()> {
    let file = File::open(file_path)?;
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(file);

    for record in csv_reader.deserialize::<EntryRecord>() {
        match record {
            Ok(entry) => {
                // A bad row never aborts the run, it is logged and skipped.
                if let Err(err) = ledger.add(entry.into()) {
                    debug!("rejected entry, err={}", err);
                }
            },
            Err(err) => debug!("failed to deserialize record, err={}", err),
        }
    }

    Ok(())
}

pub fn export_csv(ledger: &Ledger) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(std::io::stdout());
    for entry in ledger.entries() {
        let row: EntryRow = entry.into();
        csv_writer.serialize(row)?;
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn export_summary_csv(ledger: &Ledger) -> Result<()> {
    let totals = summary::totals(ledger.entries());
    let shares = summary::shares(&totals);

    let mut csv_writer = csv::WriterBuilder::new().from_writer(std::io::stdout());
    csv_writer.serialize(SummaryRecord::from((&totals, &shares)))?;
    csv_writer.flush()?;

    Ok(())
}
