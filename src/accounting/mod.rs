use thiserror::Error;

pub mod ledger;
pub mod summary;
pub mod transactions;


#[derive(Debug, PartialEq, Error)]
pub enum LedgerError {
    #[error("invalid amount")]
    InvalidAmount,
}
