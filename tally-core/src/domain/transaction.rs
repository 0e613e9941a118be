//! Transaction domain model

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of balance-affecting event a transaction records
///
/// Transfers carry the counterparty account number so the rendered label
/// can name the other side of the movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    TransferOut { target: String },
    TransferIn { source: String },
    InitialDeposit,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
            TransactionKind::TransferOut { target } => write!(f, "Transfer to {}", target),
            TransactionKind::TransferIn { source } => write!(f, "Transfer from {}", source),
            TransactionKind::InitialDeposit => write!(f, "Initial Deposit"),
        }
    }
}

/// A single entry in an account's history
///
/// Owned exclusively by the account it was recorded on. The amount is
/// signed: positive for credits, negative for debits. `balance_after` is
/// the account balance immediately after this transaction was applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
}

impl Transaction {
    /// Record a new transaction at the current time
    pub fn new(kind: TransactionKind, amount: Decimal, balance_after: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind,
            amount,
            balance_after,
        }
    }

    /// True if this transaction credited the account
    pub fn is_credit(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}
