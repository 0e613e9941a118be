//! Account domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::result::{Error, Result};
use super::transaction::{Transaction, TransactionKind};

/// A numbered balance holder with transaction history
///
/// `balance` and `history` are private: every mutation goes through the
/// operation methods, which keep the balance non-negative and the history
/// append-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub number: String,
    pub owner: String,
    balance: Decimal,
    history: Vec<Transaction>,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account
    ///
    /// A positive initial balance records one synthetic "Initial Deposit"
    /// transaction. A negative initial balance is rejected; zero is fine.
    pub fn new(
        number: impl Into<String>,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<Self> {
        if initial_balance < Decimal::ZERO {
            return Err(Error::InvalidAmount(initial_balance));
        }

        let mut account = Self {
            number: number.into(),
            owner: owner.into(),
            balance: Decimal::ZERO,
            history: Vec::new(),
            created_at: Utc::now(),
        };

        if initial_balance > Decimal::ZERO {
            account.balance = initial_balance;
            account.record(TransactionKind::InitialDeposit, initial_balance);
        }

        Ok(account)
    }

    /// Current balance; no state change
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Full transaction history in chronological order
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Add money to the account
    pub fn deposit(&mut self, amount: Decimal) -> Result<&Transaction> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }

        self.balance += amount;
        debug!(account = %self.number, %amount, "deposit recorded");
        Ok(self.record(TransactionKind::Deposit, amount))
    }

    /// Take money out of the account
    ///
    /// Withdrawing the exact balance is allowed; anything above it is
    /// rejected without touching balance or history.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<&Transaction> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        debug!(account = %self.number, %amount, "withdrawal recorded");
        Ok(self.record(TransactionKind::Withdrawal, -amount))
    }

    /// Debit side of a transfer; checks funds, labels the entry with the
    /// target account number
    pub(crate) fn transfer_out(&mut self, target: &str, amount: Decimal) -> Result<()> {
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        debug!(account = %self.number, target, %amount, "transfer debit recorded");
        self.record(
            TransactionKind::TransferOut {
                target: target.to_string(),
            },
            -amount,
        );
        Ok(())
    }

    /// Credit side of a transfer; labels the entry with the source account
    /// number
    pub(crate) fn transfer_in(&mut self, source: &str, amount: Decimal) {
        self.balance += amount;
        debug!(account = %self.number, source, %amount, "transfer credit recorded");
        self.record(
            TransactionKind::TransferIn {
                source: source.to_string(),
            },
            amount,
        );
    }

    /// Append a history entry snapshotting the post-operation balance
    fn record(&mut self, kind: TransactionKind, amount: Decimal) -> &Transaction {
        self.history
            .push(Transaction::new(kind, amount, self.balance));
        self.history.last().expect("history is non-empty after push")
    }
}
