//! Bank domain model - the registry that owns all accounts

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::account::Account;
use super::result::{Error, Result};

/// The registry and owner of all accounts
///
/// Accounts are keyed by number; `order` remembers registration order so
/// listing walks accounts in the sequence they were created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    pub name: String,
    accounts: HashMap<String, Account>,
    order: Vec<String>,
}

impl Bank {
    /// Create an empty bank
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            accounts: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Create and register a new account
    ///
    /// Rejects a duplicate number without touching the existing account,
    /// and a negative initial balance without registering anything.
    pub fn create_account(
        &mut self,
        number: impl Into<String>,
        owner: impl Into<String>,
        initial_balance: Decimal,
    ) -> Result<&Account> {
        let number = number.into();
        if self.accounts.contains_key(&number) {
            return Err(Error::DuplicateAccount(number));
        }

        let account = Account::new(number.clone(), owner, initial_balance)?;
        debug!(account = %number, %initial_balance, "account created");

        self.order.push(number.clone());
        self.accounts.insert(number.clone(), account);
        Ok(&self.accounts[&number])
    }

    /// Look up an account by number
    pub fn find_account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    /// Look up an account by number for mutation
    pub fn find_account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Move money between two accounts
    ///
    /// Both sides are validated before anything changes: a rejection
    /// leaves both balances and both histories untouched. The debit and
    /// credit are applied sequentially, so transferring to the same
    /// account nets to zero balance change while appending two offsetting
    /// history entries.
    pub fn transfer(&mut self, source: &str, target: &str, amount: Decimal) -> Result<()> {
        if !self.accounts.contains_key(source) {
            return Err(Error::AccountNotFound(source.to_string()));
        }
        if !self.accounts.contains_key(target) {
            return Err(Error::AccountNotFound(target.to_string()));
        }
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }

        let source_account = self
            .accounts
            .get_mut(source)
            .ok_or_else(|| Error::AccountNotFound(source.to_string()))?;
        source_account.transfer_out(target, amount)?;

        let target_account = self
            .accounts
            .get_mut(target)
            .ok_or_else(|| Error::AccountNotFound(target.to_string()))?;
        target_account.transfer_in(source, amount);

        debug!(source, target, %amount, "transfer completed");
        Ok(())
    }

    /// All accounts in registration order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.order.iter().filter_map(|number| self.accounts.get(number))
    }

    /// Number of registered accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True if no accounts are registered
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
