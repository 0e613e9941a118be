//! Bank summary - account listing and totals

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Bank;

use super::format_money;

/// Overview of a bank: account count, money held, per-account lines
#[derive(Debug, Serialize)]
pub struct BankSummary {
    pub bank_name: String,
    pub total_accounts: i64,
    pub total_balance: String,
    pub accounts: Vec<AccountSummary>,
}

/// One account line in the bank listing
#[derive(Debug, Serialize)]
pub struct AccountSummary {
    pub number: String,
    pub owner: String,
    pub balance: String,
}

impl BankSummary {
    /// Build the overview, accounts in registration order
    pub fn for_bank(bank: &Bank) -> Self {
        let total_balance: Decimal = bank.accounts().map(|a| a.balance()).sum();

        Self {
            bank_name: bank.name.clone(),
            total_accounts: bank.len() as i64,
            total_balance: format_money(total_balance),
            accounts: bank
                .accounts()
                .map(|a| AccountSummary {
                    number: a.number.clone(),
                    owner: a.owner.clone(),
                    balance: format_money(a.balance()),
                })
                .collect(),
        }
    }
}
