//! Statement building - the rendered view of recent account history

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::Account;

use super::format_money;

/// How many transactions a statement shows when no limit is given
pub const DEFAULT_STATEMENT_LIMIT: usize = 10;

/// The rendered view of an account's recent transactions
///
/// Pure display data: the CLI (or any other surface) prints it without
/// touching the domain again. An empty `lines` means the selected window
/// holds no transactions; the caller is expected to say so explicitly
/// instead of printing a bare empty table.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub account_number: String,
    pub owner: String,
    pub balance: String,
    pub lines: Vec<StatementLine>,
}

/// One history entry prepared for display
#[derive(Debug, Clone, Serialize)]
pub struct StatementLine {
    /// `%d/%m/%Y %H:%M` rendering of the entry time
    pub timestamp: String,
    pub kind: String,
    /// Signed two-decimal amount, `+`-prefixed for credits
    pub amount: String,
    pub balance_after: String,
}

impl Statement {
    /// Build a statement over the most recent `limit` transactions
    ///
    /// The window keeps chronological order: the oldest of the selected
    /// entries comes first. A limit of zero yields an empty window.
    pub fn for_account(account: &Account, limit: usize) -> Self {
        let history = account.history();
        let start = history.len().saturating_sub(limit);

        let lines = history[start..]
            .iter()
            .map(|tx| StatementLine {
                timestamp: tx.timestamp.format("%d/%m/%Y %H:%M").to_string(),
                kind: tx.kind.to_string(),
                amount: format_signed(tx.amount),
                balance_after: format_money(tx.balance_after),
            })
            .collect();

        Self {
            account_number: account.number.clone(),
            owner: account.owner.clone(),
            balance: format_money(account.balance()),
            lines,
        }
    }
}

/// Two-decimal amount with an explicit `+` on credits; debits keep the
/// minus sign the value itself carries
fn format_signed(amount: Decimal) -> String {
    if amount >= Decimal::ZERO {
        format!("+{:.2}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
