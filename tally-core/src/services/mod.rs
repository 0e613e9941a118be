//! Service layer - view building over the domain
//!
//! Services turn domain state into serializable display data. The CLI
//! renders these views; the domain itself never formats or prints.

mod statement;
mod summary;

pub use statement::{Statement, StatementLine, DEFAULT_STATEMENT_LIMIT};
pub use summary::{AccountSummary, BankSummary};

use rust_decimal::Decimal;

/// Two-decimal rendering shared by every view
pub(crate) fn format_money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
