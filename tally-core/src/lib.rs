//! Tally Core - Business logic for the bank ledger simulator
//!
//! This crate implements the core domain logic:
//!
//! - **domain**: Core business entities (Bank, Account, Transaction)
//! - **services**: View building (statements, bank summaries)
//!
//! All state lives in memory and is owned by the caller: the CLI driver
//! creates one [`Bank`] at startup and passes it by reference into every
//! operation. The core performs no console I/O and no parsing - it takes
//! parsed values and returns data or a typed error.

pub mod domain;
pub mod services;

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{Account, Bank, Transaction, TransactionKind};
pub use services::{AccountSummary, BankSummary, Statement, StatementLine, DEFAULT_STATEMENT_LIMIT};
