//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod account;
mod bank;
pub mod result;
mod transaction;

pub use account::Account;
pub use bank::Bank;
pub use transaction::{Transaction, TransactionKind};
