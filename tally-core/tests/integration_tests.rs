//! Integration tests for tally-core
//!
//! These tests drive whole operation sequences against a real Bank and
//! verify the ledger invariants: balances never go negative, history is
//! append-only, rejected operations change nothing, transfers conserve
//! money.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use rust_decimal::Decimal;

use tally_core::{Bank, Error, Statement, TransactionKind, DEFAULT_STATEMENT_LIMIT};

// ============================================================================
// Test Helpers
// ============================================================================

/// Decimal in minor units, e.g. 150000 = 1500.00
fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// Bank with the two demo accounts the CLI seeds at startup
fn demo_bank() -> Bank {
    let mut bank = Bank::new("Tally Bank");
    bank.create_account("1001", "João Silva", money(150000)).unwrap();
    bank.create_account("1002", "Maria Santos", money(80000)).unwrap();
    bank
}

// ============================================================================
// Worked Scenario
// ============================================================================

/// The full walk-through: seed, deposit, failed withdrawal, transfer
#[test]
fn test_demo_scenario() {
    let mut bank = demo_bank();

    // Seeded account carries exactly one Initial Deposit entry
    let account = bank.find_account("1001").unwrap();
    assert_eq!(account.balance(), money(150000));
    assert_eq!(account.history().len(), 1);
    assert_eq!(account.history()[0].kind, TransactionKind::InitialDeposit);
    assert_eq!(account.history()[0].amount, money(150000));

    // Deposit 200.00 -> 1700.00
    let account = bank.find_account_mut("1001").unwrap();
    account.deposit(money(20000)).unwrap();
    assert_eq!(account.balance(), money(170000));

    // Withdraw 2000.00 fails, balance unchanged
    let err = account.withdraw(money(200000)).unwrap_err();
    assert!(matches!(err, Error::InsufficientFunds { .. }));
    assert_eq!(account.balance(), money(170000));

    // Transfer 500.00 to 1002 -> 1200.00 / 1300.00
    bank.transfer("1001", "1002", money(50000)).unwrap();
    let source = bank.find_account("1001").unwrap();
    let target = bank.find_account("1002").unwrap();
    assert_eq!(source.balance(), money(120000));
    assert_eq!(target.balance(), money(130000));

    // One matching entry appended on each side
    let out = source.history().last().unwrap();
    assert_eq!(
        out.kind,
        TransactionKind::TransferOut {
            target: "1002".to_string()
        }
    );
    assert_eq!(out.amount, money(-50000));
    assert_eq!(out.balance_after, money(120000));

    let inc = target.history().last().unwrap();
    assert_eq!(
        inc.kind,
        TransactionKind::TransferIn {
            source: "1001".to_string()
        }
    );
    assert_eq!(inc.amount, money(50000));
    assert_eq!(inc.balance_after, money(130000));
}

// ============================================================================
// Invariants
// ============================================================================

/// Balance stays non-negative through a mixed operation sequence
#[test]
fn test_balance_never_negative() {
    let mut bank = demo_bank();

    let operations: &[(&str, i64)] = &[
        ("withdraw", 150000), // drains 1001 to zero
        ("withdraw", 1),      // rejected
        ("deposit", 2500),
        ("withdraw", 2600), // rejected
        ("withdraw", 2500), // back to zero
    ];

    for (op, cents) in operations {
        let account = bank.find_account_mut("1001").unwrap();
        let result = match *op {
            "deposit" => account.deposit(money(*cents)).map(|_| ()),
            _ => account.withdraw(money(*cents)).map(|_| ()),
        };
        let _ = result; // rejections are expected along the way
        assert!(bank.find_account("1001").unwrap().balance() >= Decimal::ZERO);
    }

    assert_eq!(bank.find_account("1001").unwrap().balance(), Decimal::ZERO);
}

/// Every successful mutation appends exactly one entry snapshotting the
/// post-operation balance
#[test]
fn test_history_snapshots_match_running_balance() {
    let mut bank = demo_bank();
    let account = bank.find_account_mut("1002").unwrap();

    account.deposit(money(12345)).unwrap();
    account.withdraw(money(345)).unwrap();
    account.deposit(money(1)).unwrap();

    let mut running = Decimal::ZERO;
    for tx in account.history() {
        running += tx.amount;
        assert_eq!(tx.balance_after, running);
    }
    assert_eq!(running, account.balance());
}

/// Transfer conserves the total balance across the pair
#[test]
fn test_transfer_conserves_total() {
    let mut bank = demo_bank();
    let total_before: Decimal = bank.accounts().map(|a| a.balance()).sum();

    bank.transfer("1001", "1002", money(77700)).unwrap();
    bank.transfer("1002", "1001", money(123)).unwrap();

    let total_after: Decimal = bank.accounts().map(|a| a.balance()).sum();
    assert_eq!(total_before, total_after);
}

/// Transferring an account's full balance is allowed
#[test]
fn test_transfer_exact_balance() {
    let mut bank = demo_bank();

    bank.transfer("1002", "1001", money(80000)).unwrap();

    assert_eq!(bank.find_account("1002").unwrap().balance(), Decimal::ZERO);
    assert_eq!(bank.find_account("1001").unwrap().balance(), money(230000));
}

// ============================================================================
// Self-Transfer
// ============================================================================

/// Source == target nets to zero balance change with two offsetting
/// history entries
#[test]
fn test_self_transfer_nets_zero_with_two_entries() {
    let mut bank = demo_bank();
    let entries_before = bank.find_account("1001").unwrap().history().len();

    bank.transfer("1001", "1001", money(10000)).unwrap();

    let account = bank.find_account("1001").unwrap();
    assert_eq!(account.balance(), money(150000));
    assert_eq!(account.history().len(), entries_before + 2);

    let debit = &account.history()[entries_before];
    let credit = &account.history()[entries_before + 1];
    assert_eq!(
        debit.kind,
        TransactionKind::TransferOut {
            target: "1001".to_string()
        }
    );
    assert_eq!(
        credit.kind,
        TransactionKind::TransferIn {
            source: "1001".to_string()
        }
    );
    assert_eq!(debit.amount + credit.amount, Decimal::ZERO);
}

/// A self-transfer above the balance is still an overdraft
#[test]
fn test_self_transfer_still_checks_funds() {
    let mut bank = demo_bank();

    let err = bank.transfer("1002", "1002", money(80001)).unwrap_err();

    assert!(matches!(err, Error::InsufficientFunds { .. }));
    let account = bank.find_account("1002").unwrap();
    assert_eq!(account.balance(), money(80000));
    assert_eq!(account.history().len(), 1);
}

// ============================================================================
// Statements
// ============================================================================

/// The statement window keeps the most recent entries in chronological
/// order and respects the limit
#[test]
fn test_statement_over_long_history() {
    let mut bank = demo_bank();
    let account = bank.find_account_mut("1001").unwrap();
    for i in 1..=15i64 {
        account.deposit(money(i * 100)).unwrap();
    }

    let statement = Statement::for_account(account, DEFAULT_STATEMENT_LIMIT);

    assert_eq!(statement.lines.len(), 10);
    // 16 entries total (initial + 15 deposits); the window starts at the
    // 7th deposit (6.00) and ends at the 15th (15.00)
    assert_eq!(statement.lines[0].amount, "+6.00");
    assert_eq!(statement.lines[9].amount, "+15.00");
    assert_eq!(statement.balance, "1620.00");
}

/// Limit larger than history returns everything
#[test]
fn test_statement_limit_above_history_len() {
    let bank = demo_bank();
    let account = bank.find_account("1002").unwrap();

    let statement = Statement::for_account(account, 50);

    assert_eq!(statement.lines.len(), 1);
    assert_eq!(statement.lines[0].kind, "Initial Deposit");
}
