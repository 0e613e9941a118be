//! List accounts command

use anyhow::Result;
use colored::Colorize;

use tally_core::{Bank, BankSummary};

use crate::output;

pub fn run(bank: &mut Bank) -> Result<()> {
    let summary = BankSummary::for_bank(bank);

    println!();
    println!("{}", format!("Accounts at {}", summary.bank_name).bold());

    if summary.accounts.is_empty() {
        output::info("No accounts registered.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Number", "Owner", "Balance"]);
    for account in &summary.accounts {
        table.add_row(vec![
            account.number.clone(),
            account.owner.clone(),
            format!("${}", account.balance),
        ]);
    }
    println!("{}", table);
    println!(
        "{} accounts, ${} held in total",
        summary.total_accounts, summary.total_balance
    );

    Ok(())
}
