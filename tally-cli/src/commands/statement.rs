//! Statement command

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use tally_core::{Bank, Statement, DEFAULT_STATEMENT_LIMIT};

use crate::output;

use super::prompt_account_number;

pub fn run(bank: &mut Bank) -> Result<()> {
    let number = prompt_account_number("Account number")?;
    let Some(account) = bank.find_account(&number) else {
        output::error("Account not found");
        return Ok(());
    };

    let limit: usize = Input::new()
        .with_prompt("How many transactions")
        .default(DEFAULT_STATEMENT_LIMIT)
        .interact_text()?;

    let statement = Statement::for_account(account, limit);

    println!();
    println!(
        "{}",
        format!("Statement - Account {}", statement.account_number).bold()
    );
    println!("Owner: {}", statement.owner);
    println!("Current balance: ${}", statement.balance);

    if statement.lines.is_empty() {
        output::info("No transactions found.");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Description", "Amount", "Balance"]);
    for line in &statement.lines {
        // line.amount is always sign-prefixed; currency goes after the sign
        let (sign, value) = line.amount.split_at(1);
        table.add_row(vec![
            line.timestamp.clone(),
            line.kind.clone(),
            format!("{}${}", sign, value),
            format!("${}", line.balance_after),
        ]);
    }
    println!("{}", table);

    Ok(())
}
