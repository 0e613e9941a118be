//! Deposit command

use anyhow::Result;
use dialoguer::Input;
use rust_decimal::Decimal;

use tally_core::Bank;

use crate::output;

use super::prompt_account_number;

pub fn run(bank: &mut Bank) -> Result<()> {
    let number = prompt_account_number("Account number")?;
    let Some(account) = bank.find_account_mut(&number) else {
        output::error("Account not found");
        return Ok(());
    };

    println!("Owner: {}", account.owner);
    println!("Current balance: ${:.2}", account.balance());

    let amount: Decimal = Input::new().with_prompt("Deposit amount").interact_text()?;

    match account.deposit(amount) {
        Ok(_) => {
            output::success(&format!("Deposit of ${:.2} completed", amount));
            println!("New balance: ${:.2}", account.balance());
        }
        Err(e) => output::error(&e.to_string()),
    }

    Ok(())
}
