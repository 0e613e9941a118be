//! Balance inquiry command

use anyhow::Result;

use tally_core::Bank;

use crate::output;

use super::prompt_account_number;

pub fn run(bank: &mut Bank) -> Result<()> {
    let number = prompt_account_number("Account number")?;
    let Some(account) = bank.find_account(&number) else {
        output::error("Account not found");
        return Ok(());
    };

    println!("Owner: {}", account.owner);
    println!("Current balance: ${:.2}", account.balance());

    Ok(())
}
