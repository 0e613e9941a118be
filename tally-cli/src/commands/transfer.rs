//! Transfer command

use anyhow::Result;
use dialoguer::Input;
use rust_decimal::Decimal;

use tally_core::Bank;

use crate::output;

use super::prompt_account_number;

pub fn run(bank: &mut Bank) -> Result<()> {
    let source = prompt_account_number("Source account number")?;
    let Some(source_account) = bank.find_account(&source) else {
        output::error("Source account not found");
        return Ok(());
    };

    println!("Source owner: {}", source_account.owner);
    println!("Current balance: ${:.2}", source_account.balance());

    let target = prompt_account_number("Target account number")?;
    let Some(target_account) = bank.find_account(&target) else {
        output::error("Target account not found");
        return Ok(());
    };

    println!("Target owner: {}", target_account.owner);

    let amount: Decimal = Input::new()
        .with_prompt("Transfer amount")
        .interact_text()?;

    match bank.transfer(&source, &target, amount) {
        Ok(()) => {
            output::success(&format!(
                "Transfer of ${:.2} to account {} completed",
                amount, target
            ));
        }
        Err(e) => output::error(&e.to_string()),
    }

    Ok(())
}
