//! Create account command

use anyhow::Result;
use dialoguer::Input;
use rust_decimal::Decimal;

use tally_core::Bank;

use crate::output;

use super::prompt_account_number;

pub fn run(bank: &mut Bank) -> Result<()> {
    let number = prompt_account_number("Account number")?;
    if number.is_empty() {
        output::error("Account number cannot be empty");
        return Ok(());
    }

    let owner: String = Input::new().with_prompt("Owner name").interact_text()?;
    if owner.trim().is_empty() {
        output::error("Owner name cannot be empty");
        return Ok(());
    }

    let initial_balance: Decimal = Input::new()
        .with_prompt("Initial balance")
        .default(Decimal::ZERO)
        .interact_text()?;

    match bank.create_account(&number, owner.trim(), initial_balance) {
        Ok(account) => {
            output::success(&format!(
                "Account {} created for {}",
                account.number, account.owner
            ));
        }
        Err(e) => output::error(&e.to_string()),
    }

    Ok(())
}
