//! Menu command implementations

pub mod balance;
pub mod create;
pub mod deposit;
pub mod list;
pub mod statement;
pub mod transfer;
pub mod withdraw;

use anyhow::Result;
use dialoguer::Input;

/// Prompt for an account number
pub fn prompt_account_number(prompt: &str) -> Result<String> {
    let number: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(number.trim().to_string())
}
