//! Main menu loop

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;

use tally_core::Bank;

use crate::commands;

const MENU_ITEMS: &[&str] = &[
    "Create account",
    "Deposit",
    "Withdraw",
    "Transfer",
    "Check balance",
    "Statement",
    "List accounts",
    "Quit",
];

/// Run the interactive session until the user quits
///
/// One operation is gathered, executed, and rendered per iteration.
/// Domain rejections are reported and return to the menu; only prompt
/// I/O failures (lost terminal) end the session with an error.
pub fn run(bank: &mut Bank) -> Result<()> {
    println!();
    println!("{}", format!("=== {} ===", bank.name).bold());

    loop {
        println!();
        let choice = match Select::new()
            .with_prompt("Choose an operation")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()
        {
            Ok(Some(index)) => index,
            // Esc or Ctrl-C ends the session
            Ok(None) | Err(_) => break,
        };

        let result = match choice {
            0 => commands::create::run(bank),
            1 => commands::deposit::run(bank),
            2 => commands::withdraw::run(bank),
            3 => commands::transfer::run(bank),
            4 => commands::balance::run(bank),
            5 => commands::statement::run(bank),
            6 => commands::list::run(bank),
            _ => break,
        };

        // A command only errors when prompt I/O fails (lost terminal)
        result?;
    }

    println!("Goodbye!");
    Ok(())
}
