//! Tally CLI - An interactive bank ledger in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use tally_core::Bank;

mod commands;
mod menu;
mod output;

/// Tally - an interactive bank ledger simulator
#[derive(Parser)]
#[command(name = "tally", version, about, long_about = None)]
struct Cli {
    /// Display name of the bank
    #[arg(long, env = "TALLY_BANK_NAME", default_value = "Tally Bank")]
    bank_name: String,

    /// Start with an empty bank instead of the demo accounts
    #[arg(long, env = "TALLY_NO_SEED")]
    no_seed: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Log to stderr only; filter via TALLY_LOG (default: warnings)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TALLY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }

    let mut bank = Bank::new(&cli.bank_name);
    if !cli.no_seed {
        seed_demo_accounts(&mut bank)?;
    }

    tracing::debug!(bank = %bank.name, accounts = bank.len(), "session started");
    menu::run(&mut bank)
}

/// Register the two demonstration accounts the session starts with
fn seed_demo_accounts(bank: &mut Bank) -> Result<()> {
    bank.create_account("1001", "João Silva", Decimal::new(150000, 2))?;
    bank.create_account("1002", "Maria Santos", Decimal::new(80000, 2))?;

    output::info("Started with 2 demo accounts:");
    println!("  - Account 1001: João Silva ($1500.00)");
    println!("  - Account 1002: Maria Santos ($800.00)");
    Ok(())
}
