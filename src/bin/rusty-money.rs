//! rusty-money CLI - evaluate scenario files
//!
//! ## Example Usage
//!
//! ```bash
//! # Total value of the scenario's holdings in USD
//! rusty-money evaluate scenario.toml --to USD
//!
//! # Convert a single amount with the scenario's bank
//! rusty-money convert scenario.toml --amount 10 --from USD --to KRW
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use rusty_money::config::Scenario;
use rusty_money::usecases::{
    EvaluatePortfolio, EvaluatePortfolioUseCase, InMemoryBankRepository,
    InMemoryPortfolioRepository, UseCase,
};
use rusty_money::{Currency, Money};
use std::path::{Path, PathBuf};
use std::process;

/// rusty-money: multi-currency portfolio evaluation
#[derive(Parser)]
#[command(name = "rusty-money")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Evaluate multi-currency portfolios against a pivot-currency bank", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every holding of a scenario in one currency
    Evaluate {
        /// Scenario file (.toml or .json)
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,

        /// Target currency code
        #[arg(short, long)]
        to: Currency,
    },

    /// Convert a single amount using the scenario's bank
    Convert {
        /// Scenario file (.toml or .json)
        #[arg(value_name = "SCENARIO")]
        scenario: PathBuf,

        #[arg(short, long)]
        amount: f64,

        /// Source currency code
        #[arg(short, long)]
        from: Currency,

        /// Target currency code
        #[arg(short, long)]
        to: Currency,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate { scenario, to } => evaluate(&scenario, to, cli.json),
        Commands::Convert {
            scenario,
            amount,
            from,
            to,
        } => convert(&scenario, Money::new(amount, from), to, cli.json),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

fn load(path: &Path) -> anyhow::Result<Scenario> {
    let scenario = Scenario::load(path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    log::info!(
        "Loaded scenario with pivot {} and {} holding(s)",
        scenario.bank.pivot_currency,
        scenario.holdings.len()
    );
    Ok(scenario)
}

fn evaluate(path: &Path, to: Currency, json: bool) -> anyhow::Result<()> {
    let scenario = load(path)?;
    let banks = InMemoryBankRepository::with_bank(scenario.bank.build()?);
    let portfolios = InMemoryPortfolioRepository::with_portfolio(scenario.portfolio());

    let result = EvaluatePortfolioUseCase::new(&banks, &portfolios)
        .invoke(EvaluatePortfolio { currency: to })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} {}",
            "Total:".green().bold(),
            Money::new(result.amount, result.currency)
        );
    }
    Ok(())
}

fn convert(path: &Path, money: Money, to: Currency, json: bool) -> anyhow::Result<()> {
    let scenario = load(path)?;
    let bank = scenario.bank.build()?;
    let converted = bank.convert(money, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&converted)?);
    } else {
        println!("{} = {}", money, converted.to_string().cyan());
    }
    Ok(())
}
