//! Command-line arguments and text rendering for the `erc` binary.

use std::fmt::Write as _;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use erc_rs::{Account, BalanceInfo, Details};

/// Query the ERC private office: balance, receipts and accounts.
#[derive(Parser, Debug)]
#[command(name = "erc", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Settings file (default: ~/.erc/settings.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub settings: Option<PathBuf>,

    /// Path to write logs
    #[arg(long, value_name = "PATH", default_value = "erc.log", global = true)]
    pub logpath: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Balance for the month ending at --date (default: today)
    Balance {
        /// Account number (default: AccountNumber from settings)
        #[arg(long)]
        account: Option<String>,
        /// Reference date, YYYY-MM-DD
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Write the current receipt to stdout
    Receipt {
        /// Account number (default: AccountNumber from settings)
        #[arg(long)]
        account: Option<String>,
    },
    /// List accounts attached to the login
    Accounts,
}

fn render_details(out: &mut String, label: &str, d: &Details) {
    let _ = writeln!(
        out,
        "{label:<12}{:>12.2}{:>12.2}{:>12.2}",
        d.total, d.company_part, d.repair_part
    );
}

pub fn render_balance(info: &BalanceInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Period: {}", info.month);
    let _ = writeln!(out, "{:<12}{:>12}{:>12}{:>12}", "", "total", "company", "repair");
    render_details(&mut out, "credit", &info.credit);
    render_details(&mut out, "debit", &info.debit);
    render_details(&mut out, "at the end", &info.at_the_end);
    out
}

pub fn render_accounts(accounts: &[Account]) -> String {
    accounts
        .iter()
        .map(|a| format!("{}\t{}\n", a.number, a.address))
        .collect()
}
