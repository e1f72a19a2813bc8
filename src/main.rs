//! `erc` - command-line front end for the ERC private office.

mod cli;
mod logging;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use erc_rs::{ErcClient, Settings};

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(&cli.logpath) {
        eprintln!("erc: cannot set up logging to {}: {e}", cli.logpath.display());
        return ExitCode::FAILURE;
    }
    tracing::info!("start");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("erc: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings_path = match cli.settings {
        Some(path) => path,
        None => Settings::default_path()?,
    };
    let settings = Settings::load(&settings_path)
        .with_context(|| format!("loading {}", settings_path.display()))?;
    let client = ErcClient::new(settings.credentials())?;

    let account_or_default = |account: Option<String>| -> anyhow::Result<String> {
        match account {
            Some(a) => Ok(a),
            None if !settings.account_number.is_empty() => Ok(settings.account_number.clone()),
            None => anyhow::bail!("no account number: pass --account or set AccountNumber"),
        }
    };

    match cli.command {
        Command::Balance { account, date } => {
            let account = account_or_default(account)?;
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let info = client
                .balance(&account, date)
                .await
                .with_context(|| format!("balance for account {account}"))?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{}", cli::render_balance(&info));
            }
        }
        Command::Receipt { account } => {
            let account = account_or_default(account)?;
            let bytes = client
                .receipt(&account)
                .await
                .with_context(|| format!("receipt for account {account}"))?;
            let mut out = std::io::stdout().lock();
            out.write_all(&bytes)?;
            out.flush()?;
        }
        Command::Accounts => {
            let accounts = client.accounts().await.context("account listing")?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&accounts)?);
            } else {
                print!("{}", cli::render_accounts(&accounts));
            }
        }
    }
    Ok(())
}
