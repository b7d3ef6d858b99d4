//! Bank account CLI commands

use clap::Subcommand;

use super::{confirmation_required, parse_amount};
use crate::display::{format_bank_list, format_currency};
use crate::error::{ContaproError, ContaproResult};
use crate::models::Bank;
use crate::services::Ledger;

/// Bank subcommands
#[derive(Subcommand)]
pub enum BankCommands {
    /// List bank accounts and the total balance
    List,
    /// Register a bank account
    Add {
        /// Institution name
        name: String,
        /// Opening balance
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Agência
        #[arg(long, default_value = "")]
        branch: String,
        /// Account number
        #[arg(long, default_value = "")]
        account: String,
    },
    /// Edit a bank account
    Edit {
        /// Bank name or ID
        bank: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        account: Option<String>,
        /// Overwrite the balance (manual correction)
        #[arg(short, long)]
        balance: Option<String>,
    },
    /// Delete a bank account
    ///
    /// Receivables and payables keep pointing at it; settling them later
    /// leaves every balance untouched.
    Delete {
        /// Bank name or ID
        bank: String,
        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a bank command
pub fn handle_bank_command(ledger: &mut Ledger, cmd: BankCommands) -> ContaproResult<()> {
    match cmd {
        BankCommands::List => {
            print!("{}", format_bank_list(ledger.banks()));
        }

        BankCommands::Add {
            name,
            balance,
            branch,
            account,
        } => {
            let bank = Bank::new(name, parse_amount(&balance)?).with_account(branch, account);
            let added = ledger.add_bank(bank)?;
            println!(
                "Added bank: {} ({}) with balance {}",
                added,
                added.id,
                format_currency(added.balance)
            );
        }

        BankCommands::Edit {
            bank,
            name,
            branch,
            account,
            balance,
        } => {
            let mut b = ledger
                .find_bank(&bank)
                .cloned()
                .ok_or_else(|| ContaproError::bank_not_found(&bank))?;

            if let Some(name) = name {
                b.name = name;
            }
            if let Some(branch) = branch {
                b.branch = branch;
            }
            if let Some(account) = account {
                b.account = account;
            }
            if let Some(balance) = balance {
                b.balance = parse_amount(&balance)?;
            }

            let label = b.to_string();
            ledger.update_bank(b)?;
            println!("Updated bank: {}", label);
        }

        BankCommands::Delete { bank, yes } => {
            let b = ledger
                .find_bank(&bank)
                .ok_or_else(|| ContaproError::bank_not_found(&bank))?;
            let (id, name) = (b.id, b.name.clone());

            if !yes {
                confirmation_required(&format!("bank: {}", name));
                return Ok(());
            }

            ledger.remove_bank(id)?;
            println!("Deleted bank: {}", name);
        }
    }

    Ok(())
}
