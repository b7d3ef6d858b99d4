//! Configuration CLI commands

use clap::Subcommand;

use crate::config::{ContaproPaths, Settings};
use crate::error::ContaproResult;
use crate::storage::PersistencePolicy;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show paths and settings
    Show,
    /// Change settings
    Set {
        /// best-effort or durable
        #[arg(long)]
        persistence: Option<String>,
        #[arg(long)]
        company_name: Option<String>,
        /// Company CNPJ
        #[arg(long)]
        company_tax_id: Option<String>,
        /// COMPE bank code used on CNAB files
        #[arg(long)]
        bank_code: Option<String>,
        #[arg(long)]
        bank_name: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        account: Option<String>,
        /// Sequence number of the next CNAB file
        #[arg(long)]
        next_sequence: Option<u32>,
    },
}

fn print_settings(paths: &ContaproPaths, settings: &Settings) {
    println!("ContaPro Configuration");
    println!("======================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Data directory:    {}", paths.data_dir().display());
    println!("Exports directory: {}", paths.exports_dir().display());
    println!();
    println!("Persistence:       {}", settings.persistence);
    println!("Company:           {} ({})", settings.company.name, settings.company.tax_id);
    println!(
        "CNAB bank:         {} {} ag. {} cc. {}",
        settings.cnab.bank_code, settings.cnab.bank_name, settings.cnab.branch, settings.cnab.account
    );
    println!("Next CNAB file:    {}", settings.cnab.next_sequence);
}

/// Handle a config command
pub fn handle_config_command(
    paths: &ContaproPaths,
    settings: &mut Settings,
    persist_settings: bool,
    cmd: ConfigCommands,
) -> ContaproResult<()> {
    match cmd {
        ConfigCommands::Show => print_settings(paths, settings),

        ConfigCommands::Set {
            persistence,
            company_name,
            company_tax_id,
            bank_code,
            bank_name,
            branch,
            account,
            next_sequence,
        } => {
            if let Some(policy) = persistence {
                settings.persistence = policy.parse::<PersistencePolicy>()?;
            }
            if let Some(name) = company_name {
                settings.company.name = name;
            }
            if let Some(tax_id) = company_tax_id {
                settings.company.tax_id = tax_id;
            }
            if let Some(code) = bank_code {
                settings.cnab.bank_code = code;
            }
            if let Some(name) = bank_name {
                settings.cnab.bank_name = name;
            }
            if let Some(branch) = branch {
                settings.cnab.branch = branch;
            }
            if let Some(account) = account {
                settings.cnab.account = account;
            }
            if let Some(sequence) = next_sequence {
                settings.cnab.next_sequence = sequence;
            }

            if persist_settings {
                settings.save(paths)?;
            } else {
                println!("(ephemeral run: settings not saved)");
            }
            print_settings(paths, settings);
        }
    }

    Ok(())
}
