//! Client CLI commands

use clap::Subcommand;

use super::{confirmation_required, parse_amount, parse_status};
use crate::display::{format_client_list, format_currency};
use crate::error::{ContaproError, ContaproResult};
use crate::models::{Client, TaxRegime};
use crate::services::Ledger;

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// List all clients
    List,
    /// Show client details
    Show {
        /// Client name or ID
        client: String,
    },
    /// Register a new client
    Add {
        /// Company name
        name: String,
        /// CNPJ
        #[arg(short, long)]
        tax_id: String,
        /// Tax regime (simples, presumido, real)
        #[arg(short, long, default_value = "simples")]
        regime: String,
        /// Monthly fee
        #[arg(short, long)]
        fee: String,
    },
    /// Edit an existing client
    Edit {
        /// Client name or ID
        client: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        tax_id: Option<String>,
        #[arg(short, long)]
        regime: Option<String>,
        #[arg(short, long)]
        fee: Option<String>,
        /// ATIVO or INATIVO
        #[arg(short, long)]
        status: Option<String>,
        /// Mark or clear the delinquency flag
        #[arg(long)]
        delinquent: Option<bool>,
    },
    /// Delete a client
    Delete {
        /// Client name or ID
        client: String,
        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },
}

fn parse_regime(input: &str) -> ContaproResult<TaxRegime> {
    TaxRegime::parse(input)
        .ok_or_else(|| ContaproError::Validation(format!("Unknown tax regime '{}'", input)))
}

/// Handle a client command
pub fn handle_client_command(ledger: &mut Ledger, cmd: ClientCommands) -> ContaproResult<()> {
    match cmd {
        ClientCommands::List => {
            print!("{}", format_client_list(ledger.clients()));
        }

        ClientCommands::Show { client } => {
            let c = ledger
                .find_client(&client)
                .ok_or_else(|| ContaproError::client_not_found(&client))?;

            println!("Client:     {}", c.name);
            println!("ID:         {}", c.id);
            println!("CNPJ:       {}", c.tax_id);
            println!("Regime:     {}", c.tax_regime);
            println!("Fee:        {}", format_currency(c.monthly_fee));
            println!("Status:     {}", c.status);
            if c.delinquent {
                println!("Delinquent: yes");
            }
        }

        ClientCommands::Add {
            name,
            tax_id,
            regime,
            fee,
        } => {
            let client = Client::new(name, tax_id, parse_regime(&regime)?, parse_amount(&fee)?);
            let added = ledger.add_client(client)?;
            println!("Added client: {} ({})", added.name, added.id);
        }

        ClientCommands::Edit {
            client,
            name,
            tax_id,
            regime,
            fee,
            status,
            delinquent,
        } => {
            let mut c = ledger
                .find_client(&client)
                .cloned()
                .ok_or_else(|| ContaproError::client_not_found(&client))?;

            if let Some(name) = name {
                c.name = name;
            }
            if let Some(tax_id) = tax_id {
                c.tax_id = tax_id;
            }
            if let Some(regime) = regime {
                c.tax_regime = parse_regime(&regime)?;
            }
            if let Some(fee) = fee {
                c.monthly_fee = parse_amount(&fee)?;
            }
            if let Some(status) = status {
                c.status = parse_status(&status)?;
            }
            if let Some(delinquent) = delinquent {
                c.delinquent = delinquent;
            }

            let name = c.name.clone();
            ledger.update_client(c)?;
            println!("Updated client: {}", name);
        }

        ClientCommands::Delete { client, yes } => {
            let c = ledger
                .find_client(&client)
                .ok_or_else(|| ContaproError::client_not_found(&client))?;
            let (id, name) = (c.id, c.name.clone());

            if !yes {
                confirmation_required(&format!("client: {}", name));
                return Ok(());
            }

            ledger.remove_client(id)?;
            println!("Deleted client: {}", name);
        }
    }

    Ok(())
}
