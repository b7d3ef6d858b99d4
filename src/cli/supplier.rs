//! Supplier CLI commands

use clap::Subcommand;

use super::{confirmation_required, parse_status};
use crate::display::format_supplier_list;
use crate::error::{ContaproError, ContaproResult};
use crate::models::Supplier;
use crate::services::Ledger;

/// Supplier subcommands
#[derive(Subcommand)]
pub enum SupplierCommands {
    /// List all suppliers
    List,
    /// Register a new supplier
    Add {
        /// Supplier name
        name: String,
        /// Category label (e.g. Software)
        #[arg(short, long, default_value = "")]
        category: String,
        /// CNPJ
        #[arg(short, long)]
        tax_id: Option<String>,
        /// Contact e-mail or phone
        #[arg(long)]
        contact: Option<String>,
    },
    /// Edit an existing supplier
    Edit {
        /// Supplier name or ID
        supplier: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        tax_id: Option<String>,
        #[arg(long)]
        contact: Option<String>,
        /// ATIVO or INATIVO
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Delete a supplier
    Delete {
        /// Supplier name or ID
        supplier: String,
        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a supplier command
pub fn handle_supplier_command(ledger: &mut Ledger, cmd: SupplierCommands) -> ContaproResult<()> {
    match cmd {
        SupplierCommands::List => {
            print!("{}", format_supplier_list(ledger.suppliers()));
        }

        SupplierCommands::Add {
            name,
            category,
            tax_id,
            contact,
        } => {
            let mut supplier = Supplier::new(name, category);
            supplier.tax_id = tax_id.unwrap_or_default();
            supplier.contact = contact.unwrap_or_default();

            let added = ledger.add_supplier(supplier)?;
            println!("Added supplier: {} ({})", added.name, added.id);
        }

        SupplierCommands::Edit {
            supplier,
            name,
            category,
            tax_id,
            contact,
            status,
        } => {
            let mut s = ledger
                .find_supplier(&supplier)
                .cloned()
                .ok_or_else(|| ContaproError::supplier_not_found(&supplier))?;

            if let Some(name) = name {
                s.name = name;
            }
            if let Some(category) = category {
                s.category = category;
            }
            if let Some(tax_id) = tax_id {
                s.tax_id = tax_id;
            }
            if let Some(contact) = contact {
                s.contact = contact;
            }
            if let Some(status) = status {
                s.status = parse_status(&status)?;
            }

            let name = s.name.clone();
            ledger.update_supplier(s)?;
            println!("Updated supplier: {}", name);
        }

        SupplierCommands::Delete { supplier, yes } => {
            let s = ledger
                .find_supplier(&supplier)
                .ok_or_else(|| ContaproError::supplier_not_found(&supplier))?;
            let (id, name) = (s.id, s.name.clone());

            if !yes {
                confirmation_required(&format!("supplier: {}", name));
                return Ok(());
            }

            ledger.remove_supplier(id)?;
            println!("Deleted supplier: {}", name);
        }
    }

    Ok(())
}
