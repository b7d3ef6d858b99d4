//! Payable CLI commands

use clap::Subcommand;

use super::receivable::{parse_document, report_settlement};
use super::{confirmation_required, parse_amount, parse_date};
use crate::display::{format_currency, format_date, format_payable_list};
use crate::error::{ContaproError, ContaproResult};
use crate::models::{Payable, PayableStatus};
use crate::services::{Ledger, PaymentKind};

/// Payable subcommands
#[derive(Subcommand)]
pub enum PayableCommands {
    /// List payables
    List {
        /// Only show this status (PENDENTE, PAGO, ATRASADO)
        #[arg(short, long)]
        status: Option<String>,
        /// Only show this cost center
        #[arg(long)]
        cost_center: Option<String>,
    },
    /// Record a bill
    Add {
        /// Supplier name; a registered supplier's name and category are reused
        supplier: String,
        /// Amount
        #[arg(short, long)]
        amount: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Cost center name or ID
        #[arg(long, default_value = "Administrativo")]
        cost_center: String,
        /// Expense category, defaults to the supplier's
        #[arg(short, long)]
        category: Option<String>,
        /// Bank the bill is paid from
        #[arg(short, long)]
        bank: Option<String>,
        /// Boleto, Pix or Debito
        #[arg(long)]
        document: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Mark a payable as paid and debit its bank
    Pay {
        /// Payable ID
        payable: String,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a payable
    Delete {
        /// Payable ID
        payable: String,
        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle a payable command
pub fn handle_payable_command(ledger: &mut Ledger, cmd: PayableCommands) -> ContaproResult<()> {
    match cmd {
        PayableCommands::List { status, cost_center } => {
            let status = match status {
                Some(s) => Some(PayableStatus::parse(&s).ok_or_else(|| {
                    ContaproError::Validation(format!("Unknown payable status '{}'", s))
                })?),
                None => None,
            };
            let cost_center = match cost_center {
                Some(c) => Some(
                    ledger
                        .find_cost_center(&c)
                        .map(|cc| cc.id)
                        .ok_or_else(|| ContaproError::NotFound {
                            entity_type: "Cost center",
                            identifier: c.clone(),
                        })?,
                ),
                None => None,
            };

            let payables: Vec<Payable> = ledger
                .payables()
                .iter()
                .filter(|p| status.map_or(true, |s| p.status == s))
                .filter(|p| cost_center.map_or(true, |id| p.cost_center_id == id))
                .cloned()
                .collect();
            print!("{}", format_payable_list(&payables));
        }

        PayableCommands::Add {
            supplier,
            amount,
            due,
            cost_center,
            category,
            bank,
            document,
            description,
        } => {
            let (supplier_name, default_category) = match ledger.find_supplier(&supplier) {
                Some(s) => (s.name.clone(), s.category.clone()),
                None => (supplier, String::new()),
            };
            let cc = ledger
                .find_cost_center(&cost_center)
                .cloned()
                .ok_or_else(|| ContaproError::NotFound {
                    entity_type: "Cost center",
                    identifier: cost_center.clone(),
                })?;

            let mut payable = Payable::new(
                supplier_name,
                category.unwrap_or(default_category),
                &cc,
                parse_date(&due)?,
                parse_amount(&amount)?,
            );
            if let Some(bank) = bank {
                let b = ledger
                    .find_bank(&bank)
                    .ok_or_else(|| ContaproError::bank_not_found(&bank))?;
                payable = payable.with_bank(b.id);
            }
            if let Some(document) = document {
                payable = payable.with_document_type(parse_document(&document)?);
            }
            if let Some(description) = description {
                payable = payable.with_description(description);
            }

            let added = ledger.add_payable(payable)?;
            println!(
                "Added payable {} to {}: {} due {}",
                added.id,
                added.supplier,
                format_currency(added.amount),
                format_date(Some(added.due_date))
            );
        }

        PayableCommands::Pay { payable, date } => {
            let settlement = match date {
                Some(date) => ledger.mark_as_paid_on(PaymentKind::Payable, &payable, parse_date(&date)?)?,
                None => ledger.mark_as_paid(PaymentKind::Payable, &payable)?,
            };
            report_settlement(ledger, PaymentKind::Payable, &payable, settlement);
        }

        PayableCommands::Delete { payable, yes } => {
            let p = ledger
                .find_payable(&payable)
                .ok_or_else(|| ContaproError::payable_not_found(&payable))?;
            let (id, label) = (p.id, format!("payable {} ({})", p.id, p.supplier));

            if !yes {
                confirmation_required(&label);
                return Ok(());
            }

            ledger.remove_payable(id)?;
            println!("Deleted {}", label);
        }
    }

    Ok(())
}
