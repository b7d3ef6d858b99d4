//! Receivable CLI commands

use clap::Subcommand;

use super::{confirmation_required, parse_amount, parse_date};
use crate::display::{format_currency, format_date, format_receivable_list};
use crate::error::{ContaproError, ContaproResult};
use crate::models::{AccrualPeriod, DocumentType, Receivable, ReceivableStatus};
use crate::services::{Ledger, PaymentKind, Settlement};

/// Receivable subcommands
#[derive(Subcommand)]
pub enum ReceivableCommands {
    /// List receivables
    List {
        /// Only show this status (PENDENTE, PAGO, ATRASADO, PARCIAL)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show receivable details
    Show {
        /// Receivable ID
        receivable: String,
    },
    /// Charge a client
    Add {
        /// Client name or ID
        client: String,
        /// Amount
        #[arg(short, long)]
        amount: String,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: String,
        /// Accrual period (YYYY-MM), defaults to the due date's month
        #[arg(short, long)]
        period: Option<String>,
        /// Bank the payment will land in
        #[arg(short, long)]
        bank: Option<String>,
        /// Boleto, Pix or Debito
        #[arg(long)]
        document: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Mark a receivable as paid and credit its bank
    Pay {
        /// Receivable ID
        receivable: String,
        /// Payment date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a receivable
    Delete {
        /// Receivable ID
        receivable: String,
        /// Confirm deletion
        #[arg(short, long)]
        yes: bool,
    },
}

pub(crate) fn parse_document(input: &str) -> ContaproResult<DocumentType> {
    DocumentType::parse(input)
        .ok_or_else(|| ContaproError::Validation(format!("Unknown document type '{}'", input)))
}

/// Print the outcome of a settlement
pub(crate) fn report_settlement(ledger: &Ledger, kind: PaymentKind, reference: &str, settlement: Settlement) {
    if !settlement.newly_paid {
        println!(
            "{} {} was already paid on {}",
            kind,
            reference,
            format_date(settlement.paid_on)
        );
        return;
    }

    println!("Marked {} {} as paid on {}", kind, reference, format_date(settlement.paid_on));
    if let Some((bank_id, delta)) = settlement.bank_adjustment {
        if let Some(bank) = ledger.banks().iter().find(|b| b.id == bank_id) {
            println!(
                "{}: {} (new balance {})",
                bank.name,
                format_currency(delta),
                format_currency(bank.balance)
            );
        }
    }
}

/// Handle a receivable command
pub fn handle_receivable_command(ledger: &mut Ledger, cmd: ReceivableCommands) -> ContaproResult<()> {
    match cmd {
        ReceivableCommands::List { status } => {
            let filter = match status {
                Some(s) => Some(ReceivableStatus::parse(&s).ok_or_else(|| {
                    ContaproError::Validation(format!("Unknown receivable status '{}'", s))
                })?),
                None => None,
            };

            let receivables: Vec<Receivable> = ledger
                .receivables()
                .iter()
                .filter(|r| filter.map_or(true, |status| r.status == status))
                .cloned()
                .collect();
            print!("{}", format_receivable_list(&receivables));
        }

        ReceivableCommands::Show { receivable } => {
            let r = ledger
                .find_receivable(&receivable)
                .ok_or_else(|| ContaproError::receivable_not_found(&receivable))?;

            println!("Receivable: {}", r.id);
            println!("Client:     {}", r.client_name);
            println!("Period:     {}", r.period);
            println!("Due:        {}", format_date(Some(r.due_date)));
            println!("Amount:     {}", format_currency(r.amount));
            println!("Status:     {}", r.status);
            println!("Paid on:    {}", format_date(r.paid_on));
            if let Some(bank_id) = r.bank_id {
                let bank = ledger
                    .banks()
                    .iter()
                    .find(|b| b.id == bank_id)
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "(deleted)".to_string());
                println!("Bank:       {}", bank);
            }
            if let Some(document) = r.document_type {
                println!("Document:   {}", document);
            }
            if let Some(description) = &r.description {
                println!("Notes:      {}", description);
            }
        }

        ReceivableCommands::Add {
            client,
            amount,
            due,
            period,
            bank,
            document,
            category,
            description,
        } => {
            let c = ledger
                .find_client(&client)
                .ok_or_else(|| ContaproError::client_not_found(&client))?;
            let due_date = parse_date(&due)?;
            let period = match period {
                Some(p) => AccrualPeriod::parse(&p)
                    .map_err(|e| ContaproError::Validation(e.to_string()))?,
                None => AccrualPeriod::from_date(due_date),
            };

            let mut receivable =
                Receivable::new(c.id, c.name.clone(), period, due_date, parse_amount(&amount)?);
            if let Some(bank) = bank {
                let b = ledger
                    .find_bank(&bank)
                    .ok_or_else(|| ContaproError::bank_not_found(&bank))?;
                receivable = receivable.with_bank(b.id);
            }
            if let Some(document) = document {
                receivable = receivable.with_document_type(parse_document(&document)?);
            }
            if let Some(category) = category {
                receivable = receivable.with_category(category);
            }
            if let Some(description) = description {
                receivable = receivable.with_description(description);
            }

            let added = ledger.add_receivable(receivable)?;
            println!(
                "Added receivable {} for {}: {} due {}",
                added.id,
                added.client_name,
                format_currency(added.amount),
                format_date(Some(added.due_date))
            );
        }

        ReceivableCommands::Pay { receivable, date } => {
            let settlement = match date {
                Some(date) => {
                    ledger.mark_as_paid_on(PaymentKind::Receivable, &receivable, parse_date(&date)?)?
                }
                None => ledger.mark_as_paid(PaymentKind::Receivable, &receivable)?,
            };
            report_settlement(ledger, PaymentKind::Receivable, &receivable, settlement);
        }

        ReceivableCommands::Delete { receivable, yes } => {
            let r = ledger
                .find_receivable(&receivable)
                .ok_or_else(|| ContaproError::receivable_not_found(&receivable))?;
            let (id, label) = (r.id, format!("receivable {} ({})", r.id, r.client_name));

            if !yes {
                confirmation_required(&label);
                return Ok(());
            }

            ledger.remove_receivable(id)?;
            println!("Deleted {}", label);
        }
    }

    Ok(())
}
