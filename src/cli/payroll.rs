//! Payroll CLI commands
//!
//! Entry editing, monthly generation, closing, summaries and the CNAB240
//! salary-credit file.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::{ContaproPaths, Settings};
use crate::display::{format_currency, format_payroll_list};
use crate::error::{ContaproError, ContaproResult};
use crate::export::{Cnab240Encoder, CnabConfig};
use crate::models::{AccrualPeriod, PayrollEntry, PayrollStatus};
use crate::reports::PayrollSummary;
use crate::services::Ledger;
use crate::storage::file_io::write_text_atomic;

/// Payroll subcommands
#[derive(Subcommand)]
pub enum PayrollCommands {
    /// List payroll entries
    List {
        /// Only this accrual period (YYYY-MM)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Adjust benefits, deductions, commission or status of an entry
    ///
    /// The total is always recomputed from its components.
    Edit {
        /// Payroll entry ID
        entry: String,
        #[arg(short, long)]
        benefits: Option<String>,
        #[arg(short, long)]
        deductions: Option<String>,
        #[arg(short, long)]
        commission: Option<String>,
        /// ABERTA, FECHADA or PAGO
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Open entries for every active employee without one in the period
    Generate {
        /// Accrual period (YYYY-MM), defaults to the current month
        period: Option<String>,
    },
    /// Close every payroll entry (cannot be undone)
    Close {
        /// Confirm closing
        #[arg(short, long)]
        yes: bool,
    },
    /// Totals for one accrual period
    Summary {
        /// Accrual period (YYYY-MM), defaults to the current month
        period: Option<String>,
    },
    /// Write the CNAB240 salary-credit file for one accrual period
    ExportCnab {
        /// Accrual period (YYYY-MM)
        period: String,
        /// Credit date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        payment_date: Option<String>,
        /// Output file, defaults to the exports directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_period(input: Option<&str>) -> ContaproResult<AccrualPeriod> {
    match input {
        Some(p) => AccrualPeriod::parse(p).map_err(|e| ContaproError::Validation(e.to_string())),
        None => Ok(AccrualPeriod::current()),
    }
}

/// Handle a payroll command
///
/// With `persist_settings` off, a CNAB export still writes its file but the
/// advanced sequence number stays in memory.
pub fn handle_payroll_command(
    ledger: &mut Ledger,
    settings: &mut Settings,
    paths: &ContaproPaths,
    persist_settings: bool,
    cmd: PayrollCommands,
) -> ContaproResult<()> {
    match cmd {
        PayrollCommands::List { period } => {
            match period {
                Some(p) => {
                    let period = parse_period(Some(&p))?;
                    print!("{}", format_payroll_list(ledger.payroll_for(period)));
                }
                None => print!("{}", format_payroll_list(ledger.payroll())),
            }
        }

        PayrollCommands::Edit {
            entry,
            benefits,
            deductions,
            commission,
            status,
        } => {
            let mut e: PayrollEntry = ledger
                .find_payroll_entry(&entry)
                .cloned()
                .ok_or_else(|| ContaproError::payroll_entry_not_found(&entry))?;

            if let Some(benefits) = benefits {
                e.benefits = parse_amount(&benefits)?;
            }
            if let Some(deductions) = deductions {
                e.deductions = parse_amount(&deductions)?;
            }
            if let Some(commission) = commission {
                e.commission = parse_amount(&commission)?;
            }
            if let Some(status) = status {
                e.status = PayrollStatus::parse(&status).ok_or_else(|| {
                    ContaproError::Validation(format!("Unknown payroll status '{}'", status))
                })?;
            }

            let updated = ledger.update_payroll_entry(e)?;
            println!(
                "Updated payroll entry {} ({} {}): total {}",
                updated.id,
                updated.employee_name,
                updated.period,
                format_currency(updated.total)
            );
        }

        PayrollCommands::Generate { period } => {
            let period = parse_period(period.as_deref())?;
            let created = ledger.generate_payroll(period)?;
            if created.is_empty() {
                println!("Every active employee already has an entry for {}", period);
            } else {
                println!("Created {} payroll entries for {}", created.len(), period);
                print!("{}", format_payroll_list(&created));
            }
        }

        PayrollCommands::Close { yes } => {
            if !yes {
                println!("About to close every payroll entry. Closed entries no longer follow salary changes.");
                println!("Use --yes to confirm");
                return Ok(());
            }

            let closed = ledger.close_payroll()?;
            println!("Closed {} payroll entries", closed);
        }

        PayrollCommands::Summary { period } => {
            let period = parse_period(period.as_deref())?;
            let summary = PayrollSummary::from_entries(ledger.payroll_for(period));

            println!("Folha {}", period);
            println!("{}", "=".repeat(36));
            println!("Lançamentos: {:>22}", summary.entries);
            println!("Bruto:       {:>22}", format_currency(summary.gross));
            println!("Benefícios:  {:>22}", format_currency(summary.benefits));
            println!("Descontos:   {:>22}", format_currency(summary.deductions));
            println!("Líquido:     {:>22}", format_currency(summary.net));
            println!(
                "Status:      {:>22}",
                if summary.all_closed { "FECHADA" } else { "ABERTA" }
            );
        }

        PayrollCommands::ExportCnab {
            period,
            payment_date,
            output,
        } => {
            let period = parse_period(Some(&period))?;
            let entries: Vec<PayrollEntry> = ledger.payroll_for(period).into_iter().cloned().collect();
            if entries.is_empty() {
                return Err(ContaproError::Export(format!(
                    "No payroll entries for {}",
                    period
                )));
            }

            let payment_date = match payment_date {
                Some(d) => parse_date(&d)?,
                None => Local::now().date_naive(),
            };

            let config = CnabConfig::from_settings(settings);
            let sequence = config.sequence;
            let contents = Cnab240Encoder::new(config).encode(
                &entries,
                Local::now().naive_local(),
                payment_date,
            )?;

            let path = output.unwrap_or_else(|| {
                paths
                    .exports_dir()
                    .join(format!("CNAB240_{}_{:06}.txt", period, sequence))
            });
            write_text_atomic(&path, &contents)?;

            settings.cnab.next_sequence = sequence.saturating_add(1);
            if persist_settings {
                settings.save(paths)?;
            }

            let total: crate::models::Money = entries.iter().map(|e| e.total).sum();
            println!(
                "Wrote {} ({} credits, {})",
                path.display(),
                entries.len(),
                format_currency(total)
            );
        }
    }

    Ok(())
}
