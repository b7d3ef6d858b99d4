//! Report CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use super::parse_date;
use crate::error::{ContaproError, ContaproResult};
use crate::export::write_csv;
use crate::models::AccrualPeriod;
use crate::reports::{DashboardSummary, LedgerReport, ReportFilter};
use crate::services::Ledger;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Chronological income, expense and payroll lines for a date range
    Ledger {
        /// First day (YYYY-MM-DD), defaults to the start of the current month
        #[arg(long)]
        from: Option<String>,
        /// Last day (YYYY-MM-DD), defaults to the end of the current month
        #[arg(long)]
        to: Option<String>,
        /// all, income, expense or payroll
        #[arg(short, long, default_value = "all")]
        filter: String,
        /// Also write the lines to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Headline figures
    Dashboard,
}

/// Handle a report command
pub fn handle_report_command(ledger: &Ledger, cmd: ReportCommands) -> ContaproResult<()> {
    match cmd {
        ReportCommands::Ledger {
            from,
            to,
            filter,
            csv,
        } => {
            let month = AccrualPeriod::current();
            let start = match from {
                Some(d) => parse_date(&d)?,
                None => month.first_day(),
            };
            let end = match to {
                Some(d) => parse_date(&d)?,
                None => {
                    let next = month.next().first_day();
                    next.pred_opt().unwrap_or(next)
                }
            };
            if end < start {
                return Err(ContaproError::Validation(format!(
                    "Report end {} is before start {}",
                    end, start
                )));
            }

            let filter: ReportFilter = filter.parse()?;
            let report = LedgerReport::generate(&ledger.snapshot(), start, end, filter);
            print!("{}", report.format_terminal());

            if let Some(path) = csv {
                let file = File::create(&path)
                    .map_err(|e| ContaproError::Export(format!("Failed to create file: {}", e)))?;
                let mut writer = BufWriter::new(file);
                write_csv(&report.lines, &mut writer)?;
                println!("\nWrote {} lines to {}", report.lines.len(), path.display());
            }
        }

        ReportCommands::Dashboard => {
            let summary = DashboardSummary::from_snapshot(&ledger.snapshot());
            print!("{}", summary.format_terminal());
        }
    }

    Ok(())
}
