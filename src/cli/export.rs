//! CLI commands for data export
//!
//! List exports are CSV; the full ledger goes out as JSON or YAML.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::error::{ContaproError, ContaproResult};
use crate::export::{export_full_json, export_full_yaml, write_csv};
use crate::services::Ledger;

/// Full export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON document
    Json,
    /// YAML document, easier to read by hand
    Yaml,
}

/// Collections available as CSV
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CsvCollection {
    Clients,
    Receivables,
    Payables,
    Payroll,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the whole ledger to one file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export one collection to CSV
    Csv {
        /// Which collection
        #[arg(value_enum)]
        collection: CsvCollection,

        /// Output file path
        output: PathBuf,
    },
}

fn create(output: &Path) -> ContaproResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        ContaproError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle export commands
pub fn handle_export_command(ledger: &Ledger, cmd: ExportCommands) -> ContaproResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create(&output)?;
            match format {
                ExportFormat::Json => export_full_json(&ledger.snapshot(), &mut writer, pretty)?,
                ExportFormat::Yaml => export_full_yaml(&ledger.snapshot(), &mut writer)?,
            }
            println!("Full ledger exported to: {}", output.display());
        }

        ExportCommands::Csv { collection, output } => {
            let mut writer = create(&output)?;
            let count = match collection {
                CsvCollection::Clients => {
                    write_csv(ledger.clients(), &mut writer)?;
                    ledger.clients().len()
                }
                CsvCollection::Receivables => {
                    write_csv(ledger.receivables(), &mut writer)?;
                    ledger.receivables().len()
                }
                CsvCollection::Payables => {
                    write_csv(ledger.payables(), &mut writer)?;
                    ledger.payables().len()
                }
                CsvCollection::Payroll => {
                    write_csv(ledger.payroll(), &mut writer)?;
                    ledger.payroll().len()
                }
            };
            println!("Exported {} rows to: {}", count, output.display());
        }
    }

    Ok(())
}
