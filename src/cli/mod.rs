//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod bank;
pub mod client;
pub mod config;
pub mod employee;
pub mod export;
pub mod payable;
pub mod payroll;
pub mod receivable;
pub mod report;
pub mod supplier;

pub use bank::{handle_bank_command, BankCommands};
pub use client::{handle_client_command, ClientCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use employee::{handle_employee_command, EmployeeCommands};
pub use export::{handle_export_command, ExportCommands};
pub use payable::{handle_payable_command, PayableCommands};
pub use payroll::{handle_payroll_command, PayrollCommands};
pub use receivable::{handle_receivable_command, ReceivableCommands};
pub use report::{handle_report_command, ReportCommands};
pub use supplier::{handle_supplier_command, SupplierCommands};

use chrono::NaiveDate;

use crate::error::{ContaproError, ContaproResult};
use crate::models::{ActiveStatus, Money};

/// Parse a user-entered amount (`850.50`, `850,50`, `R$ 1.234,56`)
pub fn parse_amount(input: &str) -> ContaproResult<Money> {
    Money::parse(input).map_err(|e| ContaproError::Validation(e.to_string()))
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> ContaproResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| {
        ContaproError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", input))
    })
}

pub(crate) fn parse_status(input: &str) -> ContaproResult<ActiveStatus> {
    ActiveStatus::parse(input).ok_or_else(|| {
        ContaproError::Validation(format!("Invalid status '{}'. Use ATIVO or INATIVO", input))
    })
}

/// Printed instead of deleting when `--yes` was not given
pub(crate) fn confirmation_required(what: &str) {
    println!("About to delete {}", what);
    println!("Use --yes to confirm deletion");
}
