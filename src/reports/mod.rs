//! Reports module for ContaPro
//!
//! Read-only views derived from a ledger snapshot: the chronological ledger
//! report, the dashboard headline figures and payroll summaries.

pub mod dashboard;
pub mod ledger_report;
pub mod payroll_summary;

pub use dashboard::DashboardSummary;
pub use ledger_report::{LedgerReport, LineKind, ReportFilter, ReportLine, ReportTotals};
pub use payroll_summary::PayrollSummary;
