//! JSON Export functionality
//!
//! Exports every ledger collection to one versioned JSON document.

use crate::error::{ContaproError, ContaproResult};
use crate::models::{Bank, Client, CostCenter, Employee, Payable, PayrollEntry, Receivable, Supplier};
use crate::services::LedgerSnapshot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub clients: Vec<Client>,
    pub employees: Vec<Employee>,
    pub suppliers: Vec<Supplier>,
    pub banks: Vec<Bank>,
    pub cost_centers: Vec<CostCenter>,
    pub receivables: Vec<Receivable>,
    pub payables: Vec<Payable>,
    pub payroll: Vec<PayrollEntry>,

    pub metadata: ExportMetadata,
}

/// Counts and date range, for a quick look without parsing everything
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub client_count: usize,
    pub employee_count: usize,
    pub receivable_count: usize,
    pub payable_count: usize,
    pub payroll_count: usize,

    /// Earliest due date across receivables and payables
    pub earliest_due_date: Option<String>,

    /// Latest due date across receivables and payables
    pub latest_due_date: Option<String>,
}

impl FullExport {
    /// Build an export from a ledger snapshot
    pub fn from_snapshot(snapshot: &LedgerSnapshot<'_>) -> Self {
        let due_dates = snapshot
            .receivables
            .iter()
            .map(|r| r.due_date)
            .chain(snapshot.payables.iter().map(|p| p.due_date));

        let (earliest, latest) = due_dates.fold((None, None), |(min, max), date| {
            (
                Some(min.map_or(date, |m: chrono::NaiveDate| m.min(date))),
                Some(max.map_or(date, |m: chrono::NaiveDate| m.max(date))),
            )
        });

        let metadata = ExportMetadata {
            client_count: snapshot.clients.len(),
            employee_count: snapshot.employees.len(),
            receivable_count: snapshot.receivables.len(),
            payable_count: snapshot.payables.len(),
            payroll_count: snapshot.payroll.len(),
            earliest_due_date: earliest.map(|d| d.to_string()),
            latest_due_date: latest.map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            clients: snapshot.clients.to_vec(),
            employees: snapshot.employees.to_vec(),
            suppliers: snapshot.suppliers.to_vec(),
            banks: snapshot.banks.to_vec(),
            cost_centers: snapshot.cost_centers.to_vec(),
            receivables: snapshot.receivables.to_vec(),
            payables: snapshot.payables.to_vec(),
            payroll: snapshot.payroll.to_vec(),
            metadata,
        }
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    snapshot: &LedgerSnapshot<'_>,
    writer: &mut W,
    pretty: bool,
) -> ContaproResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ContaproError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Ledger;
    use crate::storage::Storage;

    #[test]
    fn test_full_export() {
        let ledger = Ledger::load(Storage::in_memory());
        let export = FullExport::from_snapshot(&ledger.snapshot());

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.clients.len(), 5);
        assert_eq!(export.cost_centers.len(), 4);
        assert_eq!(export.metadata.payroll_count, 3);
        assert_eq!(export.metadata.earliest_due_date.as_deref(), Some("2023-10-15"));
        assert_eq!(export.metadata.latest_due_date.as_deref(), Some("2023-11-15"));
    }

    #[test]
    fn test_json_roundtrip() {
        let ledger = Ledger::load(Storage::in_memory());

        let mut output = Vec::new();
        export_full_json(&ledger.snapshot(), &mut output, true).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.receivables, ledger.receivables());
        assert_eq!(parsed.banks[0].name, "Sicoob");
    }

    #[test]
    fn test_empty_ledger_has_no_date_range() {
        let ledger = Ledger::empty(Storage::in_memory());
        let export = FullExport::from_snapshot(&ledger.snapshot());
        assert!(export.metadata.earliest_due_date.is_none());
        assert_eq!(export.metadata.client_count, 0);
    }
}
