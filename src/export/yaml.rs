//! YAML Export functionality
//!
//! The same document as the JSON export, in a form that is easier to read
//! and diff by hand.

use crate::error::{ContaproError, ContaproResult};
use crate::export::json::FullExport;
use crate::services::LedgerSnapshot;
use std::io::Write;

fn export_err(e: impl std::fmt::Display) -> ContaproError {
    ContaproError::Export(e.to_string())
}

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(snapshot: &LedgerSnapshot<'_>, writer: &mut W) -> ContaproResult<()> {
    let export = FullExport::from_snapshot(snapshot);

    writeln!(writer, "# ContaPro ledger export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "#").map_err(export_err)?;
    writeln!(writer, "# Contains client tax ids and salaries. Store it accordingly.")
        .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Ledger;
    use crate::storage::Storage;

    #[test]
    fn test_yaml_export() {
        let ledger = Ledger::load(Storage::in_memory());

        let mut output = Vec::new();
        export_full_yaml(&ledger.snapshot(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# ContaPro ledger export"));
        assert!(yaml.contains("Tech Solutions LTDA"));
        assert!(yaml.contains("2023-10"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let ledger = Ledger::load(Storage::in_memory());

        let mut output = Vec::new();
        export_full_yaml(&ledger.snapshot(), &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        let content: String = yaml
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");

        let imported: FullExport = serde_yaml::from_str(&content).unwrap();
        assert_eq!(imported.payroll, ledger.payroll());
        assert_eq!(imported.employees[0].name, "Ana Silva");
    }
}
