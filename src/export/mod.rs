//! Export module for ContaPro
//!
//! - CNAB240: salary-credit batch file for the bank
//! - CSV: spreadsheet-compatible lists and reports
//! - JSON / YAML: full ledger export

pub mod cnab240;
pub mod csv;
pub mod json;
pub mod yaml;

pub use cnab240::{Cnab240Encoder, CnabConfig};
pub use csv::{escape_csv, to_csv, write_csv, CsvRecord};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
