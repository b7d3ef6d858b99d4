//! CSV Export functionality
//!
//! Spreadsheet-friendly CSV: UTF-8 with a byte-order mark, a header taken
//! from the first row, CRLF line endings. Values holding a comma, quote,
//! line break or semicolon are quoted.

use std::io::Write;

use crate::error::{ContaproError, ContaproResult};
use crate::models::{Client, Payable, PayrollEntry, Receivable};
use crate::reports::ReportLine;

const BOM: &str = "\u{feff}";
const LINE_END: &str = "\r\n";

/// A row type that can be written as CSV
pub trait CsvRecord {
    /// Column names, in the order of `values`
    fn field_names(&self) -> &'static [&'static str];

    fn values(&self) -> Vec<String>;
}

/// Quote a value when it contains a delimiter, quote or line break
pub fn escape_csv(value: &str) -> String {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r' | ';')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn join_row(values: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    values
        .into_iter()
        .map(|v| escape_csv(v.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode rows as CSV text; no rows gives an empty string
pub fn to_csv<R: CsvRecord>(rows: &[R]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_row(first.field_names().iter()));
    lines.extend(rows.iter().map(|row| join_row(row.values())));

    format!("{}{}", BOM, lines.join(LINE_END))
}

/// Encode rows and write them out
pub fn write_csv<R: CsvRecord, W: Write>(rows: &[R], writer: &mut W) -> ContaproResult<()> {
    writer
        .write_all(to_csv(rows).as_bytes())
        .map_err(|e| ContaproError::Export(e.to_string()))
}

fn opt(value: &Option<impl ToString>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

impl CsvRecord for ReportLine {
    fn field_names(&self) -> &'static [&'static str] {
        &["id", "type", "date", "label", "status", "amount", "details"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.kind.to_string(),
            self.sort_date.to_string(),
            self.label.clone(),
            self.status.clone(),
            self.amount.to_decimal_string(),
            opt(&self.details),
        ]
    }
}

impl CsvRecord for Receivable {
    fn field_names(&self) -> &'static [&'static str] {
        &[
            "id", "client", "period", "due_date", "amount", "status", "payment_method",
            "category", "description", "paid_on",
        ]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.client_name.clone(),
            self.period.to_string(),
            self.due_date.to_string(),
            self.amount.to_decimal_string(),
            self.status.to_string(),
            self.payment_method.clone(),
            opt(&self.category),
            opt(&self.description),
            opt(&self.paid_on),
        ]
    }
}

impl CsvRecord for Payable {
    fn field_names(&self) -> &'static [&'static str] {
        &[
            "id", "supplier", "category", "cost_center", "due_date", "amount", "status",
            "description", "paid_on",
        ]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.supplier.clone(),
            self.category.clone(),
            self.cost_center_name.clone(),
            self.due_date.to_string(),
            self.amount.to_decimal_string(),
            self.status.to_string(),
            opt(&self.description),
            opt(&self.paid_on),
        ]
    }
}

impl CsvRecord for PayrollEntry {
    fn field_names(&self) -> &'static [&'static str] {
        &[
            "id", "employee", "period", "base_salary", "benefits", "deductions", "commission",
            "total", "status",
        ]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_name.clone(),
            self.period.to_string(),
            self.base_salary.to_decimal_string(),
            self.benefits.to_decimal_string(),
            self.deductions.to_decimal_string(),
            self.commission.to_decimal_string(),
            self.total.to_decimal_string(),
            self.status.to_string(),
        ]
    }
}

impl CsvRecord for Client {
    fn field_names(&self) -> &'static [&'static str] {
        &["id", "name", "tax_id", "tax_regime", "monthly_fee", "status", "delinquent"]
    }

    fn values(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.tax_id.clone(),
            self.tax_regime.to_string(),
            self.monthly_fee.to_decimal_string(),
            self.status.to_string(),
            self.delinquent.to_string(),
        ]
    }
}
