//! CNAB240 salary-credit batch file
//!
//! Fixed-width FEBRABAN 240 layout with one lot of segment A records (one
//! per payroll entry). Every line is exactly 240 ASCII characters and lines
//! are joined with CRLF.

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::Settings;
use crate::error::{ContaproError, ContaproResult};
use crate::models::PayrollEntry;

/// Record width
pub const LINE_WIDTH: usize = 240;

const LOT: &str = "0001";
const LAYOUT_VERSION: &str = "089";
const DENSITY: &str = "01600";
/// Inscription type 2 = CNPJ
const INSCRIPTION_CNPJ: &str = "2";

/// Company and bank account the batch is paid from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CnabConfig {
    pub bank_code: String,
    pub bank_name: String,
    pub company_tax_id: String,
    pub company_name: String,
    pub branch: String,
    pub account: String,
    /// File sequence number (NSA)
    pub sequence: u32,
}

impl CnabConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            bank_code: settings.cnab.bank_code.clone(),
            bank_name: settings.cnab.bank_name.clone(),
            company_tax_id: settings.company.tax_id.clone(),
            company_name: settings.company.name.clone(),
            branch: settings.cnab.branch.clone(),
            account: settings.cnab.account.clone(),
            sequence: settings.cnab.next_sequence,
        }
    }
}

/// Upper-case ASCII with Portuguese diacritics removed
fn fold(c: char) -> char {
    match c.to_uppercase().next().unwrap_or(c) {
        'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
        'É' | 'È' | 'Ê' | 'Ë' => 'E',
        'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
        'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
        'Ç' => 'C',
        'Ñ' => 'N',
        c if c.is_ascii_graphic() || c == ' ' => c,
        _ => ' ',
    }
}

/// Alphanumeric field: folded, truncated, space-padded on the right
fn alpha(value: &str, width: usize) -> String {
    let text: String = value.chars().map(fold).take(width).collect();
    format!("{:<width$}", text, width = width)
}

fn blank(width: usize) -> String {
    " ".repeat(width)
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Numeric field: zero-padded on the left, rejected when too wide
fn num(field: &str, value: impl ToString, width: usize) -> ContaproResult<String> {
    let value = value.to_string();
    if value.len() > width {
        return Err(ContaproError::Export(format!(
            "{} '{}' does not fit in {} digits",
            field, value, width
        )));
    }
    Ok(format!("{:0>width$}", value, width = width))
}

fn finish(mut line: String) -> String {
    if line.len() < LINE_WIDTH {
        line.push_str(&blank(LINE_WIDTH - line.len()));
    }
    line
}

pub struct Cnab240Encoder {
    config: CnabConfig,
}

impl Cnab240Encoder {
    pub fn new(config: CnabConfig) -> Self {
        Self { config }
    }

    /// Encode `entries` as a single-lot file
    ///
    /// `generated_at` stamps the file header; `payment_date` is the credit
    /// date written on every segment A record.
    pub fn encode(
        &self,
        entries: &[PayrollEntry],
        generated_at: NaiveDateTime,
        payment_date: NaiveDate,
    ) -> ContaproResult<String> {
        let mut lines = Vec::with_capacity(entries.len() + 4);
        lines.push(self.file_header(generated_at)?);
        lines.push(self.lot_header()?);

        let mut total_cents: i64 = 0;
        for (index, entry) in entries.iter().enumerate() {
            let cents = entry.total.cents();
            if cents < 0 {
                return Err(ContaproError::Export(format!(
                    "Payroll total for {} is negative ({})",
                    entry.employee_name, entry.total
                )));
            }
            total_cents += cents;
            lines.push(self.segment_a(index + 1, entry, cents, payment_date)?);
        }

        lines.push(self.lot_trailer(entries.len() + 2, total_cents)?);
        lines.push(self.file_trailer(lines.len() + 1)?);

        tracing::debug!(
            records = lines.len(),
            total_cents,
            sequence = self.config.sequence,
            "CNAB240 file encoded"
        );

        Ok(lines.join("\r\n"))
    }

    fn bank_code(&self) -> ContaproResult<String> {
        num("Bank code", digits_only(&self.config.bank_code), 3)
    }

    /// Inscription, agreement, branch and account block shared by both headers
    fn company_block(&self) -> ContaproResult<String> {
        Ok([
            INSCRIPTION_CNPJ.to_string(),
            num("Company tax id", digits_only(&self.config.company_tax_id), 14)?,
            blank(20),
            num("Branch", digits_only(&self.config.branch), 5)?,
            blank(1),
            num("Account", digits_only(&self.config.account), 12)?,
            blank(1),
            blank(1),
            alpha(&self.config.company_name, 30),
        ]
        .concat())
    }

    fn file_header(&self, generated_at: NaiveDateTime) -> ContaproResult<String> {
        Ok(finish(
            [
                self.bank_code()?,
                "0000".to_string(),
                "0".to_string(),
                blank(9),
                self.company_block()?,
                alpha(&self.config.bank_name, 30),
                blank(10),
                "1".to_string(),
                generated_at.format("%Y%m%d").to_string(),
                generated_at.format("%H%M%S").to_string(),
                num("File sequence", self.config.sequence, 6)?,
                LAYOUT_VERSION.to_string(),
                DENSITY.to_string(),
            ]
            .concat(),
        ))
    }

    fn lot_header(&self) -> ContaproResult<String> {
        Ok(finish(
            [
                self.bank_code()?,
                LOT.to_string(),
                "1".to_string(),
                "C".to_string(),
                "30".to_string(),
                "01".to_string(),
                "045".to_string(),
                blank(1),
                self.company_block()?,
                blank(40),
            ]
            .concat(),
        ))
    }

    fn segment_a(
        &self,
        sequence: usize,
        entry: &PayrollEntry,
        cents: i64,
        payment_date: NaiveDate,
    ) -> ContaproResult<String> {
        let our_number = entry.id.as_uuid().simple().to_string();

        Ok(finish(
            [
                self.bank_code()?,
                LOT.to_string(),
                "3".to_string(),
                num("Record sequence", sequence, 5)?,
                "A".to_string(),
                "0".to_string(),
                "00".to_string(),
                "000".to_string(),
                self.bank_code()?,
                "0".repeat(5),
                blank(1),
                "0".repeat(12),
                blank(1),
                blank(1),
                alpha(&entry.employee_name, 30),
                alpha(&our_number, 20),
                payment_date.format("%Y%m%d").to_string(),
                "REA".to_string(),
                "0".repeat(15),
                num("Amount", cents, 15)?,
            ]
            .concat(),
        ))
    }

    fn lot_trailer(&self, records: usize, total_cents: i64) -> ContaproResult<String> {
        Ok(finish(
            [
                self.bank_code()?,
                LOT.to_string(),
                "5".to_string(),
                blank(9),
                num("Lot record count", records, 6)?,
                num("Lot total", total_cents, 18)?,
                "0".repeat(18),
                "0".repeat(6),
            ]
            .concat(),
        ))
    }

    fn file_trailer(&self, records: usize) -> ContaproResult<String> {
        Ok(finish(
            [
                self.bank_code()?,
                "9999".to_string(),
                "9".to_string(),
                blank(9),
                "000001".to_string(),
                num("File record count", records, 6)?,
                "0".repeat(6),
            ]
            .concat(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccrualPeriod, ContractType, Employee, Money};

    fn config() -> CnabConfig {
        CnabConfig {
            bank_code: "756".into(),
            bank_name: "Sicoob".into(),
            company_tax_id: "12.345.678/0001-90".into(),
            company_name: "Escritório Contábil São João".into(),
            branch: "3001".into(),
            account: "12345-6".into(),
            sequence: 7,
        }
    }

    fn entry(name: &str, cents: i64) -> PayrollEntry {
        let employee = Employee::new(name, "", Money::from_cents(cents), ContractType::Clt);
        PayrollEntry::for_employee(&employee, AccrualPeriod::parse("2023-10").unwrap())
    }

    fn generated_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, 1)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap()
    }

    fn payment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 5).unwrap()
    }

    fn encode(entries: &[PayrollEntry]) -> String {
        Cnab240Encoder::new(config())
            .encode(entries, generated_at(), payment_date())
            .unwrap()
    }

    #[test]
    fn test_every_line_is_240_chars() {
        let output = encode(&[entry("Ana Silva", 580_000), entry("Carlos Souza", 350_000)]);
        let lines: Vec<&str> = output.split("\r\n").collect();

        assert_eq!(lines.len(), 6);
        for line in &lines {
            assert_eq!(line.len(), LINE_WIDTH);
            assert_eq!(line.chars().count(), LINE_WIDTH);
        }
        assert!(!output.ends_with("\r\n"));
    }

    #[test]
    fn test_record_types() {
        let output = encode(&[entry("Ana Silva", 580_000)]);
        let lines: Vec<&str> = output.split("\r\n").collect();

        assert_eq!(&lines[0][0..8], "75600000");
        assert_eq!(&lines[1][0..9], "75600011C");
        assert_eq!(&lines[1][9..11], "30");
        assert_eq!(&lines[2][0..8], "75600013");
        assert_eq!(&lines[2][13..14], "A");
        assert_eq!(&lines[3][0..8], "75600015");
        assert_eq!(&lines[4][0..8], "75699999");
    }

    #[test]
    fn test_file_header_fields() {
        let output = encode(&[]);
        let header = output.split("\r\n").next().unwrap();

        assert_eq!(&header[17..18], "2");
        assert_eq!(&header[18..32], "12345678000190");
        assert_eq!(&header[72..102], alpha("ESCRITORIO CONTABIL SAO JOAO", 30));
        assert_eq!(&header[102..132], alpha("SICOOB", 30));
        assert_eq!(&header[142..143], "1");
        assert_eq!(&header[143..151], "20231101");
        assert_eq!(&header[151..157], "093015");
        assert_eq!(&header[157..163], "000007");
        assert_eq!(&header[163..166], "089");
    }

    #[test]
    fn test_segment_a_amount_and_marker() {
        let output = encode(&[entry("João Araújo", 85_050), entry("Ana Silva", 580_000)]);
        let lines: Vec<&str> = output.split("\r\n").collect();

        let first = lines[2];
        assert_eq!(&first[8..13], "00001");
        assert_eq!(&first[43..73], alpha("JOAO ARAUJO", 30));
        assert_eq!(&first[93..101], "20231105");
        assert_eq!(&first[101..104], "REA");
        assert_eq!(&first[119..134], "000000000085050");

        assert_eq!(&lines[3][8..13], "00002");
        assert_eq!(&lines[3][119..134], "000000000580000");
    }

    #[test]
    fn test_trailers() {
        let entries = [
            entry("Ana Silva", 580_000),
            entry("Carlos Souza", 350_000),
            entry("Julia Lima", 220_001),
        ];
        let output = encode(&entries);
        let lines: Vec<&str> = output.split("\r\n").collect();

        let lot_trailer = lines[5];
        assert_eq!(&lot_trailer[17..23], "000005");
        assert_eq!(&lot_trailer[23..41], "000000000001150001");

        let detail_sum: i64 = lines[2..5]
            .iter()
            .map(|l| l[119..134].parse::<i64>().unwrap())
            .sum();
        assert_eq!(detail_sum, lot_trailer[23..41].parse::<i64>().unwrap());

        let file_trailer = lines[6];
        assert_eq!(&file_trailer[17..23], "000001");
        assert_eq!(&file_trailer[23..29], "000007");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_negative_total_is_rejected() {
        let mut negative = entry("Ana Silva", 100);
        negative.deductions = Money::from_cents(500);
        negative.recompute_total();

        let err = Cnab240Encoder::new(config())
            .encode(&[negative], generated_at(), payment_date())
            .unwrap_err();
        assert!(matches!(err, ContaproError::Export(_)));
    }

    #[test]
    fn test_oversized_numeric_field_is_rejected() {
        let mut config = config();
        config.bank_code = "7560".into();
        let err = Cnab240Encoder::new(config)
            .encode(&[], generated_at(), payment_date())
            .unwrap_err();
        assert!(err.to_string().contains("Bank code"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let long = "Maria ".repeat(10);
        let output = encode(&[entry(&long, 100)]);
        let detail = output.split("\r\n").nth(2).unwrap();
        assert_eq!(detail.len(), LINE_WIDTH);
        assert_eq!(&detail[43..73], "MARIA MARIA MARIA MARIA MARIA ");
    }
}
