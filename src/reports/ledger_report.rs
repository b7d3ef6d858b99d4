//! Ledger Report
//!
//! One chronological view across receivables, payables and payroll for a
//! date range. Payroll has no payment date of its own, so its lines are
//! dated on the 5th of the accrual month.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ContaproError;
use crate::models::{Money, PayrollEntry};
use crate::services::LedgerSnapshot;

/// Day of the accrual month payroll lines are dated on
pub const PAYROLL_DAY: u32 = 5;

/// Direction of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineKind {
    Income,
    Expense,
    Payroll,
}

impl LineKind {
    /// Whether the line takes money out of the office
    pub fn is_outflow(&self) -> bool {
        !matches!(self, Self::Income)
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "INCOME"),
            Self::Expense => write!(f, "EXPENSE"),
            Self::Payroll => write!(f, "PAYROLL"),
        }
    }
}

/// Which lines a report keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFilter {
    #[default]
    All,
    Income,
    Expense,
    Payroll,
}

impl ReportFilter {
    pub fn matches(&self, kind: LineKind) -> bool {
        match self {
            Self::All => true,
            Self::Income => kind == LineKind::Income,
            Self::Expense => kind == LineKind::Expense,
            Self::Payroll => kind == LineKind::Payroll,
        }
    }
}

impl fmt::Display for ReportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
            Self::Payroll => write!(f, "payroll"),
        }
    }
}

impl FromStr for ReportFilter {
    type Err = ContaproError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "todos" => Ok(Self::All),
            "income" | "receitas" => Ok(Self::Income),
            "expense" | "despesas" => Ok(Self::Expense),
            "payroll" | "folha" => Ok(Self::Payroll),
            other => Err(ContaproError::Validation(format!(
                "Unknown report filter '{}'. Valid filters: all, income, expense, payroll",
                other
            ))),
        }
    }
}

/// A single line of the report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportLine {
    /// Display id of the source record
    pub id: String,
    pub kind: LineKind,
    pub sort_date: NaiveDate,
    pub label: String,
    pub status: String,
    /// Unsigned amount; the direction comes from `kind`
    pub amount: Money,
    pub details: Option<String>,
}

impl ReportLine {
    /// Amount with outflows negative
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_outflow() {
            -self.amount
        } else {
            self.amount
        }
    }
}

/// Report totals; payroll counts as expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReportTotals {
    pub income: Money,
    pub expense: Money,
    pub net: Money,
}

/// Ledger report for a date range
#[derive(Debug, Clone)]
pub struct LedgerReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub filter: ReportFilter,
    /// Newest first
    pub lines: Vec<ReportLine>,
    pub totals: ReportTotals,
}

fn payroll_details(entry: &PayrollEntry) -> String {
    format!(
        "Base: {} | Benef: +{} | Desc: -{}",
        entry.base_salary, entry.benefits, entry.deductions
    )
}

impl LedgerReport {
    /// Generate the report; both bounds are inclusive
    pub fn generate(
        snapshot: &LedgerSnapshot<'_>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        filter: ReportFilter,
    ) -> Self {
        let receivables = snapshot.receivables.iter().map(|r| ReportLine {
            id: r.id.to_string(),
            kind: LineKind::Income,
            sort_date: r.due_date,
            label: r.client_name.clone(),
            status: r.status.to_string(),
            amount: r.amount,
            details: r.description.clone(),
        });

        let payables = snapshot.payables.iter().map(|p| ReportLine {
            id: p.id.to_string(),
            kind: LineKind::Expense,
            sort_date: p.due_date,
            label: p.supplier.clone(),
            status: p.status.to_string(),
            amount: p.amount,
            details: p.description.clone(),
        });

        let payroll = snapshot.payroll.iter().map(|e| ReportLine {
            id: e.id.to_string(),
            kind: LineKind::Payroll,
            sort_date: e.period.day(PAYROLL_DAY),
            label: format!("Folha: {}", e.employee_name),
            status: e.status.to_string(),
            amount: e.total,
            details: Some(payroll_details(e)),
        });

        let mut lines: Vec<ReportLine> = receivables
            .chain(payables)
            .chain(payroll)
            .filter(|line| filter.matches(line.kind))
            .filter(|line| line.sort_date >= start_date && line.sort_date <= end_date)
            .collect();

        // Stable, so equal dates keep receivable/payable/payroll order
        lines.sort_by(|a, b| b.sort_date.cmp(&a.sort_date));

        let totals = lines.iter().fold(ReportTotals::default(), |mut totals, line| {
            if line.kind.is_outflow() {
                totals.expense += line.amount;
            } else {
                totals.income += line.amount;
            }
            totals.net = totals.income - totals.expense;
            totals
        });

        Self {
            start_date,
            end_date,
            filter,
            lines,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Relatório {} a {} ({})\n",
            self.start_date.format("%d/%m/%Y"),
            self.end_date.format("%d/%m/%Y"),
            self.filter
        ));
        output.push_str(&"=".repeat(96));
        output.push('\n');

        output.push_str(&format!(
            "{:<10} {:<8} {:<36} {:<10} {:>16}  {}\n",
            "Data", "Tipo", "Descrição", "Status", "Valor", "Detalhes"
        ));
        output.push_str(&"-".repeat(96));
        output.push('\n');

        for line in &self.lines {
            output.push_str(&format!(
                "{:<10} {:<8} {:<36} {:<10} {:>16}  {}\n",
                line.sort_date.format("%d/%m/%Y"),
                line.kind,
                crate::display::format::truncate(&line.label, 36),
                line.status,
                line.signed_amount().to_string(),
                line.details.as_deref().unwrap_or("")
            ));
        }

        if self.lines.is_empty() {
            output.push_str("Nenhum lançamento no período.\n");
        }

        output.push_str(&"-".repeat(96));
        output.push('\n');
        output.push_str(&format!("Receitas: {:>16}\n", self.totals.income.to_string()));
        output.push_str(&format!("Despesas: {:>16}\n", self.totals.expense.to_string()));
        output.push_str(&format!("Saldo:    {:>16}\n", self.totals.net.to_string()));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::Ledger;
    use crate::storage::Storage;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> Ledger {
        Ledger::load(Storage::in_memory())
    }

    #[test]
    fn test_income_filter_window() {
        let ledger = seeded();
        let (start, end) = (date(2023, 10, 1), date(2023, 10, 31));
        let report = LedgerReport::generate(&ledger.snapshot(), start, end, ReportFilter::Income);

        assert_eq!(report.lines.len(), 3);
        for line in &report.lines {
            assert_eq!(line.kind, LineKind::Income);
            assert!(start <= line.sort_date && line.sort_date <= end);
        }

        let sum: Money = report.lines.iter().map(|l| l.signed_amount()).sum();
        assert_eq!(sum, report.totals.income);
        assert_eq!(report.totals.income, Money::from_reais(4800));
        assert!(report.totals.expense.is_zero());
    }

    #[test]
    fn test_payroll_counts_as_expense() {
        let ledger = seeded();
        let report = LedgerReport::generate(
            &ledger.snapshot(),
            date(2023, 10, 1),
            date(2023, 10, 31),
            ReportFilter::All,
        );

        // Papelaria 230 + Ana 5800 + Carlos 3500
        assert_eq!(report.totals.expense, Money::from_reais(9530));
        assert_eq!(report.totals.net, Money::from_reais(4800 - 9530));

        let signed: Money = report.lines.iter().map(|l| l.signed_amount()).sum();
        assert_eq!(signed, report.totals.net);
    }

    #[test]
    fn test_payroll_lines_dated_on_fifth() {
        let ledger = seeded();
        let report = LedgerReport::generate(
            &ledger.snapshot(),
            date(2023, 11, 5),
            date(2023, 11, 5),
            ReportFilter::Payroll,
        );

        assert_eq!(report.lines.len(), 1);
        let line = &report.lines[0];
        assert_eq!(line.label, "Folha: Ana Silva");
        assert_eq!(line.sort_date, date(2023, 11, 5));
        assert_eq!(
            line.details.as_deref(),
            Some("Base: R$ 6.500,00 | Benef: +R$ 800,00 | Desc: -R$ 0,00")
        );
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        let ledger = seeded();
        let report = LedgerReport::generate(
            &ledger.snapshot(),
            date(2023, 1, 1),
            date(2023, 12, 31),
            ReportFilter::All,
        );

        assert!(report
            .lines
            .windows(2)
            .all(|w| w[0].sort_date >= w[1].sort_date));

        // Aguiar and the second Tech receivable share 2023-11-15
        let same_day: Vec<&str> = report
            .lines
            .iter()
            .filter(|l| l.sort_date == date(2023, 11, 15))
            .map(|l| l.label.as_str())
            .collect();
        assert_eq!(same_day, vec!["Consultoria Aguiar", "Tech Solutions LTDA"]);
    }

    #[test]
    fn test_empty_ledger_gives_empty_report() {
        let ledger = Ledger::empty(Storage::in_memory());
        let report = LedgerReport::generate(
            &ledger.snapshot(),
            date(2023, 1, 1),
            date(2023, 12, 31),
            ReportFilter::All,
        );
        assert!(report.is_empty());
        assert_eq!(report.totals, ReportTotals::default());
        assert!(report.format_terminal().contains("Nenhum lançamento"));
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("Income".parse::<ReportFilter>().unwrap(), ReportFilter::Income);
        assert_eq!("folha".parse::<ReportFilter>().unwrap(), ReportFilter::Payroll);
        assert!("refunds".parse::<ReportFilter>().is_err());
    }
}
