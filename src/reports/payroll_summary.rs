//! Payroll summary for a set of entries (usually one accrual period)

use serde::Serialize;

use crate::models::{Money, PayrollEntry, PayrollStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PayrollSummary {
    pub entries: usize,
    /// Sum of base salaries
    pub gross: Money,
    pub benefits: Money,
    pub deductions: Money,
    /// Sum of entry totals
    pub net: Money,
    /// True when every entry is FECHADA (vacuously true for no entries)
    pub all_closed: bool,
}

impl PayrollSummary {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a PayrollEntry>,
    {
        entries.into_iter().fold(
            Self {
                all_closed: true,
                ..Self::default()
            },
            |mut summary, entry| {
                summary.entries += 1;
                summary.gross += entry.base_salary;
                summary.benefits += entry.benefits;
                summary.deductions += entry.deductions;
                summary.net += entry.total;
                summary.all_closed &= entry.status == PayrollStatus::Fechada;
                summary
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AccrualPeriod;
    use crate::services::Ledger;
    use crate::storage::Storage;

    #[test]
    fn test_october_summary() {
        let ledger = Ledger::load(Storage::in_memory());
        let october = ledger.payroll_for(AccrualPeriod::parse("2023-10").unwrap());
        let summary = PayrollSummary::from_entries(october);

        assert_eq!(summary.entries, 2);
        assert_eq!(summary.gross, Money::from_reais(10_000));
        assert_eq!(summary.deductions, Money::from_reais(2300));
        assert_eq!(summary.net, Money::from_reais(9300));
        assert!(summary.all_closed);
    }

    #[test]
    fn test_open_entry_clears_all_closed() {
        let ledger = Ledger::load(Storage::in_memory());
        let summary = PayrollSummary::from_entries(ledger.payroll());
        assert_eq!(summary.entries, 3);
        assert!(!summary.all_closed);
    }
}
