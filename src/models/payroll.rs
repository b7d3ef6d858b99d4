//! Payroll entry model
//!
//! One employee's compensation for one accrual period. The net total is
//! always `base + benefits + commission - deductions`; the ledger recomputes
//! it on every write.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::employee::Employee;
use super::ids::{EmployeeId, PayrollEntryId};
use super::money::Money;
use super::period::AccrualPeriod;
use super::status::PayrollStatus;
use super::validation::{require_name, require_non_negative, ValidationError};

/// A payroll row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollEntry {
    pub id: PayrollEntryId,
    pub employee_id: EmployeeId,

    /// Employee name as of the last time the entry was open
    pub employee_name: String,

    pub period: AccrualPeriod,
    pub base_salary: Money,

    #[serde(default)]
    pub benefits: Money,

    #[serde(default)]
    pub deductions: Money,

    #[serde(default)]
    pub commission: Money,

    /// Net amount paid
    pub total: Money,

    #[serde(default)]
    pub status: PayrollStatus,
}

impl PayrollEntry {
    /// Open entry for an employee with only the base salary
    pub fn for_employee(employee: &Employee, period: AccrualPeriod) -> Self {
        Self {
            id: PayrollEntryId::new(),
            employee_id: employee.id,
            employee_name: employee.name.clone(),
            period,
            base_salary: employee.base_salary,
            benefits: Money::zero(),
            deductions: Money::zero(),
            commission: Money::zero(),
            total: employee.base_salary,
            status: PayrollStatus::Aberta,
        }
    }

    /// Net total implied by the four components
    pub fn computed_total(&self) -> Money {
        self.base_salary + self.benefits + self.commission - self.deductions
    }

    /// Overwrite `total` with the value implied by the components
    pub fn recompute_total(&mut self) {
        self.total = self.computed_total();
    }

    /// Whether `total` agrees with the components
    pub fn is_consistent(&self) -> bool {
        self.total == self.computed_total()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Employee name", &self.employee_name)?;
        require_non_negative("Base salary", self.base_salary)?;
        require_non_negative("Benefits", self.benefits)?;
        require_non_negative("Deductions", self.deductions)?;
        require_non_negative("Commission", self.commission)?;
        if !self.is_consistent() {
            return Err(ValidationError::TotalMismatch {
                expected: self.computed_total(),
                actual: self.total,
            });
        }
        Ok(())
    }
}

impl fmt::Display for PayrollEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} [{}]",
            self.employee_name, self.period, self.total, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::ContractType;

    fn period() -> AccrualPeriod {
        AccrualPeriod::parse("2023-10").unwrap()
    }

    #[test]
    fn test_for_employee() {
        let emp = Employee::new("Carlos Souza", "Analista", Money::from_reais(3500), ContractType::Clt);
        let entry = PayrollEntry::for_employee(&emp, period());
        assert_eq!(entry.total, Money::from_reais(3500));
        assert_eq!(entry.status, PayrollStatus::Aberta);
        assert!(entry.is_consistent());
    }

    #[test]
    fn test_computed_total() {
        let emp = Employee::new("Carlos Souza", "Analista", Money::from_reais(3500), ContractType::Clt);
        let mut entry = PayrollEntry::for_employee(&emp, period());
        entry.benefits = Money::from_reais(600);
        entry.deductions = Money::from_reais(800);
        entry.commission = Money::from_reais(300);
        assert!(!entry.is_consistent());

        entry.recompute_total();
        assert_eq!(entry.total, Money::from_reais(3600));
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_total_mismatch() {
        let emp = Employee::new("Ana Silva", "Contadora", Money::from_reais(6500), ContractType::Clt);
        let mut entry = PayrollEntry::for_employee(&emp, period());
        entry.benefits = Money::from_reais(800);
        assert_eq!(
            entry.validate(),
            Err(ValidationError::TotalMismatch {
                expected: Money::from_reais(7300),
                actual: Money::from_reais(6500),
            })
        );
    }
}
