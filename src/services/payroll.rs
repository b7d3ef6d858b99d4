//! Employees and payroll
//!
//! Employee changes cascade into payroll: a new employee gets an open entry
//! for the current period, a salary or name change flows into the
//! employee's ABERTA entries only, and removing an employee removes all of
//! their entries. Every payroll write recomputes the entry total.

use super::ledger::{contains, find, find_by_ref, prepended, replaced, without, Ledger};
use super::registry::find_named;
use crate::error::{ContaproError, ContaproResult};
use crate::models::{
    AccrualPeriod, Employee, EmployeeId, PayrollEntry, PayrollEntryId, PayrollStatus,
};
use crate::storage::Collection;

impl Ledger {
    /// Add an employee together with their open entry for the current period
    pub fn add_employee(&mut self, employee: Employee) -> ContaproResult<Employee> {
        employee.validate()?;
        if contains(&self.employees, employee.id) {
            return Err(ContaproError::Duplicate {
                entity_type: "Employee",
                identifier: employee.id.to_string(),
            });
        }

        let entry = PayrollEntry::for_employee(&employee, AccrualPeriod::current());
        self.employees = prepended(&self.employees, employee.clone());
        self.payroll = prepended(&self.payroll, entry);

        let saved = self.persist(Collection::Employees, &self.employees);
        saved.and(self.persist(Collection::Payroll, &self.payroll))?;
        Ok(employee)
    }

    /// Replace an employee; open payroll entries follow the new name and
    /// base salary, closed ones are left as they are
    pub fn update_employee(&mut self, employee: Employee) -> ContaproResult<()> {
        employee.validate()?;
        let id = employee.id;
        let employees = replaced(&self.employees, employee.clone())
            .ok_or_else(|| ContaproError::employee_not_found(id.to_string()))?;

        let mut touched = 0usize;
        let payroll: Vec<PayrollEntry> = self
            .payroll
            .iter()
            .cloned()
            .map(|mut entry| {
                if entry.employee_id == id && entry.status.is_open() {
                    entry.employee_name = employee.name.clone();
                    entry.base_salary = employee.base_salary;
                    entry.recompute_total();
                    touched += 1;
                }
                entry
            })
            .collect();

        self.employees = employees;
        let saved = self.persist(Collection::Employees, &self.employees);
        if touched > 0 {
            self.payroll = payroll;
            saved.and(self.persist(Collection::Payroll, &self.payroll))
        } else {
            saved
        }
    }

    /// Remove an employee and every payroll entry that refers to them
    pub fn remove_employee(&mut self, id: EmployeeId) -> ContaproResult<bool> {
        let Some(employees) = without(&self.employees, id) else {
            return Ok(false);
        };

        let payroll: Vec<PayrollEntry> = self
            .payroll
            .iter()
            .filter(|entry| entry.employee_id != id)
            .cloned()
            .collect();
        let removed_entries = self.payroll.len() - payroll.len();

        self.employees = employees;
        self.payroll = payroll;
        tracing::debug!(%id, removed_entries, "employee removed");

        let saved = self.persist(Collection::Employees, &self.employees);
        saved.and(self.persist(Collection::Payroll, &self.payroll))?;
        Ok(true)
    }

    pub fn find_employee(&self, reference: &str) -> Option<&Employee> {
        find_named(&self.employees, reference, |e| &e.name)
    }

    pub fn find_payroll_entry(&self, reference: &str) -> Option<&PayrollEntry> {
        find_by_ref(&self.payroll, reference)
    }

    /// Entries of one accrual period, in storage order
    pub fn payroll_for(&self, period: AccrualPeriod) -> Vec<&PayrollEntry> {
        self.payroll.iter().filter(|e| e.period == period).collect()
    }

    /// Close every payroll entry, whatever its status
    ///
    /// Returns how many entries were not already FECHADA.
    pub fn close_payroll(&mut self) -> ContaproResult<usize> {
        let changed = self
            .payroll
            .iter()
            .filter(|e| e.status != PayrollStatus::Fechada)
            .count();

        self.payroll = self
            .payroll
            .iter()
            .cloned()
            .map(|mut entry| {
                entry.status = PayrollStatus::Fechada;
                entry
            })
            .collect();

        tracing::info!(closed = changed, "payroll closed");
        self.persist(Collection::Payroll, &self.payroll)?;
        Ok(changed)
    }

    /// Replace a payroll entry by id; the stored total is always recomputed
    /// from base, benefits, commission and deductions
    ///
    /// A FECHADA entry is final and cannot be changed or reopened.
    pub fn update_payroll_entry(&mut self, mut entry: PayrollEntry) -> ContaproResult<PayrollEntry> {
        let id = entry.id;
        let stored = find(&self.payroll, id)
            .ok_or_else(|| ContaproError::payroll_entry_not_found(id.to_string()))?;
        if stored.status == PayrollStatus::Fechada {
            return Err(ContaproError::Validation(format!(
                "Payroll entry {} ({} {}) is FECHADA and cannot be changed",
                id, stored.employee_name, stored.period
            )));
        }

        entry.recompute_total();
        entry.validate()?;
        self.ensure_unique_slot(&entry, Some(id))?;

        self.payroll = replaced(&self.payroll, entry.clone())
            .ok_or_else(|| ContaproError::payroll_entry_not_found(id.to_string()))?;
        self.persist(Collection::Payroll, &self.payroll)?;
        Ok(entry)
    }

    /// Insert a payroll entry; an employee has at most one entry per period
    pub fn add_payroll_entry(&mut self, mut entry: PayrollEntry) -> ContaproResult<PayrollEntry> {
        entry.recompute_total();
        entry.validate()?;
        if contains(&self.payroll, entry.id) {
            return Err(ContaproError::Duplicate {
                entity_type: "Payroll entry",
                identifier: entry.id.to_string(),
            });
        }
        self.ensure_unique_slot(&entry, None)?;

        self.payroll = prepended(&self.payroll, entry.clone());
        self.persist(Collection::Payroll, &self.payroll)?;
        Ok(entry)
    }

    /// Open an entry for every active employee that has none in `period`
    ///
    /// Running it twice for the same period creates nothing the second time.
    pub fn generate_payroll(&mut self, period: AccrualPeriod) -> ContaproResult<Vec<PayrollEntry>> {
        let created: Vec<PayrollEntry> = self
            .employees
            .iter()
            .filter(|employee| employee.status.is_active())
            .filter(|employee| {
                !self
                    .payroll
                    .iter()
                    .any(|e| e.employee_id == employee.id && e.period == period)
            })
            .map(|employee| PayrollEntry::for_employee(employee, period))
            .collect();

        if created.is_empty() {
            return Ok(created);
        }

        let mut next = created.clone();
        next.extend_from_slice(&self.payroll);
        self.payroll = next;

        tracing::info!(%period, created = created.len(), "payroll generated");
        self.persist(Collection::Payroll, &self.payroll)?;
        Ok(created)
    }

    fn ensure_unique_slot(
        &self,
        entry: &PayrollEntry,
        ignore: Option<PayrollEntryId>,
    ) -> ContaproResult<()> {
        let taken = self.payroll.iter().any(|existing| {
            Some(existing.id) != ignore
                && existing.employee_id == entry.employee_id
                && existing.period == entry.period
        });

        if taken {
            return Err(ContaproError::Duplicate {
                entity_type: "Payroll entry",
                identifier: format!("{} {}", entry.employee_name, entry.period),
            });
        }
        Ok(())
    }
}
