//! Core data models for ContaPro
//!
//! This module contains the plain value types of the ledger: parties
//! (clients, employees, suppliers), bank accounts, receivables, payables and
//! payroll entries. Entities refer to each other only by id.

pub mod bank;
pub mod client;
pub mod employee;
pub mod ids;
pub mod money;
pub mod payable;
pub mod payroll;
pub mod period;
pub mod receivable;
pub mod status;
pub mod supplier;
pub mod validation;

pub use bank::Bank;
pub use client::{Client, TaxRegime};
pub use employee::{ContractType, Employee};
pub use ids::{
    BankId, ClientId, CostCenterId, EmployeeId, EntityId, PayableId, PayrollEntryId, ReceivableId,
    SupplierId,
};
pub use money::Money;
pub use payable::Payable;
pub use payroll::PayrollEntry;
pub use period::AccrualPeriod;
pub use receivable::{DocumentType, Receivable};
pub use status::{ActiveStatus, PayableStatus, PayrollStatus, ReceivableStatus};
pub use supplier::{CostCenter, Supplier};
pub use validation::ValidationError;
