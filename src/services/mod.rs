//! Service layer for ContaPro
//!
//! The ledger is the only component that mutates collections. It handles
//! validation, cross-entity cascades (employee to payroll, payment to bank
//! balance) and persistence after every change.

pub mod financial;
pub mod ledger;
pub mod payroll;
pub mod registry;

pub use financial::{PaymentKind, Settlement};
pub use ledger::{find_by_ref, Keyed, Ledger, LedgerSnapshot};
