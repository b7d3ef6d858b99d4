//! ContaPro - bookkeeping ledger for a small accounting office
//!
//! This library keeps the office's clients, employees, suppliers and bank
//! accounts together with the receivables, payables and payroll entries
//! that move money between them. A bank balance changes only when a linked
//! receivable or payable is settled.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (parties, banks, receivables, payroll, ...)
//! - `storage`: Key-value persistence with seed-data fallback
//! - `services`: The ledger and its operations
//! - `reports`: Ledger report, dashboard and payroll summaries
//! - `export`: CNAB240, CSV, JSON and YAML encoders
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `contapro` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use contapro::services::{Ledger, PaymentKind};
//! use contapro::storage::Storage;
//!
//! let mut ledger = Ledger::load(Storage::in_memory());
//! ledger.mark_as_paid(PaymentKind::Receivable, "rec-00000002")?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ContaproError, ContaproResult};
