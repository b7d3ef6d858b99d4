//! Configuration module for ContaPro
//!
//! - Platform path resolution with an environment override
//! - User settings persistence (company, CNAB bank profile, persistence policy)

pub mod paths;
pub mod settings;

pub use paths::ContaproPaths;
pub use settings::{CnabProfile, CompanyProfile, Settings};
