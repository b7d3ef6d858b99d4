//! Custom error types for ContaPro
//!
//! This module defines the error hierarchy for the ledger using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ContaPro operations
#[derive(Error, Debug)]
pub enum ContaproError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Export errors (CNAB, CSV, snapshots)
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContaproError {
    /// Create a "not found" error for clients
    pub fn client_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Client",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for employees
    pub fn employee_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Employee",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for suppliers
    pub fn supplier_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Supplier",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for banks
    pub fn bank_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Bank",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for receivables
    pub fn receivable_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Receivable",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payables
    pub fn payable_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payable",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for payroll entries
    pub fn payroll_entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Payroll entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a duplicate error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }
}

impl From<std::io::Error> for ContaproError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ContaproError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<crate::models::ValidationError> for ContaproError {
    fn from(err: crate::models::ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for ContaPro operations
pub type ContaproResult<T> = Result<T, ContaproError>;
