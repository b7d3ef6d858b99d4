//! Supplier and cost center models

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CostCenterId, SupplierId};
use super::status::ActiveStatus;
use super::validation::{require_name, ValidationError};

/// A vendor the office pays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,

    /// CNPJ
    #[serde(default)]
    pub tax_id: String,

    /// Free-form category label (e.g. "Software")
    #[serde(default)]
    pub category: String,

    /// Contact e-mail or phone
    #[serde(default)]
    pub contact: String,

    #[serde(default)]
    pub status: ActiveStatus,
}

impl Supplier {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: SupplierId::new(),
            name: name.into(),
            tax_id: String::new(),
            category: category.into(),
            contact: String::new(),
            status: ActiveStatus::Ativo,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Supplier name", &self.name)
    }
}

impl fmt::Display for Supplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Internal department an expense is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostCenter {
    pub id: CostCenterId,
    pub name: String,
}

impl CostCenter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CostCenterId::new(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_defaults() {
        let s = Supplier::new("AWS Services", "Software");
        assert_eq!(s.status, ActiveStatus::Ativo);
        assert!(s.tax_id.is_empty());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let json = format!(r#"{{"id":"{}","name":"Papelaria"}}"#, SupplierId::new().as_uuid());
        let s: Supplier = serde_json::from_str(&json).unwrap();
        assert_eq!(s.name, "Papelaria");
        assert!(s.category.is_empty());
    }
}
