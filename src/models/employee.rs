//! Employee model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EmployeeId;
use super::money::Money;
use super::status::ActiveStatus;
use super::validation::{require_name, require_non_negative, ValidationError};

/// Employment contract type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContractType {
    #[default]
    #[serde(rename = "CLT")]
    Clt,
    #[serde(rename = "PJ")]
    Pj,
    #[serde(rename = "Estágio")]
    Estagio,
}

impl ContractType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "clt" => Some(Self::Clt),
            "pj" => Some(Self::Pj),
            "estagio" | "estágio" | "intern" => Some(Self::Estagio),
            _ => None,
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clt => write!(f, "CLT"),
            Self::Pj => write!(f, "PJ"),
            Self::Estagio => write!(f, "Estágio"),
        }
    }
}

/// A staff member of the office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,

    /// Job title
    #[serde(default)]
    pub role: String,

    pub base_salary: Money,

    #[serde(default)]
    pub contract_type: ContractType,

    #[serde(default)]
    pub status: ActiveStatus,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        base_salary: Money,
        contract_type: ContractType,
    ) -> Self {
        Self {
            id: EmployeeId::new(),
            name: name.into(),
            role: role.into(),
            base_salary,
            contract_type,
            status: ActiveStatus::Ativo,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Employee name", &self.name)?;
        require_non_negative("Base salary", self.base_salary)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.role)
    }
}
