//! Lifecycle status enums
//!
//! Serialized with the upper-case Portuguese labels used throughout the
//! office (`PENDENTE`, `PAGO`, ...), which is also how they are displayed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Registration status of clients, employees, suppliers and banks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActiveStatus {
    #[default]
    Ativo,
    Inativo,
}

impl ActiveStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Ativo)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ATIVO" | "ACTIVE" => Some(Self::Ativo),
            "INATIVO" | "INACTIVE" => Some(Self::Inativo),
            _ => None,
        }
    }
}

impl fmt::Display for ActiveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ativo => write!(f, "ATIVO"),
            Self::Inativo => write!(f, "INATIVO"),
        }
    }
}

/// Status of a receivable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReceivableStatus {
    #[default]
    Pendente,
    Pago,
    Atrasado,
    Parcial,
}

impl ReceivableStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Pago)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDENTE" => Some(Self::Pendente),
            "PAGO" => Some(Self::Pago),
            "ATRASADO" => Some(Self::Atrasado),
            "PARCIAL" => Some(Self::Parcial),
            _ => None,
        }
    }
}

impl fmt::Display for ReceivableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pendente => write!(f, "PENDENTE"),
            Self::Pago => write!(f, "PAGO"),
            Self::Atrasado => write!(f, "ATRASADO"),
            Self::Parcial => write!(f, "PARCIAL"),
        }
    }
}

/// Status of a payable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayableStatus {
    #[default]
    Pendente,
    Pago,
    Atrasado,
}

impl PayableStatus {
    pub fn is_paid(&self) -> bool {
        matches!(self, Self::Pago)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDENTE" => Some(Self::Pendente),
            "PAGO" => Some(Self::Pago),
            "ATRASADO" => Some(Self::Atrasado),
            _ => None,
        }
    }
}

impl fmt::Display for PayableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pendente => write!(f, "PENDENTE"),
            Self::Pago => write!(f, "PAGO"),
            Self::Atrasado => write!(f, "ATRASADO"),
        }
    }
}

/// Status of a payroll entry
///
/// `Aberta` entries still follow their employee's salary; `Fechada` and
/// `Pago` entries are frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayrollStatus {
    #[default]
    Aberta,
    Fechada,
    Pago,
}

impl PayrollStatus {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Aberta)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ABERTA" | "OPEN" => Some(Self::Aberta),
            "FECHADA" | "CLOSED" => Some(Self::Fechada),
            "PAGO" | "PAID" => Some(Self::Pago),
            _ => None,
        }
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aberta => write!(f, "ABERTA"),
            Self::Fechada => write!(f, "FECHADA"),
            Self::Pago => write!(f, "PAGO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_labels() {
        assert_eq!(
            serde_json::to_string(&ReceivableStatus::Atrasado).unwrap(),
            "\"ATRASADO\""
        );
        assert_eq!(
            serde_json::to_string(&PayrollStatus::Fechada).unwrap(),
            "\"FECHADA\""
        );
        let s: ActiveStatus = serde_json::from_str("\"INATIVO\"").unwrap();
        assert_eq!(s, ActiveStatus::Inativo);
    }

    #[test]
    fn test_display_matches_serialization() {
        assert_eq!(PayableStatus::Pago.to_string(), "PAGO");
        assert_eq!(ReceivableStatus::Parcial.to_string(), "PARCIAL");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(ReceivableStatus::parse("pago"), Some(ReceivableStatus::Pago));
        assert_eq!(PayableStatus::parse("parcial"), None);
        assert_eq!(ActiveStatus::parse("inativo"), Some(ActiveStatus::Inativo));
    }
}
