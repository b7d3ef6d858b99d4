//! Bank account model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BankId;
use super::money::Money;
use super::status::ActiveStatus;
use super::validation::{require_name, ValidationError};

/// A bank account the office moves money through
///
/// The balance is signed; there is no overdraft check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: BankId,

    /// Institution name (e.g. "Sicoob")
    pub name: String,

    /// Agência
    #[serde(default)]
    pub branch: String,

    /// Account number
    #[serde(default)]
    pub account: String,

    pub balance: Money,

    #[serde(default)]
    pub status: ActiveStatus,
}

impl Bank {
    pub fn new(name: impl Into<String>, balance: Money) -> Self {
        Self {
            id: BankId::new(),
            name: name.into(),
            branch: String::new(),
            account: String::new(),
            balance,
            status: ActiveStatus::Ativo,
        }
    }

    pub fn with_account(mut self, branch: impl Into<String>, account: impl Into<String>) -> Self {
        self.branch = branch.into();
        self.account = account.into();
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Bank name", &self.name)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.branch.is_empty() && self.account.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} (ag. {} / cc. {})", self.name, self.branch, self.account)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let bank = Bank::new("Sicoob", Money::from_reais(1000)).with_account("3001", "12345-6");
        assert_eq!(bank.to_string(), "Sicoob (ag. 3001 / cc. 12345-6)");
        assert_eq!(Bank::new("Oteropay", Money::zero()).to_string(), "Oteropay");
    }

    #[test]
    fn test_negative_balance_is_valid() {
        let bank = Bank::new("Sicoob", Money::from_cents(-5000));
        assert!(bank.validate().is_ok());
    }
}
