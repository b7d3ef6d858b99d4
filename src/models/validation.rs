//! Validation errors shared by the ledger models

use std::fmt;

use super::money::Money;

/// Reasons a record is rejected before it reaches the ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is blank
    EmptyField(&'static str),
    /// A text field exceeds its maximum length
    TooLong { field: &'static str, len: usize },
    /// An amount that must be non-negative is negative
    NegativeAmount { field: &'static str, amount: Money },
    /// `paid_on` set without PAGO status, or PAGO without `paid_on`
    PaidOnMismatch,
    /// A payroll entry whose total does not match its components
    TotalMismatch { expected: Money, actual: Money },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, len } => {
                write!(f, "{} is too long ({} characters, max {})", field, len, MAX_NAME_LEN)
            }
            Self::NegativeAmount { field, amount } => {
                write!(f, "{} cannot be negative (got {})", field, amount)
            }
            Self::PaidOnMismatch => write!(f, "payment date must be set exactly when status is PAGO"),
            Self::TotalMismatch { expected, actual } => {
                write!(f, "total {} does not match components ({})", actual, expected)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Maximum length of names and labels
pub const MAX_NAME_LEN: usize = 120;

pub(crate) fn require_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    let len = value.chars().count();
    if len > MAX_NAME_LEN {
        return Err(ValidationError::TooLong { field, len });
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, amount: Money) -> Result<(), ValidationError> {
    if amount.is_negative() {
        return Err(ValidationError::NegativeAmount { field, amount });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name() {
        assert!(require_name("Name", "Ana").is_ok());
        assert_eq!(
            require_name("Name", "   "),
            Err(ValidationError::EmptyField("Name"))
        );
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            require_name("Name", &long),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_negative_amount_message() {
        let err = require_non_negative("Amount", Money::from_cents(-100)).unwrap_err();
        assert_eq!(err.to_string(), "Amount cannot be negative (got -R$ 1,00)");
    }
}
