//! Receivable model
//!
//! Money owed to the office by a client. The client's name is copied onto
//! the record when it is created; renaming the client later does not touch
//! existing receivables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BankId, ClientId, ReceivableId};
use super::money::Money;
use super::period::AccrualPeriod;
use super::status::ReceivableStatus;
use super::validation::{require_name, require_non_negative, ValidationError};

/// How a charge is collected or a bill is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    Boleto,
    #[serde(rename = "Débito Automático")]
    DebitoAutomatico,
    Pix,
}

impl DocumentType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "boleto" => Some(Self::Boleto),
            "debito" | "débito" | "debito automatico" | "débito automático" | "debit" => {
                Some(Self::DebitoAutomatico)
            }
            "pix" => Some(Self::Pix),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boleto => write!(f, "Boleto"),
            Self::DebitoAutomatico => write!(f, "Débito Automático"),
            Self::Pix => write!(f, "Pix"),
        }
    }
}

/// An amount a client owes the office
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receivable {
    pub id: ReceivableId,
    pub client_id: ClientId,

    /// Client name at the time the receivable was created
    pub client_name: String,

    /// Accrual period (competência)
    pub period: AccrualPeriod,

    pub due_date: NaiveDate,
    pub amount: Money,

    #[serde(default)]
    pub status: ReceivableStatus,

    #[serde(default)]
    pub payment_method: String,

    /// Bank account credited when the receivable is settled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<BankId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,

    /// Settlement date; present exactly when status is PAGO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

impl Receivable {
    /// Create a pending receivable
    pub fn new(
        client_id: ClientId,
        client_name: impl Into<String>,
        period: AccrualPeriod,
        due_date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            id: ReceivableId::new(),
            client_id,
            client_name: client_name.into(),
            period,
            due_date,
            amount,
            status: ReceivableStatus::Pendente,
            payment_method: String::new(),
            bank_id: None,
            document_type: None,
            category: None,
            description: None,
            installments: None,
            paid_on: None,
        }
    }

    pub fn with_bank(mut self, bank_id: BankId) -> Self {
        self.bank_id = Some(bank_id);
        self
    }

    pub fn with_document_type(mut self, document_type: DocumentType) -> Self {
        self.document_type = Some(document_type);
        self.payment_method = document_type.to_string();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    /// Pending and past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == ReceivableStatus::Pendente && self.due_date < today
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Client name", &self.client_name)?;
        require_non_negative("Amount", self.amount)?;
        if self.is_paid() != self.paid_on.is_some() {
            return Err(ValidationError::PaidOnMismatch);
        }
        Ok(())
    }
}

impl fmt::Display for Receivable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} due {} [{}]",
            self.client_name, self.amount, self.due_date, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Receivable {
        Receivable::new(
            ClientId::new(),
            "Padaria do João",
            AccrualPeriod::parse("2023-10").unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            Money::from_reais(800),
        )
    }

    #[test]
    fn test_new_is_pending_and_valid() {
        let rec = sample();
        assert_eq!(rec.status, ReceivableStatus::Pendente);
        assert!(rec.paid_on.is_none());
        assert!(rec.validate().is_ok());
    }

    #[test]
    fn test_paid_on_invariant() {
        let mut rec = sample();
        rec.status = ReceivableStatus::Pago;
        assert_eq!(rec.validate(), Err(ValidationError::PaidOnMismatch));

        rec.paid_on = Some(NaiveDate::from_ymd_opt(2023, 10, 14).unwrap());
        assert!(rec.validate().is_ok());

        rec.status = ReceivableStatus::Parcial;
        assert_eq!(rec.validate(), Err(ValidationError::PaidOnMismatch));
    }

    #[test]
    fn test_is_overdue() {
        let rec = sample();
        assert!(rec.is_overdue(NaiveDate::from_ymd_opt(2023, 10, 16).unwrap()));
        assert!(!rec.is_overdue(NaiveDate::from_ymd_opt(2023, 10, 15).unwrap()));
    }

    #[test]
    fn test_document_type_sets_payment_method() {
        let rec = sample().with_document_type(DocumentType::DebitoAutomatico);
        assert_eq!(rec.payment_method, "Débito Automático");
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"Débito Automático\""));
        assert!(!json.contains("paid_on"));
    }
}
