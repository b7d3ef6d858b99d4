//! Payable model
//!
//! Bills the office owes its suppliers, attributed to a cost center.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BankId, CostCenterId, PayableId};
use super::money::Money;
use super::receivable::DocumentType;
use super::status::PayableStatus;
use super::supplier::CostCenter;
use super::validation::{require_name, require_non_negative, ValidationError};

/// An amount the office owes a supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payable {
    pub id: PayableId,

    /// Supplier name
    pub supplier: String,

    #[serde(default)]
    pub category: String,

    pub cost_center_id: CostCenterId,

    /// Cost center name at the time the payable was created
    pub cost_center_name: String,

    pub due_date: NaiveDate,
    pub amount: Money,

    #[serde(default)]
    pub status: PayableStatus,

    /// Bank account debited when the payable is settled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_id: Option<BankId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<u32>,

    /// Settlement date; present exactly when status is PAGO
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_on: Option<NaiveDate>,
}

impl Payable {
    /// Create a pending payable
    pub fn new(
        supplier: impl Into<String>,
        category: impl Into<String>,
        cost_center: &CostCenter,
        due_date: NaiveDate,
        amount: Money,
    ) -> Self {
        Self {
            id: PayableId::new(),
            supplier: supplier.into(),
            category: category.into(),
            cost_center_id: cost_center.id,
            cost_center_name: cost_center.name.clone(),
            due_date,
            amount,
            status: PayableStatus::Pendente,
            bank_id: None,
            document_type: None,
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
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn is_paid(&self) -> bool {
        self.status.is_paid()
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == PayableStatus::Pendente && self.due_date < today
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Supplier", &self.supplier)?;
        require_non_negative("Amount", self.amount)?;
        if self.is_paid() != self.paid_on.is_some() {
            return Err(ValidationError::PaidOnMismatch);
        }
        Ok(())
    }
}

impl fmt::Display for Payable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} due {} [{}]",
            self.supplier, self.amount, self.due_date, self.status
        )
    }
}
