//! Client model
//!
//! Companies and individuals the office keeps books for.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ClientId;
use super::money::Money;
use super::status::ActiveStatus;
use super::validation::{require_name, require_non_negative, ValidationError};

/// Brazilian corporate tax regime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TaxRegime {
    #[default]
    #[serde(rename = "Simples Nacional")]
    SimplesNacional,
    #[serde(rename = "Lucro Presumido")]
    LucroPresumido,
    #[serde(rename = "Lucro Real")]
    LucroReal,
}

impl TaxRegime {
    /// Parse a regime from its label or a short alias
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(|c: char| c == '_' || c == '-', " ").as_str() {
            "simples nacional" | "simples" => Some(Self::SimplesNacional),
            "lucro presumido" | "presumido" => Some(Self::LucroPresumido),
            "lucro real" | "real" => Some(Self::LucroReal),
            _ => None,
        }
    }
}

impl fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SimplesNacional => write!(f, "Simples Nacional"),
            Self::LucroPresumido => write!(f, "Lucro Presumido"),
            Self::LucroReal => write!(f, "Lucro Real"),
        }
    }
}

/// A bookkeeping client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,

    /// Legal or trade name
    pub name: String,

    /// CNPJ or CPF, as typed (punctuation kept)
    pub tax_id: String,

    pub tax_regime: TaxRegime,

    /// Monthly bookkeeping fee charged to the client
    pub monthly_fee: Money,

    #[serde(default)]
    pub status: ActiveStatus,

    /// Whether the client has overdue fees
    #[serde(default)]
    pub delinquent: bool,
}

impl Client {
    /// Create a new active, non-delinquent client
    pub fn new(
        name: impl Into<String>,
        tax_id: impl Into<String>,
        tax_regime: TaxRegime,
        monthly_fee: Money,
    ) -> Self {
        Self {
            id: ClientId::new(),
            name: name.into(),
            tax_id: tax_id.into(),
            tax_regime,
            monthly_fee,
            status: ActiveStatus::Ativo,
            delinquent: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name("Client name", &self.name)?;
        require_non_negative("Monthly fee", self.monthly_fee)
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.tax_regime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_defaults() {
        let client = Client::new(
            "Tech Solutions LTDA",
            "12.345.678/0001-90",
            TaxRegime::LucroPresumido,
            Money::from_reais(2500),
        );
        assert_eq!(client.status, ActiveStatus::Ativo);
        assert!(!client.delinquent);
        assert!(client.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_negative_fee() {
        let client = Client::new("X", "", TaxRegime::SimplesNacional, Money::from_cents(-1));
        assert!(matches!(
            client.validate(),
            Err(ValidationError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_regime_labels() {
        let json = serde_json::to_string(&TaxRegime::LucroReal).unwrap();
        assert_eq!(json, "\"Lucro Real\"");
        assert_eq!(TaxRegime::parse("lucro_presumido"), Some(TaxRegime::LucroPresumido));
        assert_eq!(TaxRegime::parse("simples"), Some(TaxRegime::SimplesNacional));
        assert_eq!(TaxRegime::parse("mei"), None);
    }
}
