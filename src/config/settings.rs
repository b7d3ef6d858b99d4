//! User settings for ContaPro
//!
//! Company profile, CNAB bank profile and the persistence policy. Every
//! field has a default so that older or hand-edited `config.json` files keep
//! loading.

use serde::{Deserialize, Serialize};

use super::paths::ContaproPaths;
use crate::error::ContaproError;
use crate::storage::PersistencePolicy;

/// The office itself, as it appears on bank files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,

    /// CNPJ, punctuation allowed
    pub tax_id: String,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "ContaPro Contabilidade".to_string(),
            tax_id: "00.000.000/0001-00".to_string(),
        }
    }
}

/// The bank account salary batches are paid from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CnabProfile {
    /// COMPE bank code (e.g. "756" for Sicoob)
    pub bank_code: String,
    pub bank_name: String,
    pub branch: String,
    pub account: String,

    /// Sequence number of the next generated file (NSA)
    pub next_sequence: u32,
}

impl Default for CnabProfile {
    fn default() -> Self {
        Self {
            bank_code: "756".to_string(),
            bank_name: "Sicoob".to_string(),
            branch: "0001".to_string(),
            account: "000000".to_string(),
            next_sequence: 1,
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// What happens when a collection cannot be written
    #[serde(default)]
    pub persistence: PersistencePolicy,

    #[serde(default)]
    pub company: CompanyProfile,

    #[serde(default)]
    pub cnab: CnabProfile,
}

fn default_schema_version() -> u32 {
    1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            persistence: PersistencePolicy::default(),
            company: CompanyProfile::default(),
            cnab: CnabProfile::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &ContaproPaths) -> Result<Self, ContaproError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ContaproError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ContaproError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ContaproPaths) -> Result<(), ContaproError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ContaproError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ContaproError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.persistence, PersistencePolicy::BestEffort);
        assert_eq!(settings.cnab.bank_code, "756");
        assert_eq!(settings.cnab.next_sequence, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContaproPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.persistence = PersistencePolicy::Durable;
        settings.company.name = "Escritório Aguiar".to_string();
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.persistence, PersistencePolicy::Durable);
        assert_eq!(loaded.company.name, "Escritório Aguiar");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"persistence":"durable"}"#).unwrap();
        assert_eq!(settings.persistence, PersistencePolicy::Durable);
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.cnab.bank_name, "Sicoob");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ContaproPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ContaproError::Config(_)));
    }
}
