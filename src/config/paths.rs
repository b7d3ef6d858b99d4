//! Path management for ContaPro
//!
//! ## Path Resolution Order
//!
//! 1. `CONTAPRO_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `contapro`
//!    (`~/.config/contapro` on Linux, `%APPDATA%\ContaPro\contapro` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ContaproError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CONTAPRO_DATA_DIR";

/// Manages all paths used by ContaPro
#[derive(Debug, Clone)]
pub struct ContaproPaths {
    base_dir: PathBuf,
}

impl ContaproPaths {
    /// Resolve the base directory from the environment or platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, ContaproError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("br", "ContaPro", "contapro")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ContaproError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per ledger collection
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for generated CNAB and CSV files
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ContaproError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ContaproError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ContaproError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir())
            .map_err(|e| ContaproError::Io(format!("Failed to create exports directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}
