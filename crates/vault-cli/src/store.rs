//! # JSON File Store
//!
//! `VaultStore` adapter persisting the vault to a single JSON file in the
//! interchange format: hex `root`, Base58Check `address`, hex `secrets`,
//! parallel boolean `spent_mask`.

use std::fs;
use std::path::{Path, PathBuf};

use vault_core::{VaultError, VaultState, VaultStore};

/// Default vault file name in the working directory.
pub const DEFAULT_VAULT_FILE: &str = "quantum_vault.json";

/// File-backed vault store.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store over a specific file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store over `quantum_vault.json` in the working directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_VAULT_FILE)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Does a persisted vault exist at this path?
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl VaultStore for JsonFileStore {
    fn load(&self) -> Result<VaultState, VaultError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(VaultError::VaultNotFound);
            }
            Err(e) => return Err(VaultError::Storage(e.to_string())),
        };
        serde_json::from_str(&contents).map_err(|e| VaultError::Storage(e.to_string()))
    }

    fn save(&self, state: &VaultState) -> Result<(), VaultError> {
        let json = serde_json::to_string_pretty(state)
            .map_err(|e| VaultError::Storage(e.to_string()))?;
        fs::write(&self.path, json).map_err(|e| VaultError::Storage(e.to_string()))
    }
}
