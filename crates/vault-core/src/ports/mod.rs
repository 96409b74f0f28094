//! # Ports
//!
//! Outbound persistence trait the core consumes. Adapters (JSON file store,
//! test doubles) live outside the core; a simple in-memory implementation is
//! provided here for tests and embedding.
//!
//! The core requires single-writer discipline over a persisted vault: at
//! most one in-flight load-mutate-save of a given vault at a time, enforced
//! by the host.

use std::sync::Mutex;

use crate::domain::{VaultError, VaultState};

/// Vault persistence - outbound port.
pub trait VaultStore: Send + Sync {
    /// Load the persisted vault.
    ///
    /// Fails with [`VaultError::VaultNotFound`] when nothing has been
    /// persisted yet; other IO failures map to [`VaultError::Storage`].
    fn load(&self) -> Result<VaultState, VaultError>;

    /// Persist the vault, replacing any previous state.
    fn save(&self, state: &VaultState) -> Result<(), VaultError>;
}

/// In-memory vault store for tests and embedded use.
#[derive(Default)]
pub struct MemoryVaultStore {
    state: Mutex<Option<VaultState>>,
}

impl MemoryVaultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a state.
    pub fn with_state(state: VaultState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

impl VaultStore for MemoryVaultStore {
    fn load(&self) -> Result<VaultState, VaultError> {
        self.state
            .lock()
            .map_err(|e| VaultError::Storage(e.to_string()))?
            .clone()
            .ok_or(VaultError::VaultNotFound)
    }

    fn save(&self, state: &VaultState) -> Result<(), VaultError> {
        *self
            .state
            .lock()
            .map_err(|e| VaultError::Storage(e.to_string()))? = Some(state.clone());
        Ok(())
    }
}
