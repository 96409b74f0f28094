//! # Vault Service
//!
//! Application service orchestrating vault creation and one-time spends as
//! explicit load -> transition -> save flows over the `VaultStore` port.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::algorithms::{leaf_digest, verify_proof, MerkleTree};
use crate::codec::{locking_script, p2sh_address};
use crate::config::VaultConfig;
use crate::domain::{check_state, Digest, ProofNode, Secret, VaultError, VaultState};
use crate::ports::VaultStore;

/// A revealed one-time secret with everything a third party needs to check
/// membership under the vault root.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpendReveal {
    /// Index of the consumed leaf.
    pub index: usize,
    /// The revealed one-time secret.
    #[serde(with = "crate::domain::state::hex_digest")]
    pub secret: Secret,
    /// Leaf digest of the secret.
    #[serde(with = "crate::domain::state::hex_digest")]
    pub leaf: Digest,
    /// Sibling path, leaf-to-root.
    pub path: Vec<ProofNode>,
    /// The vault root the path recomputes to.
    #[serde(with = "crate::domain::state::hex_digest")]
    pub root: Digest,
}

/// Read-only vault summary.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultStatus {
    /// The public root commitment.
    #[serde(with = "crate::domain::state::hex_digest")]
    pub root: Digest,
    /// Derived display address.
    pub address: String,
    /// Unspent one-time keys remaining.
    pub remaining: usize,
    /// Total capacity fixed at creation.
    pub capacity: usize,
}

/// Vault Service - orchestrates creation and one-time spends.
pub struct VaultService<S: VaultStore> {
    /// Configuration.
    config: VaultConfig,
    /// Persistence port.
    store: S,
}

impl<S: VaultStore> VaultService<S> {
    /// Create a new service over a store.
    pub fn new(config: VaultConfig, store: S) -> Self {
        Self { config, store }
    }

    /// The configuration in use.
    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    /// Create a fresh vault and persist it.
    ///
    /// Generates `leaf_count` one-time secrets from the OS RNG, commits
    /// their leaf digests to a Merkle root, and derives the P2SH address of
    /// the root's locking script.
    pub fn create(&self) -> Result<VaultState, VaultError> {
        let secrets: Vec<Secret> = (0..self.config.leaf_count)
            .map(|_| {
                let mut secret = [0u8; 32];
                OsRng.fill_bytes(&mut secret);
                secret
            })
            .collect();

        let leaves: Vec<Digest> = secrets.iter().map(leaf_digest).collect();
        let tree = MerkleTree::new(leaves)?;
        let root = tree.root();
        let address = p2sh_address(&locking_script(&root), self.config.network);

        let state = VaultState::new(root, address, secrets);
        self.store.save(&state)?;

        tracing::info!(
            root = %hex::encode(root),
            address = %state.address,
            capacity = state.leaf_count(),
            "vault created"
        );
        Ok(state)
    }

    /// Spend the lowest-index unspent secret.
    ///
    /// Rebuilds the tree from the stored secrets, reveals the secret with
    /// its sibling path, and (when `mark_spent` is set) flips the spent flag
    /// and persists. Fails with [`VaultError::VaultExhausted`] when every
    /// flag is already set; an exhausted vault never re-reveals a secret.
    pub fn spend(&self, mark_spent: bool) -> Result<SpendReveal, VaultError> {
        let mut state = self.store.load()?;
        check_state(&state)?;

        let index = state.first_unspent().ok_or(VaultError::VaultExhausted)?;

        let leaves: Vec<Digest> = state.secrets.iter().map(leaf_digest).collect();
        let tree = MerkleTree::new(leaves)?;
        let path = tree.proof(index)?;

        let reveal = SpendReveal {
            index,
            secret: state.secrets[index],
            leaf: leaf_digest(&state.secrets[index]),
            path,
            root: tree.root(),
        };

        // The freshly generated proof must recompute the stored root; a
        // mismatch means the persisted state is corrupt.
        if !verify_proof(&reveal.leaf, &reveal.path, &state.root) {
            return Err(VaultError::InvalidState(
                "stored root does not match the secrets".to_string(),
            ));
        }

        if mark_spent {
            state.mark_spent(index)?;
            self.store.save(&state)?;
            tracing::info!(index, remaining = state.remaining(), "one-time key spent");
        } else {
            tracing::warn!(index, "secret revealed without marking it spent");
        }

        Ok(reveal)
    }

    /// Summarize the persisted vault.
    pub fn status(&self) -> Result<VaultStatus, VaultError> {
        let state = self.store.load()?;
        check_state(&state)?;
        Ok(VaultStatus {
            root: state.root,
            address: state.address.clone(),
            remaining: state.remaining(),
            capacity: state.leaf_count(),
        })
    }
}
