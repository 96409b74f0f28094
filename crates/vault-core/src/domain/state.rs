//! # Vault State
//!
//! The persisted value of a vault: root commitment, derived address, the
//! ordered one-time secrets, and the parallel spent mask.
//!
//! State is created once at vault creation and mutated only by flipping one
//! spent flag per successful spend; it never grows or shrinks. Persistence
//! is explicit load -> transition -> save through the `VaultStore` port; no
//! process-wide mutable vault exists.

use serde::{Deserialize, Serialize};

use super::errors::{Digest, Secret, VaultError};

/// Full state of a one-time-signature vault.
///
/// Serializes to the persisted interchange format: `root` as lowercase hex,
/// `secrets` as hex strings, `spent_mask` as a parallel boolean list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultState {
    /// Merkle root committing to all leaves (public).
    #[serde(with = "hex_digest")]
    pub root: Digest,
    /// Derived P2SH address. Display-only cache: always recomputable from
    /// `root`, never authoritative.
    pub address: String,
    /// Ordered one-time secrets (private). Leaf i = double_sha256(secrets[i]).
    #[serde(with = "hex_secrets")]
    pub secrets: Vec<Secret>,
    /// Parallel spent flags: `spent_mask[i]` is true once secret i has been
    /// revealed.
    #[serde(rename = "spent_mask")]
    pub spent: Vec<bool>,
}

impl VaultState {
    /// Create a fresh vault state with an all-unspent mask.
    pub fn new(root: Digest, address: String, secrets: Vec<Secret>) -> Self {
        let spent = vec![false; secrets.len()];
        Self {
            root,
            address,
            secrets,
            spent,
        }
    }

    /// Number of leaves (fixed at creation).
    pub fn leaf_count(&self) -> usize {
        self.secrets.len()
    }

    /// Index of the lowest unspent secret, if any remains.
    pub fn first_unspent(&self) -> Option<usize> {
        self.spent.iter().position(|used| !used)
    }

    /// Number of unspent secrets remaining.
    pub fn remaining(&self) -> usize {
        self.spent.iter().filter(|used| !**used).count()
    }

    /// Have all one-time secrets been revealed?
    pub fn is_exhausted(&self) -> bool {
        self.spent.iter().all(|used| *used)
    }

    /// Mark the secret at `index` as spent.
    pub fn mark_spent(&mut self, index: usize) -> Result<(), VaultError> {
        if index >= self.spent.len() {
            return Err(VaultError::IndexOutOfRange {
                index,
                leaf_count: self.spent.len(),
            });
        }
        self.spent[index] = true;
        Ok(())
    }
}

/// Serde adapter: `[u8; 32]` <-> lowercase hex string, no prefix.
pub mod hex_digest {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::errors::Digest;

    /// Serialize a digest as lowercase hex.
    pub fn serialize<S: Serializer>(value: &Digest, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(value))
    }

    /// Deserialize a digest from a 64-character hex string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Digest, D::Error> {
        let s = String::deserialize(deserializer)?;
        let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
        bytes
            .try_into()
            .map_err(|_| serde::de::Error::custom("expected 32 bytes of hex"))
    }
}

/// Serde adapter: `Vec<[u8; 32]>` <-> list of lowercase hex strings.
pub mod hex_secrets {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::errors::Secret;

    /// Serialize each secret as lowercase hex.
    pub fn serialize<S: Serializer>(value: &[Secret], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(value.iter().map(hex::encode))
    }

    /// Deserialize secrets from hex strings.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<Secret>, D::Error> {
        let strings = Vec::<String>::deserialize(deserializer)?;
        strings
            .into_iter()
            .map(|s| {
                let bytes = hex::decode(&s).map_err(serde::de::Error::custom)?;
                bytes
                    .try_into()
                    .map_err(|_| serde::de::Error::custom("expected 32 bytes of hex"))
            })
            .collect()
    }
}
