//! # Domain Errors
//!
//! Error types for the vault core.

use thiserror::Error;

/// Digest type alias (32-byte double-SHA-256 output)
pub type Digest = [u8; 32];

/// Secret type alias (32-byte one-time secret)
pub type Secret = [u8; 32];

/// Vault error types.
#[derive(Debug, Error)]
pub enum VaultError {
    /// A Merkle tree was requested over an empty leaf sequence.
    #[error("Cannot build a Merkle tree from an empty leaf set")]
    EmptyLeaves,

    /// A proof was requested for a leaf index outside the tree.
    #[error("Leaf index out of range: {index} >= {leaf_count}")]
    IndexOutOfRange {
        /// Requested leaf index
        index: usize,
        /// Number of leaves in the tree
        leaf_count: usize,
    },

    /// Structurally invalid proof (length mismatch versus tree depth).
    ///
    /// Distinct from a verification mismatch: a well-formed proof that
    /// recomputes to the wrong root is a normal `false`, not an error.
    #[error("Malformed proof: {0}")]
    MalformedProof(String),

    /// No persisted vault exists.
    #[error("No vault found")]
    VaultNotFound,

    /// Every one-time secret has been revealed; no unspent leaf remains.
    #[error("Vault exhausted: all one-time keys have been used")]
    VaultExhausted,

    /// Vault state violates a structural invariant.
    #[error("Invalid vault state: {0}")]
    InvalidState(String),

    /// Persistence failure other than a missing vault.
    #[error("Storage error: {0}")]
    Storage(String),
}
