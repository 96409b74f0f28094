//! # Quantum-Vault Core
//!
//! Merkle-tree one-time-signature vault.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Commit a fixed-capacity set of one-time secrets to a single public root
//! hash, then reveal each secret at most once together with its Merkle path:
//! - Public key = Merkle root (and the P2SH address derived from it)
//! - Private key = the list of one-time secrets (leaves)
//! - Signing = revealing one secret + its sibling path
//!
//! Spending the same root multiple times never reuses a one-time key: each
//! spend consumes the lowest-index unspent secret and flips its spent flag.
//!
//! ## Module Structure
//!
//! ```text
//! vault-core/
//! ├── domain/          # Digest, Secret, ProofNode, VaultState, errors
//! ├── algorithms/      # Hashing, Merkle tree build + proof, verification
//! ├── codec/           # Base58Check, locking script, P2SH address
//! ├── ports/           # VaultStore trait + in-memory mock
//! ├── application/     # VaultService orchestrating create/spend/status
//! └── config.rs        # VaultConfig
//! ```
//!
//! ## Determinism
//!
//! Tree construction, proof generation, verification, and address encoding
//! are pure functions over their inputs. Identical leaf sequences produce
//! identical roots, proofs, and addresses across runs and implementations.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod codec;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use algorithms::{
    double_sha256, hash160, leaf_digest, pair_hash, sha256,
    MerkleTree,
    verify_proof, verify_proof_checked,
};
pub use application::{SpendReveal, VaultService, VaultStatus};
pub use codec::{base58check_encode, locking_script, p2sh_address, LOCKING_SCRIPT_LEN};
pub use config::{Network, VaultConfig};
pub use domain::{
    Digest, Secret, VaultError,
    Position, ProofNode, VaultState,
    expected_proof_len, DEFAULT_LEAF_COUNT, DIGEST_LEN, SECRET_LEN,
};
pub use ports::{MemoryVaultStore, VaultStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
