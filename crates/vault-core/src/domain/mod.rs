//! # Domain Layer
//!
//! Core types for the one-time-signature vault: digests, secrets, proof
//! nodes, vault state, invariants, and errors.

pub mod errors;
pub mod invariants;
pub mod state;
pub mod value_objects;

pub use errors::{Digest, Secret, VaultError};
pub use invariants::{
    check_state, expected_proof_len, DEFAULT_LEAF_COUNT, DIGEST_LEN, SECRET_LEN,
};
pub use state::VaultState;
pub use value_objects::{Position, ProofNode};
