//! # Algorithms
//!
//! The deterministic core: hashing primitives, Merkle tree construction and
//! proof generation, and standalone proof verification.

pub mod hasher;
pub mod merkle;
pub mod verifier;

pub use hasher::{double_sha256, hash160, leaf_digest, pair_hash, sha256};
pub use merkle::MerkleTree;
pub use verifier::{verify_proof, verify_proof_checked};
