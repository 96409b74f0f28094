//! # Proof Verification
//!
//! Standalone recomputation of a Merkle root from one leaf and its sibling
//! path. Independent of `MerkleTree`: a third party holding only the leaf,
//! the ordered `(sibling, side)` list, and the claimed root can run it.
//!
//! Note the asymmetry with generation: the numeric leaf index is needed only
//! to *generate* a proof. Verification never consumes it — the per-level
//! side flags already encode which operand position the running hash takes.

use crate::algorithms::hasher::pair_hash;
use crate::domain::{expected_proof_len, Digest, Position, ProofNode, VaultError};

/// Recompute the root from `leaf` and `path`, compare against
/// `expected_root`.
///
/// Pure and total: a structurally valid proof that recomputes to a different
/// root is a normal `false`, never an error. An empty path asserts that the
/// leaf itself is the root (single-leaf tree).
pub fn verify_proof(leaf: &Digest, path: &[ProofNode], expected_root: &Digest) -> bool {
    let mut current = *leaf;

    for node in path {
        current = match node.position {
            Position::Left => pair_hash(&node.hash, &current),
            Position::Right => pair_hash(&current, &node.hash),
        };
    }

    current == *expected_root
}

/// Verify with structural validation against a known tree shape.
///
/// Fails with [`VaultError::MalformedProof`] when the path length does not
/// match the depth implied by `leaf_count` (in particular, an empty proof
/// for a multi-leaf tree). Digest widths are enforced by the type system, so
/// length is the only structural check left to make.
pub fn verify_proof_checked(
    leaf: &Digest,
    path: &[ProofNode],
    expected_root: &Digest,
    leaf_count: usize,
) -> Result<bool, VaultError> {
    let expected_len = expected_proof_len(leaf_count);
    if path.len() != expected_len {
        return Err(VaultError::MalformedProof(format!(
            "expected {} path entries for {} leaves, got {}",
            expected_len,
            leaf_count,
            path.len()
        )));
    }
    Ok(verify_proof(leaf, path, expected_root))
}
