//! # Domain Invariants
//!
//! Structural rules that must always hold for vault state and proofs.

use super::errors::VaultError;
use super::state::VaultState;

/// Length of a digest in bytes (SHA-256 output).
pub const DIGEST_LEN: usize = 32;

/// Length of a one-time secret in bytes.
pub const SECRET_LEN: usize = 32;

/// Default vault capacity (number of one-time keys).
pub const DEFAULT_LEAF_COUNT: usize = 4;

/// Expected proof length for a tree over `leaf_count` leaves.
///
/// One entry per level below the root: `ceil(log2(n))` for n > 1, zero for a
/// single-leaf tree (root == leaf, empty proof). The duplicate-last-node rule
/// keeps every level at `ceil(len / 2)` of the one below, so depth depends
/// only on the leaf count.
pub fn expected_proof_len(leaf_count: usize) -> usize {
    let mut len = 0;
    let mut width = leaf_count;
    while width > 1 {
        width = (width + 1) / 2;
        len += 1;
    }
    len
}

/// Invariant: secrets and spent mask are parallel and non-empty.
pub fn check_state(state: &VaultState) -> Result<(), VaultError> {
    if state.secrets.is_empty() {
        return Err(VaultError::InvalidState(
            "vault has zero capacity".to_string(),
        ));
    }
    if state.secrets.len() != state.spent.len() {
        return Err(VaultError::InvalidState(format!(
            "secrets/spent_mask length mismatch: {} != {}",
            state.secrets.len(),
            state.spent.len()
        )));
    }
    Ok(())
}
