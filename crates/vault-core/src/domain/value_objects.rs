//! # Domain Value Objects
//!
//! Immutable value types for Merkle proofs.

use serde::{Deserialize, Serialize};

use super::errors::Digest;

/// Position of a proof sibling (left or right of the current node).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Position {
    /// Sibling is on the left: parent = pair_hash(sibling, current).
    Left,
    /// Sibling is on the right: parent = pair_hash(current, sibling).
    Right,
}

/// One entry of a Merkle proof path.
///
/// A proof is an ordered `Vec<ProofNode>`, one entry per tree level below
/// the root, ordered leaf-to-root. Verification replays the entries in the
/// same order.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofNode {
    /// Hash of the sibling node (hex-encoded when serialized).
    #[serde(with = "super::state::hex_digest")]
    pub hash: Digest,
    /// Which side the sibling sits on.
    pub position: Position,
}

impl ProofNode {
    /// Create a left-sibling entry.
    pub fn left(hash: Digest) -> Self {
        Self {
            hash,
            position: Position::Left,
        }
    }

    /// Create a right-sibling entry.
    pub fn right(hash: Digest) -> Self {
        Self {
            hash,
            position: Position::Right,
        }
    }

    /// Is the sibling on the left?
    pub fn is_left(&self) -> bool {
        self.position == Position::Left
    }
}
