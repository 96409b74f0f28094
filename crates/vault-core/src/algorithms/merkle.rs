//! # Merkle Tree
//!
//! Binary Merkle tree over leaf digests with the duplicate-last-node rule:
//! an odd-width level pairs its last node with itself rather than dropping
//! it or carrying it forward.
//!
//! The tree retains every level so proof generation is a pure walk over
//! already-computed nodes.

use crate::algorithms::hasher::pair_hash;
use crate::domain::{Digest, ProofNode, VaultError};

/// A fully materialized binary Merkle tree.
///
/// Invariants after construction:
/// - `levels[0]` is the input leaf sequence;
/// - `levels[i + 1].len() == ceil(levels[i].len() / 2)`;
/// - the last level has exactly one node, the root.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    levels: Vec<Vec<Digest>>,
}

impl MerkleTree {
    /// Build a tree from a non-empty ordered leaf sequence.
    pub fn new(leaves: Vec<Digest>) -> Result<Self, VaultError> {
        if leaves.is_empty() {
            return Err(VaultError::EmptyLeaves);
        }

        let mut levels = vec![leaves];
        while levels[levels.len() - 1].len() > 1 {
            let current = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity((current.len() + 1) / 2);
            for chunk in current.chunks(2) {
                let left = &chunk[0];
                let right = chunk.get(1).unwrap_or(left); // Duplicate last if odd
                next.push(pair_hash(left, right));
            }
            levels.push(next);
        }

        Ok(Self { levels })
    }

    /// The root digest: the public commitment to all leaves.
    pub fn root(&self) -> Digest {
        // Construction guarantees a final single-node level.
        self.levels[self.levels.len() - 1][0]
    }

    /// Number of leaves the tree was built from.
    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels below the root (equals proof length).
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// The leaf digests (level 0).
    pub fn leaves(&self) -> &[Digest] {
        &self.levels[0]
    }

    /// Generate the inclusion proof for the leaf at `index`.
    ///
    /// Walks every level below the root: records the sibling digest and its
    /// side, then halves the index. When the sibling index falls off an
    /// odd-width level the node is its own sibling, matching the duplicate
    /// rule used during construction. A single-leaf tree yields an empty
    /// proof.
    pub fn proof(&self, index: usize) -> Result<Vec<ProofNode>, VaultError> {
        if index >= self.leaf_count() {
            return Err(VaultError::IndexOutOfRange {
                index,
                leaf_count: self.leaf_count(),
            });
        }

        let mut path = Vec::with_capacity(self.depth());
        let mut index = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let is_right_node = index % 2 == 1;
            let sibling_index = if is_right_node { index - 1 } else { index + 1 };

            let sibling = if sibling_index < level.len() {
                level[sibling_index]
            } else {
                level[index] // Duplicate case: node is its own sibling
            };

            path.push(if is_right_node {
                ProofNode::left(sibling)
            } else {
                ProofNode::right(sibling)
            });
            index /= 2;
        }

        Ok(path)
    }
}
