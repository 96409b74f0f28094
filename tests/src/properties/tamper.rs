//! # Tamper Detection
//!
//! Any modified sibling byte or swapped side flag must break verification.
//! The one documented exception: at a level where a node is its own sibling
//! (odd-duplicate rule), swapping the side flag pairs identical digests in
//! either order only when both operands are equal, which happens exactly at
//! self-sibling levels.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use vault_core::{leaf_digest, verify_proof, Digest, MerkleTree, Position};

    fn build(n: usize) -> (Vec<Digest>, MerkleTree) {
        let leaves: Vec<Digest> = (0..n).map(|i| leaf_digest(&[i as u8; 32])).collect();
        let tree = MerkleTree::new(leaves.clone()).unwrap();
        (leaves, tree)
    }

    #[test]
    fn test_every_sibling_bit_position_matters() {
        let (leaves, tree) = build(4);
        let root = tree.root();

        for index in 0..4 {
            let path = tree.proof(index).unwrap();
            for level in 0..path.len() {
                for byte in [0usize, 15, 31] {
                    let mut tampered = path.clone();
                    tampered[level].hash[byte] ^= 0x80;
                    assert!(
                        !verify_proof(&leaves[index], &tampered, &root),
                        "tamper not detected at index={} level={} byte={}",
                        index,
                        level,
                        byte
                    );
                }
            }
        }
    }

    #[test]
    fn test_swapped_flag_fails_when_siblings_differ() {
        let (leaves, tree) = build(4);
        let root = tree.root();

        for index in 0..4 {
            let mut path = tree.proof(index).unwrap();
            for level in 0..path.len() {
                let original = path[level].position;
                path[level].position = match original {
                    Position::Left => Position::Right,
                    Position::Right => Position::Left,
                };
                assert!(
                    !verify_proof(&leaves[index], &path, &root),
                    "flag swap not detected at index={} level={}",
                    index,
                    level
                );
                path[level].position = original;
            }
        }
    }

    #[test]
    fn test_self_sibling_swap_is_a_noop() {
        // n=3, index 2: the leaf is its own sibling at level 0, so swapping
        // that flag pairs equal operands either way. Edge case, not a
        // violation.
        let (leaves, tree) = build(3);
        let root = tree.root();

        let mut path = tree.proof(2).unwrap();
        assert_eq!(path[0].hash, leaves[2]);
        path[0].position = Position::Left;
        assert!(verify_proof(&leaves[2], &path, &root));
    }

    #[test]
    fn test_truncated_and_extended_paths_fail() {
        let (leaves, tree) = build(8);
        let root = tree.root();
        let path = tree.proof(3).unwrap();

        assert!(!verify_proof(&leaves[3], &path[..2], &root));

        let mut extended = path.clone();
        extended.push(extended[0].clone());
        assert!(!verify_proof(&leaves[3], &extended, &root));
    }

    #[test]
    fn test_wrong_leaf_fails() {
        let (leaves, tree) = build(4);
        let path = tree.proof(1).unwrap();
        assert!(!verify_proof(&leaves[2], &path, &tree.root()));
    }

    proptest! {
        #[test]
        fn prop_random_tamper_detected(
            leaves in proptest::collection::vec(any::<[u8; 32]>(), 2..20),
            index_seed in any::<usize>(),
            level_seed in any::<usize>(),
            byte in 0usize..32,
            bit in 0u8..8,
        ) {
            let index = index_seed % leaves.len();
            let tree = MerkleTree::new(leaves.clone()).unwrap();
            let root = tree.root();
            let mut path = tree.proof(index).unwrap();
            let level = level_seed % path.len();

            path[level].hash[byte] ^= 1 << bit;
            prop_assert!(!verify_proof(&leaves[index], &path, &root));
        }
    }
}
