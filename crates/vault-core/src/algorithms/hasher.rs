//! # Hashing Primitives
//!
//! All digests in the vault come from these functions. Tree nodes use
//! double SHA-256; the address checksum applies single-round SHA-256 twice
//! on its own (a distinct transform, see `codec`); P2SH script hashes use
//! RIPEMD-160 over SHA-256.

use ripemd::Ripemd160;
use sha2::{Digest as _, Sha256};

use crate::domain::Digest;

/// Single round of SHA-256.
pub fn sha256(data: &[u8]) -> Digest {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// Double SHA-256: the node hash for leaves and interior tree nodes.
pub fn double_sha256(data: &[u8]) -> Digest {
    sha256(&sha256(data))
}

/// Derive a leaf digest from a one-time secret.
///
/// One-way by the hash's contract: revealing the leaf does not reveal the
/// secret, and revealing the secret spends the leaf exactly once.
pub fn leaf_digest(secret: &[u8; 32]) -> Digest {
    double_sha256(secret)
}

/// Hash two sibling nodes into their parent: `double_sha256(left || right)`.
///
/// Order-sensitive: `pair_hash(a, b) != pair_hash(b, a)` in general, which is
/// why proofs carry a side flag per level.
pub fn pair_hash(left: &Digest, right: &Digest) -> Digest {
    let mut combined = [0u8; 64];
    combined[..32].copy_from_slice(left);
    combined[32..].copy_from_slice(right);
    double_sha256(&combined)
}

/// RIPEMD-160 of SHA-256: the P2SH script-hash transform.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut output = [0u8; 20];
    output.copy_from_slice(&Ripemd160::digest(sha256(data)));
    output
}
