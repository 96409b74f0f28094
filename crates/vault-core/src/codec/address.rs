//! # Locking Script & P2SH Address
//!
//! The vault locks funds to its Merkle root with a minimal script:
//! `OP_SHA256 <root> OP_EQUAL`. The display address is the standard P2SH
//! encoding of that script's hash160.
//!
//! The on-chain side is illustrative only; the authoritative spend check is
//! the proof verification in `algorithms::verifier`.

use crate::algorithms::hasher::hash160;
use crate::codec::base58check::base58check_encode;
use crate::config::Network;
use crate::domain::Digest;

/// OP_SHA256 opcode.
const OP_SHA256: u8 = 0xA8;

/// Push-32-bytes length prefix.
const PUSH_32: u8 = 0x20;

/// OP_EQUAL opcode.
const OP_EQUAL: u8 = 0x87;

/// Total length of the locking script for a 32-byte root.
pub const LOCKING_SCRIPT_LEN: usize = 35;

/// Build the locking script `[OP_SHA256, 0x20, root, OP_EQUAL]`.
pub fn locking_script(root: &Digest) -> [u8; LOCKING_SCRIPT_LEN] {
    let mut script = [0u8; LOCKING_SCRIPT_LEN];
    script[0] = OP_SHA256;
    script[1] = PUSH_32;
    script[2..34].copy_from_slice(root);
    script[34] = OP_EQUAL;
    script
}

/// Derive the P2SH address of a script: Base58Check of its hash160 under
/// the network's version byte.
pub fn p2sh_address(script: &[u8], network: Network) -> String {
    base58check_encode(network.version_byte(), &hash160(script))
}
