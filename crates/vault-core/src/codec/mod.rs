//! # Address Codec
//!
//! Human-presentable identifiers derived from the Merkle root: Base58Check
//! encoding, the vault locking script, and P2SH address derivation.

pub mod address;
pub mod base58check;

pub use address::{locking_script, p2sh_address, LOCKING_SCRIPT_LEN};
pub use base58check::base58check_encode;
