//! # Vault Configuration

use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_LEAF_COUNT;

/// Network discriminator for address version bytes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Network {
    /// Mainnet P2SH addresses (version byte 0x05, "3..." prefix).
    Mainnet,
    /// Testnet P2SH addresses (version byte 0xC4, "2..." prefix).
    Testnet,
}

impl Network {
    /// The Base58Check version byte for this network.
    pub fn version_byte(self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet => 0xC4,
        }
    }
}

/// Vault configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Number of one-time keys a new vault holds. Any count >= 1 works;
    /// the algorithm is count-agnostic.
    pub leaf_count: usize,

    /// Network the derived address targets.
    pub network: Network,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            leaf_count: DEFAULT_LEAF_COUNT,
            network: Network::Mainnet,
        }
    }
}

impl VaultConfig {
    /// Create a config for testing (tiny capacity, testnet).
    pub fn for_testing() -> Self {
        Self {
            leaf_count: 2,
            network: Network::Testnet,
        }
    }
}
