//! # Application Layer
//!
//! The vault service orchestrating create / spend / status over a store.

pub mod service;

pub use service::{SpendReveal, VaultService, VaultStatus};
