//! # Quantum-Vault CLI
//!
//! Interactive wallet around `vault-core`: create a Merkle one-time-signature
//! vault, spend from it by revealing a secret plus its sibling path, persist
//! state to a JSON file.
//!
//! The binary lives in `main.rs`; this library target exposes the file store
//! adapter and menu dispatch for integration tests.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod menu;
pub mod store;

pub use menu::Command;
pub use store::JsonFileStore;
