//! # Integration Tests
//!
//! End-to-end vault flows across `vault-core` and the `vault-cli` adapters.
