//! # Quantum-Vault Wallet
//!
//! Interactive entry point: create a Merkle one-time-signature vault, spend
//! from it by revealing the lowest-index unspent secret with its Merkle
//! path, or exit. State lives in `quantum_vault.json` next to the binary's
//! working directory.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use vault_cli::{Command, JsonFileStore};
use vault_core::{Position, SpendReveal, VaultConfig, VaultError, VaultService};

fn main() -> Result<()> {
    init_logging()?;

    let store = JsonFileStore::default_location();
    let service = VaultService::new(VaultConfig::default(), store);

    println!("========================================");
    println!("         QUANTUM VAULT                  ");
    println!("   Merkle Tree Signature Scheme         ");
    println!("========================================");
    println!(
        "1. Create New Merkle Vault ({} One-Time Keys)",
        service.config().leaf_count
    );
    println!("2. Spend from Vault (Reveal Leaf + Proof)");
    println!("3. Exit");

    let choice = prompt("\nSelect Option: ")?;
    match Command::parse(&choice) {
        Some(Command::Create) => create_vault(&service),
        Some(Command::Spend) => spend_from_vault(&service),
        Some(Command::Exit) | None => Ok(()),
    }
}

fn init_logging() -> Result<()> {
    // Default to warnings only so log lines do not interleave with the
    // interactive prompts; RUST_LOG overrides.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install subscriber")
}

fn create_vault(service: &VaultService<JsonFileStore>) -> Result<()> {
    println!(
        "\nGenerating {} One-Time Secrets (Leaves)...",
        service.config().leaf_count
    );
    let state = service.create().context("vault creation failed")?;

    println!("\n[+] VAULT CREATED");
    println!("Root Hash: {}", hex::encode(state.root));
    println!("Address:   {}", state.address);
    println!(
        "Capacity:  {} Transactions (One-Time Signatures)",
        state.leaf_count()
    );
    println!("Saved to 'quantum_vault.json'. Keep this file safe!");
    Ok(())
}

fn spend_from_vault(service: &VaultService<JsonFileStore>) -> Result<()> {
    // Reveal first without mutating; marking spent is a separate confirmed
    // save so an aborted session never burns a key.
    let reveal = match service.spend(false) {
        Ok(reveal) => reveal,
        Err(VaultError::VaultNotFound) => {
            println!("No vault file found.");
            return Ok(());
        }
        Err(VaultError::VaultExhausted) => {
            println!("Error: All keys in this vault have been used!");
            return Ok(());
        }
        Err(e) => return Err(e).context("spend failed"),
    };

    println!("\nVault Root: {}", hex::encode(reveal.root));
    println!("\nUsing Key Index: {}", reveal.index);
    print_reveal(&reveal);

    let confirm = prompt("\nMark key as used? (yes/no): ")?;
    if confirm.trim().eq_ignore_ascii_case("yes") {
        service.spend(true).context("failed to mark key as used")?;
        println!("Key marked as used.");
    }
    Ok(())
}

fn print_reveal(reveal: &SpendReveal) {
    println!("\n[+] GENERATING SPEND PROOF");
    println!("Secret Revealed: {}", hex::encode(reveal.secret));
    println!("Merkle Path:");
    for node in &reveal.path {
        let direction = match node.position {
            Position::Left => "Left",
            Position::Right => "Right",
        };
        println!(" - {} Sibling: {}...", direction, &hex::encode(node.hash)[..16]);
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("stdout flush failed")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("stdin read failed")?;
    Ok(line)
}
