//! # Menu Dispatch
//!
//! The interactive surface is a numeric choice over an enumerated command
//! set; parsing is separate from the cryptographic core so the menu stays
//! pure glue.

/// A menu command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Create a new vault.
    Create,
    /// Spend from the vault: reveal the next one-time secret + proof.
    Spend,
    /// Exit the program.
    Exit,
}

impl Command {
    /// Parse a menu selection.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Command::Create),
            "2" => Some(Command::Spend),
            "3" => Some(Command::Exit),
            _ => None,
        }
    }
}
