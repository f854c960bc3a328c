//! Contract and usage errors.
//!
//! Test findings (a DUT output disagreeing with the reference) are not errors:
//! they are collected as values in the suite and sweep reports. This module
//! covers the remaining failure modes:
//! 1. **Decoding:** Raw command tags or mnemonics that name no ALU operation.
//! 2. **Addressing:** Register addresses outside the 32-entry file.
//! 3. **Sequencing:** Register-file sweeps started out of order.
//! 4. **Configuration:** Unreadable or malformed configuration files.

use thiserror::Error;

use crate::regfile::Phase;

/// Errors raised when a caller violates the harness contract.
#[derive(Debug, Error)]
pub enum OracleError {
    /// A raw command value does not encode any ALU operation.
    #[error("invalid ALU command tag {0}: expected 0..=7")]
    InvalidOperation(u8),

    /// A mnemonic does not name any ALU operation.
    #[error("unknown ALU mnemonic `{0}`")]
    UnknownMnemonic(String),

    /// A fault description does not parse.
    #[error("unknown fault `{0}`")]
    UnknownFault(String),

    /// A register address is outside `0..=31`.
    #[error("register address {0} out of range: expected 0..=31")]
    InvalidRegister(u8),

    /// A register-file sweep was requested from the wrong sequencer phase.
    #[error("sequencer in phase {found}, expected {expected}")]
    SequenceOrder {
        /// Phase the requested sweep must start from.
        expected: Phase,
        /// Phase the sequencer was actually in.
        found: Phase,
    },

    /// A configuration file could not be parsed.
    #[error("malformed configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration file could not be read.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for harness operations.
pub type Result<T> = std::result::Result<T, OracleError>;
