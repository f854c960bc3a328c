//! Reference oracle for a 32-bit ALU and register-file hardware model.
//!
//! This crate checks a device under test (DUT) against independently computed
//! reference semantics:
//! 1. **ALU oracle:** 392 boundary cases, each checked on result, zero, carry-out and overflow.
//! 2. **Register-file sequencer:** A clocked write sweep followed by a dual-port read sweep.
//! 3. **DUT interface:** Traits any simulator binding can implement, plus behavioral models.
//! 4. **Ambient:** Configuration, run statistics, and contract errors.
//!
//! # Examples
//!
//! ```
//! use alucheck_core::alu::AluSuite;
//! use alucheck_core::dut::BehavioralAlu;
//!
//! let mut dut = BehavioralAlu::new();
//! let report = AluSuite::default().run(&mut dut);
//! assert!(report.passed());
//! assert_eq!(report.verdicts.len(), 392);
//! ```

/// ALU operation set, case generator, reference semantics and checker.
pub mod alu;
/// Shared constants, errors and register addressing.
pub mod common;
/// Harness configuration.
pub mod config;
/// DUT traits, behavioral models and fault injection.
pub mod dut;
/// Register-file write/read sequencer.
pub mod regfile;
/// Run statistics.
pub mod stats;

/// Contract error type returned by fallible harness operations.
pub use crate::common::OracleError;
/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
