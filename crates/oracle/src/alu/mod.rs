//! ALU oracle.
//!
//! This module generates boundary cases, computes what a correct ALU must
//! output for each, and checks a DUT against those expectations.
//!
//! Organized into submodules:
//! - [`op`]:        the closed operation set and its 3-bit encoding
//! - [`cases`]:     deterministic boundary case generator
//! - [`reference`]: expected result, zero, carry-out and overflow
//! - [`check`]:     per-case and whole-suite comparison against a DUT

/// Per-case and suite-level checking.
pub mod check;

/// Boundary test-case generator.
pub mod cases;

/// Operation encoding.
pub mod op;

/// Reference semantics.
pub mod reference;

pub use cases::{CASE_COUNT, CaseIter, TestCase, case_at, cases};
pub use check::{
    AluSuite, CaseVerdict, Field, Mismatch, ObservedOutcome, StabilityVerdict, SuiteReport,
    check_case, check_stability,
};
pub use op::Operation;
pub use reference::ExpectedOutcome;
