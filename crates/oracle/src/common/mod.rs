//! Common types and constants shared by both harness components.
//!
//! This module provides the building blocks used by the ALU oracle and the
//! register-file sequencer. It includes:
//! 1. **Constants:** Datapath width, the boundary operand set, register-file limits.
//! 2. **Error Handling:** The contract error type returned by fallible operations.
//! 3. **Register Addressing:** A validated 5-bit register address.

/// Harness-wide constants.
pub mod constants;

/// Contract and usage error definitions.
pub mod error;

/// Validated register address type.
pub mod reg;

pub use constants::{BOUNDARY_VALUES, REG_COUNT};
pub use error::{OracleError, Result};
pub use reg::RegAddr;
