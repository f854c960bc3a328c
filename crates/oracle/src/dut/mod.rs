//! Device-under-test interfaces and software models.
//!
//! The oracle and the sequencer only ever talk to the traits in [`traits`].
//! Any simulator binding can implement them; this module also ships
//! behavioral models so the harness runs without one.

/// Behavioral ALU model.
pub mod alu;

/// Fault-injection wrappers for both DUT kinds.
pub mod fault;

/// Behavioral register-file model.
pub mod regfile;

/// ALU and register-file session traits.
pub mod traits;

pub use alu::BehavioralAlu;
pub use fault::{AluFault, FaultyAlu, FaultyRegFile, RegFileFault};
pub use regfile::BehavioralRegFile;
pub use traits::{AluDut, RegFileDut};
