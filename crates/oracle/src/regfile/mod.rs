//! Register-file sequencer.
//!
//! Clocked write-then-read verification of a 32-entry register file with
//! register 0 hardwired to zero.

/// Sweep state machine.
pub mod sequencer;

/// Write and read sweeps.
pub mod sweep;

pub use sequencer::{Phase, RegFileReport, RegFileSequencer};
pub use sweep::{
    AddressMismatch, Port, ReadSweepConfig, SweepKind, SweepReport, WriteSweepConfig, read_sweep,
    write_sweep,
};
