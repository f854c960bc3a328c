//! Register-file sequencer state machine.
//!
//! Orders the sweeps as IDLE -> WRITE-SWEEP -> READ-SWEEP -> DONE. The read
//! sweep's reference is whatever the write sweep left in the file, so running
//! the sweeps out of order is a contract error rather than a test finding.

use std::fmt;

use serde::Serialize;

use super::sweep::{self, ReadSweepConfig, SweepReport, WriteSweepConfig};
use crate::common::error::{OracleError, Result};
use crate::config::RegFileConfig;
use crate::dut::RegFileDut;

/// Sequencer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No sweep has run.
    Idle,
    /// The write sweep has run; the read sweep is next.
    WriteSweep,
    /// The read sweep is running.
    ReadSweep,
    /// Both sweeps have run.
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "IDLE",
            Self::WriteSweep => "WRITE-SWEEP",
            Self::ReadSweep => "READ-SWEEP",
            Self::Done => "DONE",
        })
    }
}

/// Reports from both sweeps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegFileReport {
    /// Write sweep outcome.
    pub write: SweepReport,
    /// Read sweep outcome.
    pub read: SweepReport,
}

impl RegFileReport {
    /// `true` iff both sweeps passed.
    pub fn passed(&self) -> bool {
        self.write.passed() && self.read.passed()
    }

    /// Every mismatch, write sweep first.
    pub fn mismatches(&self) -> impl Iterator<Item = &sweep::AddressMismatch> + '_ {
        self.write.mismatches.iter().chain(&self.read.mismatches)
    }
}

/// Drives one register-file DUT through the write and read sweeps.
#[derive(Debug)]
pub struct RegFileSequencer<'a, D: RegFileDut + ?Sized> {
    dut: &'a mut D,
    phase: Phase,
}

impl<'a, D: RegFileDut + ?Sized> RegFileSequencer<'a, D> {
    /// Takes exclusive use of `dut` for the duration of the sequence.
    pub fn new(dut: &'a mut D) -> Self {
        Self {
            dut,
            phase: Phase::Idle,
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(OracleError::SequenceOrder {
                expected,
                found: self.phase,
            })
        }
    }

    /// Runs the write sweep.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::SequenceOrder`] unless the sequencer is idle.
    pub fn write_sweep(&mut self, config: &WriteSweepConfig) -> Result<SweepReport> {
        self.expect_phase(Phase::Idle)?;
        self.phase = Phase::WriteSweep;
        Ok(sweep::write_sweep(&mut *self.dut, config))
    }

    /// Runs the read sweep.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::SequenceOrder`] unless the write sweep has run.
    pub fn read_sweep(&mut self, config: &ReadSweepConfig) -> Result<SweepReport> {
        self.expect_phase(Phase::WriteSweep)?;
        self.phase = Phase::ReadSweep;
        let report = sweep::read_sweep(&mut *self.dut, config);
        self.phase = Phase::Done;
        Ok(report)
    }

    /// Runs both sweeps in order.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::SequenceOrder`] unless the sequencer is idle.
    pub fn run(&mut self, config: &RegFileConfig) -> Result<RegFileReport> {
        let write = self.write_sweep(&config.write)?;
        let read = self.read_sweep(&config.read)?;
        Ok(RegFileReport { write, read })
    }
}
