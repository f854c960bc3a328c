//! Write and read sweeps over the register file.
//!
//! Each sweep drives the DUT through all 32 addresses with two evaluations
//! per clock pulse (rising, then falling edge), compares what it can observe
//! against what it drove in, and keeps going past mismatches. A sweep's
//! verdict is the conjunction of every comparison it made.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::common::reg::RegAddr;
use crate::dut::RegFileDut;
use crate::stats::SweepStats;

/// Write sweep options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WriteSweepConfig {
    /// Value written to every address.
    pub data: u32,
}

/// Read sweep options.
///
/// Independent of [`WriteSweepConfig`]: the read sweep drives its own
/// write-port inputs rather than inheriting whatever the write sweep left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReadSweepConfig {
    /// Write-enable level held during the sweep.
    pub write_enable: bool,
    /// Value held on `data_in` during the sweep.
    pub filler_data: u32,
    /// Write address held during the sweep.
    pub write_addr: RegAddr,
}

/// Which sweep produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepKind {
    /// Write sweep, checked against raw register contents.
    Write,
    /// Read sweep, checked through the read ports.
    Read,
}

impl fmt::Display for SweepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Write => "Write",
            Self::Read => "Read",
        })
    }
}

/// Where a compared value was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Port {
    /// Raw register storage.
    Storage,
    /// Read port 0.
    Read0,
    /// Read port 1.
    Read1,
}

/// A register whose observed value differs from the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressMismatch {
    /// Sweep that made the comparison.
    pub sweep: SweepKind,
    /// Where the value was observed.
    pub port: Port,
    /// Register address.
    pub address: RegAddr,
    /// Value the register should hold.
    pub expected: u32,
    /// Value observed.
    pub actual: u32,
}

impl fmt::Display for AddressMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let port = match self.port {
            Port::Storage => "",
            Port::Read0 => " (port 0)",
            Port::Read1 => " (port 1)",
        };
        write!(
            f,
            "{} test: Regfile address {}{} contains {}, should be {}",
            self.sweep, self.address, port, self.actual, self.expected
        )
    }
}

/// Outcome of one sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    /// Sweep kind.
    pub kind: SweepKind,
    /// Every failed comparison, in address order.
    pub mismatches: Vec<AddressMismatch>,
    /// Comparison counts.
    pub stats: SweepStats,
}

impl SweepReport {
    const fn new(kind: SweepKind) -> Self {
        Self {
            kind,
            mismatches: Vec::new(),
            stats: SweepStats {
                comparisons: 0,
                mismatches: 0,
            },
        }
    }

    /// `true` iff every comparison matched.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }

    fn compare(&mut self, port: Port, address: RegAddr, expected: u32, actual: u32) {
        let matched = expected == actual;
        self.stats.record(matched);
        if !matched {
            let m = AddressMismatch {
                sweep: self.kind,
                port,
                address,
                expected,
                actual,
            };
            warn!(
                sweep = %m.sweep,
                address = m.address.val(),
                expected = m.expected,
                actual = m.actual,
                "register-file mismatch"
            );
            self.mismatches.push(m);
        }
    }
}

/// One full clock pulse: rising edge, then falling edge.
fn pulse<D: RegFileDut + ?Sized>(dut: &mut D) {
    dut.set_clock(true);
    dut.evaluate();
    dut.set_clock(false);
    dut.evaluate();
}

/// Writes `config.data` to every address, then checks raw storage.
///
/// Register 0 must still read 0; every other register must hold the
/// written value.
pub fn write_sweep<D: RegFileDut + ?Sized>(dut: &mut D, config: &WriteSweepConfig) -> SweepReport {
    dut.set_write_enable(true);
    dut.set_clock(false);
    dut.set_data_in(config.data);
    dut.evaluate();

    for addr in RegAddr::all() {
        dut.set_write_addr(addr);
        pulse(dut);
    }

    let mut report = SweepReport::new(SweepKind::Write);
    let regs = dut.registers();
    for addr in RegAddr::all() {
        let expected = if addr.is_zero() { 0 } else { config.data };
        report.compare(Port::Storage, addr, expected, regs[addr.index()]);
    }

    info!(
        data = config.data,
        mismatches = report.stats.mismatches,
        "write sweep finished"
    );
    report
}

/// Reads every address pair `(i, 31 - i)` through both ports at once.
///
/// The reference is the raw register contents captured before the sweep
/// drives anything.
pub fn read_sweep<D: RegFileDut + ?Sized>(dut: &mut D, config: &ReadSweepConfig) -> SweepReport {
    let initial = dut.registers();
    let mut report = SweepReport::new(SweepKind::Read);

    dut.set_clock(false);
    for addr0 in RegAddr::all() {
        let addr1 = addr0.mirrored();

        dut.set_write_enable(config.write_enable);
        dut.set_data_in(config.filler_data);
        dut.set_write_addr(config.write_addr);
        dut.set_read_addr0(addr0);
        dut.set_read_addr1(addr1);
        pulse(dut);

        let (out0, out1) = (dut.data_out0(), dut.data_out1());
        debug!(
            addr0 = addr0.val(),
            out0,
            addr1 = addr1.val(),
            out1,
            "read pair"
        );
        report.compare(Port::Read0, addr0, initial[addr0.index()], out0);
        report.compare(Port::Read1, addr1, initial[addr1.index()], out1);
    }

    info!(
        mismatches = report.stats.mismatches,
        "read sweep finished"
    );
    report
}
