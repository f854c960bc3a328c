//! Fault injection wrappers.
//!
//! `FaultyAlu` and `FaultyRegFile` wrap a working model and corrupt one
//! output path. They exist to exercise the failure-reporting side of the
//! harness: every fault listed here must be caught by the oracle or the
//! sequencer, with the offending field or address named.

use std::fmt;
use std::str::FromStr;

use super::traits::{AluDut, RegFileDut};
use crate::alu::Operation;
use crate::common::constants::{REG_COUNT, XLEN};
use crate::common::error::{OracleError, Result};
use crate::common::reg::RegAddr;

/// A defect injected into an ALU's outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluFault {
    /// Zero flag never asserts.
    ZeroStuckLow,
    /// Carry is dropped for subtract-by-zero, as a textbook `a + (-b)` adder would.
    DropSubZeroCarry,
    /// Overflow flag is inverted on every operation.
    InvertOverflow,
    /// One bit of the result bus is flipped. A bit outside the bus flips nothing.
    ResultBitFlip(u32),
}

impl FromStr for AluFault {
    type Err = OracleError;

    /// Parses `zero-stuck-low`, `drop-sub-zero-carry`, `invert-overflow`
    /// or `flip-bit=N` with `N` in `0..32`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "zero-stuck-low" => Ok(Self::ZeroStuckLow),
            "drop-sub-zero-carry" => Ok(Self::DropSubZeroCarry),
            "invert-overflow" => Ok(Self::InvertOverflow),
            _ => s
                .strip_prefix("flip-bit=")
                .and_then(|bit| bit.parse::<u32>().ok())
                .filter(|bit| *bit < XLEN)
                .map(Self::ResultBitFlip)
                .ok_or_else(|| OracleError::UnknownFault(s.to_owned())),
        }
    }
}

impl fmt::Display for AluFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStuckLow => f.write_str("zero-stuck-low"),
            Self::DropSubZeroCarry => f.write_str("drop-sub-zero-carry"),
            Self::InvertOverflow => f.write_str("invert-overflow"),
            Self::ResultBitFlip(bit) => write!(f, "flip-bit={bit}"),
        }
    }
}

/// An ALU whose outputs are corrupted by one [`AluFault`].
#[derive(Clone, Debug)]
pub struct FaultyAlu<D> {
    inner: D,
    fault: AluFault,
    command: Operation,
    operand_b: i32,
}

impl<D: AluDut> FaultyAlu<D> {
    /// Wraps `inner`, corrupting its outputs with `fault`.
    pub fn new(inner: D, fault: AluFault) -> Self {
        Self {
            inner,
            fault,
            command: Operation::default(),
            operand_b: 0,
        }
    }

    /// The injected fault.
    pub const fn fault(&self) -> AluFault {
        self.fault
    }

    /// Unwraps the underlying model.
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: AluDut> AluDut for FaultyAlu<D> {
    fn set_command(&mut self, op: Operation) {
        self.command = op;
        self.inner.set_command(op);
    }

    fn set_operand_a(&mut self, a: i32) {
        self.inner.set_operand_a(a);
    }

    fn set_operand_b(&mut self, b: i32) {
        self.operand_b = b;
        self.inner.set_operand_b(b);
    }

    fn evaluate(&mut self) {
        self.inner.evaluate();
    }

    fn result(&self) -> i32 {
        match self.fault {
            AluFault::ResultBitFlip(bit) => {
                self.inner.result() ^ 1i32.checked_shl(bit).unwrap_or(0)
            }
            _ => self.inner.result(),
        }
    }

    fn zero(&self) -> bool {
        self.fault != AluFault::ZeroStuckLow && self.inner.zero()
    }

    fn carry_out(&self) -> bool {
        let sub_by_zero = self.command == Operation::Sub && self.operand_b == 0;
        if self.fault == AluFault::DropSubZeroCarry && sub_by_zero {
            false
        } else {
            self.inner.carry_out()
        }
    }

    fn overflow(&self) -> bool {
        (self.fault == AluFault::InvertOverflow) ^ self.inner.overflow()
    }
}

/// A defect injected into a register file's storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegFileFault {
    /// One bit of one register reads as 1 regardless of what was written.
    StuckBit {
        /// Affected register.
        addr: RegAddr,
        /// Affected bit, `0..32`. A bit outside the word sticks nothing.
        bit: u32,
    },
}

impl RegFileFault {
    fn apply(self, addr: RegAddr, val: u32) -> u32 {
        match self {
            Self::StuckBit { addr: stuck, bit } if stuck == addr => {
                val | 1u32.checked_shl(bit).unwrap_or(0)
            }
            Self::StuckBit { .. } => val,
        }
    }
}

impl FromStr for RegFileFault {
    type Err = OracleError;

    /// Parses `stuck-bit=R:B`, register `R` in `0..32`, bit `B` in `0..32`.
    fn from_str(s: &str) -> Result<Self> {
        let unknown = || OracleError::UnknownFault(s.to_owned());
        let (reg, bit) = s
            .strip_prefix("stuck-bit=")
            .and_then(|rest| rest.split_once(':'))
            .ok_or_else(unknown)?;
        let addr = reg.parse::<u8>().map_err(|_| unknown())?;
        let bit = bit
            .parse::<u32>()
            .ok()
            .filter(|bit| *bit < XLEN)
            .ok_or_else(unknown)?;
        Ok(Self::StuckBit {
            addr: RegAddr::new(addr)?,
            bit,
        })
    }
}

impl fmt::Display for RegFileFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StuckBit { addr, bit } => write!(f, "stuck-bit={addr}:{bit}"),
        }
    }
}

/// A register file whose stored values are corrupted by one [`RegFileFault`].
#[derive(Clone, Debug)]
pub struct FaultyRegFile<D> {
    inner: D,
    fault: RegFileFault,
    // Driven read addresses, and the ones latched by the last evaluation.
    read_addr0: RegAddr,
    read_addr1: RegAddr,
    latched_addr0: RegAddr,
    latched_addr1: RegAddr,
}

impl<D: RegFileDut> FaultyRegFile<D> {
    /// Wraps `inner`, corrupting its storage with `fault`.
    pub fn new(inner: D, fault: RegFileFault) -> Self {
        Self {
            inner,
            fault,
            read_addr0: RegAddr::ZERO,
            read_addr1: RegAddr::ZERO,
            latched_addr0: RegAddr::ZERO,
            latched_addr1: RegAddr::ZERO,
        }
    }

    /// The injected fault.
    pub const fn fault(&self) -> RegFileFault {
        self.fault
    }
}

impl<D: RegFileDut> RegFileDut for FaultyRegFile<D> {
    fn set_write_enable(&mut self, enable: bool) {
        self.inner.set_write_enable(enable);
    }

    fn set_data_in(&mut self, data: u32) {
        self.inner.set_data_in(data);
    }

    fn set_write_addr(&mut self, addr: RegAddr) {
        self.inner.set_write_addr(addr);
    }

    fn set_read_addr0(&mut self, addr: RegAddr) {
        self.read_addr0 = addr;
        self.inner.set_read_addr0(addr);
    }

    fn set_read_addr1(&mut self, addr: RegAddr) {
        self.read_addr1 = addr;
        self.inner.set_read_addr1(addr);
    }

    fn set_clock(&mut self, level: bool) {
        self.inner.set_clock(level);
    }

    fn evaluate(&mut self) {
        self.inner.evaluate();
        self.latched_addr0 = self.read_addr0;
        self.latched_addr1 = self.read_addr1;
    }

    fn data_out0(&self) -> u32 {
        self.fault.apply(self.latched_addr0, self.inner.data_out0())
    }

    fn data_out1(&self) -> u32 {
        self.fault.apply(self.latched_addr1, self.inner.data_out1())
    }

    fn registers(&self) -> [u32; REG_COUNT] {
        let mut regs = self.inner.registers();
        for (addr, val) in RegAddr::all().zip(regs.iter_mut()) {
            *val = self.fault.apply(addr, *val);
        }
        regs
    }
}
