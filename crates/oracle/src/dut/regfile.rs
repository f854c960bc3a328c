//! Behavioral register-file model.
//!
//! This module implements a clocked 32 x 32-bit register file. It performs the following:
//! 1. **Storage:** Maintains 32 registers, written on the rising clock edge.
//! 2. **Invariant Enforcement:** Register 0 is hardwired to zero; writes to it are dropped.
//! 3. **Read Ports:** Two combinational read ports, updated on every evaluation.

use super::traits::RegFileDut;
use crate::common::constants::REG_COUNT;
use crate::common::reg::RegAddr;

/// Register file with one synchronous write port and two read ports.
#[derive(Clone, Debug, Default)]
pub struct BehavioralRegFile {
    regs: [u32; REG_COUNT],
    write_enable: bool,
    data_in: u32,
    write_addr: RegAddr,
    read_addr0: RegAddr,
    read_addr1: RegAddr,
    clock: bool,
    last_clock: bool,
    data_out0: u32,
    data_out1: u32,
}

impl BehavioralRegFile {
    /// Creates a register file with every register, input and output at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register; register 0 always returns 0.
    fn read(&self, addr: RegAddr) -> u32 {
        if addr.is_zero() { 0 } else { self.regs[addr.index()] }
    }

    /// Writes a register; writes to register 0 are ignored.
    fn write(&mut self, addr: RegAddr, val: u32) {
        if !addr.is_zero() {
            self.regs[addr.index()] = val;
        }
    }
}

impl RegFileDut for BehavioralRegFile {
    fn set_write_enable(&mut self, enable: bool) {
        self.write_enable = enable;
    }

    fn set_data_in(&mut self, data: u32) {
        self.data_in = data;
    }

    fn set_write_addr(&mut self, addr: RegAddr) {
        self.write_addr = addr;
    }

    fn set_read_addr0(&mut self, addr: RegAddr) {
        self.read_addr0 = addr;
    }

    fn set_read_addr1(&mut self, addr: RegAddr) {
        self.read_addr1 = addr;
    }

    fn set_clock(&mut self, level: bool) {
        self.clock = level;
    }

    fn evaluate(&mut self) {
        let rising = self.clock && !self.last_clock;
        self.last_clock = self.clock;

        if rising && self.write_enable {
            self.write(self.write_addr, self.data_in);
        }

        self.data_out0 = self.read(self.read_addr0);
        self.data_out1 = self.read(self.read_addr1);
    }

    fn data_out0(&self) -> u32 {
        self.data_out0
    }

    fn data_out1(&self) -> u32 {
        self.data_out1
    }

    fn registers(&self) -> [u32; REG_COUNT] {
        self.regs
    }
}
