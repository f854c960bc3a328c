//! Device-under-test traits.
//!
//! This module defines the interfaces the harness drives. It provides:
//! 1. **ALU session:** Command and operand inputs, an evaluate trigger, result and flag outputs.
//! 2. **Register-file session:** Port inputs, clock level, evaluate trigger, read-port outputs.
//! 3. **Diagnostics:** Raw register contents, used only to build the read-sweep reference.
//!
//! Implementors model one evaluation as an instantaneous delta cycle: setters only
//! latch inputs, outputs change only when `evaluate` runs, and reading an output
//! has no side effects.

use crate::alu::Operation;
use crate::common::constants::REG_COUNT;
use crate::common::reg::RegAddr;

/// An ALU simulation session.
pub trait AluDut {
    /// Drives the 3-bit command input.
    fn set_command(&mut self, op: Operation);
    /// Drives operand A.
    fn set_operand_a(&mut self, a: i32);
    /// Drives operand B.
    fn set_operand_b(&mut self, b: i32);
    /// Evaluates the combinational logic with the current inputs.
    fn evaluate(&mut self);
    /// Result bus after the last evaluation.
    fn result(&self) -> i32;
    /// Zero flag after the last evaluation.
    fn zero(&self) -> bool;
    /// Carry-out flag after the last evaluation.
    fn carry_out(&self) -> bool;
    /// Signed overflow flag after the last evaluation.
    fn overflow(&self) -> bool;
}

/// A dual-read, single-write register-file simulation session.
pub trait RegFileDut {
    /// Drives the write-enable input.
    fn set_write_enable(&mut self, enable: bool);
    /// Drives the write data input.
    fn set_data_in(&mut self, data: u32);
    /// Drives the write address.
    fn set_write_addr(&mut self, addr: RegAddr);
    /// Drives read port 0's address.
    fn set_read_addr0(&mut self, addr: RegAddr);
    /// Drives read port 1's address.
    fn set_read_addr1(&mut self, addr: RegAddr);
    /// Drives the clock level.
    fn set_clock(&mut self, level: bool);
    /// Evaluates the model with the current inputs and clock level.
    fn evaluate(&mut self);
    /// Read port 0 data after the last evaluation.
    fn data_out0(&self) -> u32;
    /// Read port 1 data after the last evaluation.
    fn data_out1(&self) -> u32;
    /// Raw stored register contents, for harness diagnostics only.
    fn registers(&self) -> [u32; REG_COUNT];
}
