//! `mockall` doubles of the DUT traits.
//!
//! Used where a test needs to observe how the harness drives a DUT (call
//! order, evaluation count) rather than what the DUT computes.

use alucheck_core::alu::Operation;
use alucheck_core::common::{REG_COUNT, RegAddr};
use alucheck_core::dut::{AluDut, RegFileDut};
use mockall::mock;

mock! {
    pub Alu {}
    impl AluDut for Alu {
        fn set_command(&mut self, op: Operation);
        fn set_operand_a(&mut self, a: i32);
        fn set_operand_b(&mut self, b: i32);
        fn evaluate(&mut self);
        fn result(&self) -> i32;
        fn zero(&self) -> bool;
        fn carry_out(&self) -> bool;
        fn overflow(&self) -> bool;
    }
}

mock! {
    pub RegFile {}
    impl RegFileDut for RegFile {
        fn set_write_enable(&mut self, enable: bool);
        fn set_data_in(&mut self, data: u32);
        fn set_write_addr(&mut self, addr: RegAddr);
        fn set_read_addr0(&mut self, addr: RegAddr);
        fn set_read_addr1(&mut self, addr: RegAddr);
        fn set_clock(&mut self, level: bool);
        fn evaluate(&mut self);
        fn data_out0(&self) -> u32;
        fn data_out1(&self) -> u32;
        fn registers(&self) -> [u32; REG_COUNT];
    }
}

/// A mock ALU whose outputs are fixed and whose inputs are ignored.
///
/// `evaluate` may be called any number of times.
pub fn constant_alu(result: i32, zero: bool, carry_out: bool, overflow: bool) -> MockAlu {
    let mut alu = MockAlu::new();
    let _ = alu.expect_set_command().return_const(());
    let _ = alu.expect_set_operand_a().return_const(());
    let _ = alu.expect_set_operand_b().return_const(());
    let _ = alu.expect_evaluate().return_const(());
    let _ = alu.expect_result().return_const(result);
    let _ = alu.expect_zero().return_const(zero);
    let _ = alu.expect_carry_out().return_const(carry_out);
    let _ = alu.expect_overflow().return_const(overflow);
    alu
}
