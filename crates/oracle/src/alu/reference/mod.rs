//! Reference semantics for the ALU.
//!
//! Computes what a correct ALU must output for a [`TestCase`], as a pure
//! function of the case. Nothing here reads DUT state.
//!
//! - [`arithmetic`]: ADD/SUB result, carry-out and overflow
//! - [`logic`]:      XOR, SLT, AND, NAND, NOR, OR

/// Adder reference (result, carry-out, overflow).
pub mod arithmetic;

/// Bitwise and comparison reference.
pub mod logic;

use serde::Serialize;

use super::cases::TestCase;
use super::op::Operation;

/// The four outputs a correct ALU produces for one case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExpectedOutcome {
    /// Result bus value.
    pub result: i32,
    /// Zero flag.
    pub zero: bool,
    /// Carry-out flag.
    pub carry_out: bool,
    /// Signed overflow flag.
    pub overflow: bool,
}

impl ExpectedOutcome {
    /// Computes the expected outputs for `case`.
    pub const fn of(case: TestCase) -> Self {
        let result = expected_result(case.op, case.a, case.b);
        Self {
            result,
            zero: expected_zero(case.op, result),
            carry_out: expected_carry(case.op, case.a, case.b),
            overflow: expected_overflow(case.op, case.a, case.b),
        }
    }
}

/// Expected value on the result bus.
pub const fn expected_result(op: Operation, a: i32, b: i32) -> i32 {
    match op {
        Operation::Add => arithmetic::add(a, b),
        Operation::Sub => arithmetic::sub(a, b),
        Operation::Xor => logic::xor(a, b),
        Operation::Slt => logic::slt(a, b),
        Operation::And => logic::and(a, b),
        Operation::Nand => logic::nand(a, b),
        Operation::Nor => logic::nor(a, b),
        Operation::Or => logic::or(a, b),
    }
}

/// Expected zero flag, given the expected result for `op`.
///
/// Only the adder drives the flag; it reads 0 for every other operation
/// regardless of the result.
pub const fn expected_zero(op: Operation, result: i32) -> bool {
    op.is_arithmetic() && result == 0
}

/// Expected carry-out flag.
pub const fn expected_carry(op: Operation, a: i32, b: i32) -> bool {
    match op {
        Operation::Add => arithmetic::carry_out(a, b, false),
        Operation::Sub => arithmetic::carry_out(a, b, true),
        Operation::Xor
        | Operation::Slt
        | Operation::And
        | Operation::Nand
        | Operation::Nor
        | Operation::Or => false,
    }
}

/// Expected signed overflow flag.
pub const fn expected_overflow(op: Operation, a: i32, b: i32) -> bool {
    match op {
        Operation::Add => arithmetic::add_overflows(a, b),
        Operation::Sub => arithmetic::sub_overflows(a, b),
        Operation::Xor
        | Operation::Slt
        | Operation::And
        | Operation::Nand
        | Operation::Nor
        | Operation::Or => false,
    }
}
