//! Behavioral ALU model.
//!
//! A software stand-in for the hardware ALU. Arithmetic goes through a
//! 33-bit adder that inverts operand B and sets carry-in for subtraction,
//! the way the gate-level datapath does. Flags come from the adder's
//! carry bit and the operand/result sign bits, not from the reference
//! formulas in [`crate::alu::reference`], so the two can check each other.

use super::traits::AluDut;
use crate::alu::Operation;
use crate::common::constants::{CARRY_BIT, SIGN_MASK};

/// Combinational ALU model driven through [`AluDut`].
#[derive(Clone, Debug, Default)]
pub struct BehavioralAlu {
    command: Operation,
    operand_a: i32,
    operand_b: i32,
    result: i32,
    zero: bool,
    carry_out: bool,
    overflow: bool,
}

/// Output of the shared adder.
struct AdderOut {
    sum: u32,
    carry: bool,
    overflow: bool,
}

impl BehavioralAlu {
    /// Creates an ALU with all inputs and outputs low.
    pub fn new() -> Self {
        Self::default()
    }

    /// `a + (b ^ mask) + cin` through a 33-bit adder.
    fn adder(a: u32, b: u32, subtract: bool) -> AdderOut {
        let b_in = if subtract { !b } else { b };
        let wide = u64::from(a) + u64::from(b_in) + u64::from(subtract);
        let sum = wide as u32;
        AdderOut {
            sum,
            carry: (wide >> CARRY_BIT) & 1 == 1,
            // Operands agree in sign and the sum does not.
            overflow: (a ^ sum) & (b_in ^ sum) & SIGN_MASK != 0,
        }
    }
}

impl AluDut for BehavioralAlu {
    fn set_command(&mut self, op: Operation) {
        self.command = op;
    }

    fn set_operand_a(&mut self, a: i32) {
        self.operand_a = a;
    }

    fn set_operand_b(&mut self, b: i32) {
        self.operand_b = b;
    }

    fn evaluate(&mut self) {
        let a = self.operand_a;
        let b = self.operand_b;

        let (result, carry_out, overflow) = match self.command {
            Operation::Add | Operation::Sub => {
                let out = Self::adder(a as u32, b as u32, self.command == Operation::Sub);
                (out.sum as i32, out.carry, out.overflow)
            }
            Operation::Xor => (a ^ b, false, false),
            Operation::Slt => (i32::from(a < b), false, false),
            Operation::And => (a & b, false, false),
            Operation::Nand => (!(a & b), false, false),
            Operation::Nor => (!(a | b), false, false),
            Operation::Or => (a | b, false, false),
        };

        self.result = result;
        self.zero = self.command.is_arithmetic() && result == 0;
        self.carry_out = carry_out;
        self.overflow = overflow;
    }

    fn result(&self) -> i32 {
        self.result
    }

    fn zero(&self) -> bool {
        self.zero
    }

    fn carry_out(&self) -> bool {
        self.carry_out
    }

    fn overflow(&self) -> bool {
        self.overflow
    }
}
