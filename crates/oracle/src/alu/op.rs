//! ALU operation encoding.
//!
//! The ALU decodes a 3-bit command. The encoding follows declaration order,
//! which is also the order the case generator visits operations in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::error::{OracleError, Result};

/// An ALU operation selected by the `command` input.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Operation {
    /// Two's-complement addition.
    #[default]
    Add = 0,
    /// Two's-complement subtraction.
    Sub = 1,
    /// Bitwise exclusive OR.
    Xor = 2,
    /// Set less than (signed): 1 if `a < b`, else 0.
    Slt = 3,
    /// Bitwise AND.
    And = 4,
    /// Bitwise NAND.
    Nand = 5,
    /// Bitwise NOR.
    Nor = 6,
    /// Bitwise OR.
    Or = 7,
}

impl Operation {
    /// Every operation in command-encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::Xor,
        Self::Slt,
        Self::And,
        Self::Nand,
        Self::Nor,
        Self::Or,
    ];

    /// Returns the 3-bit command value driven onto the DUT.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for the adder operations (ADD, SUB).
    ///
    /// Only these drive the zero, carry-out and overflow flags.
    #[inline]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }

    /// Returns the lowercase mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Xor => "xor",
            Self::Slt => "slt",
            Self::And => "and",
            Self::Nand => "nand",
            Self::Nor => "nor",
            Self::Or => "or",
        }
    }
}

impl TryFrom<u8> for Operation {
    type Error = OracleError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(code as usize)
            .copied()
            .ok_or(OracleError::InvalidOperation(code))
    }
}

impl From<Operation> for u8 {
    fn from(op: Operation) -> Self {
        op.code()
    }
}

impl FromStr for Operation {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s))
            .ok_or_else(|| OracleError::UnknownMnemonic(s.to_owned()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
