//! Harness-wide constants.
//!
//! This module defines the fixed values shared by the ALU oracle and the
//! register-file sequencer. It includes:
//! 1. **Datapath Constants:** Operand width and the adder carry position.
//! 2. **Boundary Set:** The operand values the case generator crosses.
//! 3. **Register File Constants:** Register count and address limits.
//! 4. **Sequencer Defaults:** Data values driven during the write and read sweeps.

/// Width of the ALU datapath in bits.
pub const XLEN: u32 = 32;

/// Bit position of the adder carry-out in the widened (33-bit) sum.
pub const CARRY_BIT: u32 = XLEN;

/// Mask selecting the sign bit of a 32-bit operand.
pub const SIGN_MASK: u32 = 1 << (XLEN - 1);

/// Boundary operand values, in generation order.
///
/// Carry, overflow and zero conditions are governed by sign and magnitude
/// extremes, so the generator crosses exactly this set with itself.
pub const BOUNDARY_VALUES: [i32; 7] = [
    0,
    -1,
    1,
    i32::MAX,
    i32::MIN,
    i32::MAX - 1,
    i32::MIN + 1,
];

/// Number of architectural registers in the register file.
pub const REG_COUNT: usize = 32;

/// Highest valid register address.
pub const MAX_REG_ADDR: u8 = (REG_COUNT - 1) as u8;

/// Register address hardwired to zero.
pub const ZERO_REG: u8 = 0;

/// Data value the write sweep stores into every register by default.
pub const DEFAULT_WRITE_DATA: u32 = 2;

/// Data value left on `data_in` during the read sweep by default.
pub const DEFAULT_READ_FILLER: u32 = 99;
