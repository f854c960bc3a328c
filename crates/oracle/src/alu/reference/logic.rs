//! Bitwise and comparison reference results.
//!
//! None of these operations touch the adder, so they never drive the zero,
//! carry-out or overflow flags.

/// Bitwise XOR.
#[inline]
pub const fn xor(a: i32, b: i32) -> i32 {
    a ^ b
}

/// Signed set-less-than: 1 if `a < b`, else 0.
#[inline]
pub const fn slt(a: i32, b: i32) -> i32 {
    (a < b) as i32
}

/// Bitwise AND.
#[inline]
pub const fn and(a: i32, b: i32) -> i32 {
    a & b
}

/// Bitwise NAND.
#[inline]
pub const fn nand(a: i32, b: i32) -> i32 {
    !(a & b)
}

/// Bitwise NOR.
#[inline]
pub const fn nor(a: i32, b: i32) -> i32 {
    !(a | b)
}

/// Bitwise OR.
#[inline]
pub const fn or(a: i32, b: i32) -> i32 {
    a | b
}
