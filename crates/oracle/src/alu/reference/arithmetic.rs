//! Adder reference: ADD/SUB result, carry-out and signed overflow.
//!
//! The flags are derived from operand and sum signs, never from a
//! fixed-width sum that may itself overflow. Every intermediate is
//! widened to `i64` and truncated back explicitly.

const I32_MAX: i64 = i32::MAX as i64;
const I32_MIN: i64 = i32::MIN as i64;

/// Truncates a widened value to the 32-bit datapath.
#[inline]
const fn truncate(val: i64) -> i32 {
    val as i32
}

/// `a + b` with 32-bit wraparound.
#[inline]
pub const fn add(a: i32, b: i32) -> i32 {
    truncate(a as i64 + b as i64)
}

/// `a - b` with 32-bit wraparound.
#[inline]
pub const fn sub(a: i32, b: i32) -> i32 {
    truncate(a as i64 - b as i64)
}

/// Expected carry-out of the adder.
///
/// Subtraction is treated as addition of the negated second operand.
/// Negation wraps, so `i32::MIN` negates to itself, which is what the
/// adder sees on its second input.
///
/// Subtracting zero always reports a carry. The hardware computes
/// `a + !0 + 1`, which carries out of bit 31 for every `a`; plain
/// addition of `-0` never would.
pub const fn carry_out(a: i32, b: i32, subtract: bool) -> bool {
    let addend = if subtract { b.wrapping_neg() } else { b };
    let sum = truncate(a as i64 + addend as i64);

    (a < 0 && addend < 0)
        || (a < 0 && addend >= 0 && sum >= 0)
        || (a >= 0 && addend < 0 && sum >= 0)
        || (subtract && b == 0)
}

/// Expected signed overflow of `a + b`.
pub const fn add_overflows(a: i32, b: i32) -> bool {
    let (a, b) = (a as i64, b as i64);
    (a > 0 && b > I32_MAX - a) || (a < 0 && b < I32_MIN - a)
}

/// Expected signed overflow of `a - b`.
pub const fn sub_overflows(a: i32, b: i32) -> bool {
    let (a, b) = (a as i64, b as i64);
    (a < 0 && b > I32_MAX + a + 1) || (a >= 0 && b <= I32_MIN + a)
}
