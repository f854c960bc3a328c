//! Boundary test-case generation.
//!
//! The generator crosses [`BOUNDARY_VALUES`] with itself and with every
//! [`Operation`]: outer loop over the first operand, then the second operand,
//! then the operation. The order is fixed so a failing case can be reported
//! and later reproduced by its index alone.

use std::fmt;
use std::iter::FusedIterator;

use serde::Serialize;

use super::op::Operation;
use crate::common::constants::BOUNDARY_VALUES;

const OPS_PER_PAIR: usize = Operation::ALL.len();
const CASES_PER_A: usize = BOUNDARY_VALUES.len() * OPS_PER_PAIR;

/// Total number of generated cases (7 × 7 × 8).
pub const CASE_COUNT: usize = BOUNDARY_VALUES.len() * CASES_PER_A;

/// One fully specified ALU input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TestCase {
    /// Operation driven onto the command input.
    pub op: Operation,
    /// First operand.
    pub a: i32,
    /// Second operand.
    pub b: i32,
}

impl TestCase {
    /// Creates a test case.
    pub const fn new(op: Operation, a: i32, b: i32) -> Self {
        Self { op, a, b }
    }
}

impl fmt::Display for TestCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "op={}, a={}, b={}", self.op, self.a, self.b)
    }
}

/// Returns the case at `index` in generation order, or `None` past the end.
pub fn case_at(index: usize) -> Option<TestCase> {
    if index >= CASE_COUNT {
        return None;
    }
    let a = BOUNDARY_VALUES[index / CASES_PER_A];
    let b = BOUNDARY_VALUES[(index / OPS_PER_PAIR) % BOUNDARY_VALUES.len()];
    let op = Operation::ALL[index % OPS_PER_PAIR];
    Some(TestCase::new(op, a, b))
}

/// Returns a fresh iterator over every boundary case.
///
/// The iterator is lazy and `Clone`; cloning it, or calling `cases()` again,
/// restarts the sequence from the same position.
pub fn cases() -> CaseIter {
    CaseIter {
        front: 0,
        back: CASE_COUNT,
    }
}

/// Lazy iterator over the boundary cases, see [`cases`].
#[derive(Clone, Debug)]
pub struct CaseIter {
    front: usize,
    back: usize,
}

impl CaseIter {
    /// Index the next call to `next` will yield.
    pub const fn next_index(&self) -> usize {
        self.front
    }
}

impl Iterator for CaseIter {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        if self.front >= self.back {
            return None;
        }
        let case = case_at(self.front);
        self.front += 1;
        case
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<TestCase> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for CaseIter {
    fn next_back(&mut self) -> Option<TestCase> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        case_at(self.back)
    }
}

impl ExactSizeIterator for CaseIter {}

impl FusedIterator for CaseIter {}
