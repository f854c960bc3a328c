//! Run statistics collection and reporting.
//!
//! This module tracks aggregate counts for a harness run. It provides:
//! 1. **Case totals:** Cases checked, passed, failed, and unstable.
//! 2. **Field breakdown:** Mismatch counts per ALU output.
//! 3. **Operation breakdown:** Failed-case counts per operation.
//! 4. **Register-file totals:** Addresses compared and mismatched per sweep.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::alu::{CaseVerdict, Field, Operation};

const RULE: &str = "----------------------------------------------------------";
const BANNER: &str = "==========================================================";

/// Aggregate counts for an ALU suite run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AluStats {
    /// Cases checked.
    pub cases: u64,
    /// Cases on which all four fields matched.
    pub passed: u64,
    /// Cases with at least one mismatching field.
    pub failed: u64,
    /// Total mismatching fields across all cases.
    pub mismatches: u64,
    /// Cases whose outputs moved on re-evaluation.
    pub unstable: u64,
    /// Mismatch count per field.
    pub by_field: BTreeMap<Field, u64>,
    /// Failed-case count per operation.
    pub by_op: BTreeMap<Operation, u64>,
}

impl AluStats {
    /// Folds one case verdict into the totals.
    pub fn record(&mut self, verdict: &CaseVerdict) {
        self.cases += 1;
        if verdict.passed() {
            self.passed += 1;
            return;
        }

        self.failed += 1;
        *self.by_op.entry(verdict.case.op).or_insert(0) += 1;
        for m in &verdict.mismatches {
            self.mismatches += 1;
            *self.by_field.entry(m.field).or_insert(0) += 1;
        }
    }

    /// Percentage of cases that passed; 100 for an empty run.
    pub fn pass_rate(&self) -> f64 {
        if self.cases == 0 {
            100.0
        } else {
            100.0 * self.passed as f64 / self.cases as f64
        }
    }
}

impl fmt::Display for AluStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "ALU ORACLE STATISTICS")?;
        writeln!(f, "{BANNER}")?;
        writeln!(f, "alu.cases                {}", self.cases)?;
        writeln!(f, "alu.passed               {}", self.passed)?;
        writeln!(f, "alu.failed               {}", self.failed)?;
        writeln!(f, "alu.pass_rate            {:.2}%", self.pass_rate())?;
        writeln!(f, "alu.unstable             {}", self.unstable)?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "MISMATCHES BY FIELD")?;
        for field in Field::ALL {
            let count = self.by_field.get(&field).copied().unwrap_or(0);
            writeln!(f, "  field.{:<17} {}", field.name().to_lowercase(), count)?;
        }
        writeln!(f, "{RULE}")?;
        writeln!(f, "FAILED CASES BY OPERATION")?;
        for op in Operation::ALL {
            let count = self.by_op.get(&op).copied().unwrap_or(0);
            writeln!(f, "  op.{:<20} {}", op.mnemonic(), count)?;
        }
        write!(f, "{BANNER}")
    }
}

/// Aggregate counts for one register-file sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SweepStats {
    /// Individual value comparisons performed.
    pub comparisons: u64,
    /// Comparisons that failed.
    pub mismatches: u64,
}

impl SweepStats {
    /// Records one comparison.
    pub fn record(&mut self, matched: bool) {
        self.comparisons += 1;
        if !matched {
            self.mismatches += 1;
        }
    }
}
