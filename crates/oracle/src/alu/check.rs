//! Checking a DUT against the reference.
//!
//! This module drives cases into an [`AluDut`] and compares what it reports
//! against [`ExpectedOutcome`]. It provides:
//! 1. **Case checks:** One evaluation per case, four independent field comparisons.
//! 2. **Stability checks:** Re-evaluation with unchanged inputs must not move the outputs.
//! 3. **Suite runs:** Every case is checked; failures are collected, never fatal.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::cases::{self, TestCase};
use super::op::Operation;
use super::reference::ExpectedOutcome;
use crate::config::AluConfig;
use crate::dut::AluDut;
use crate::stats::AluStats;

/// An ALU output compared by the oracle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Result bus.
    Result,
    /// Zero flag.
    Zero,
    /// Carry-out flag.
    CarryOut,
    /// Signed overflow flag.
    Overflow,
}

impl Field {
    /// Every field, in comparison order.
    pub const ALL: [Self; 4] = [Self::Result, Self::Zero, Self::CarryOut, Self::Overflow];

    /// Capitalized field name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Result => "Result",
            Self::Zero => "Zero",
            Self::CarryOut => "Carry",
            Self::Overflow => "Overflow",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four outputs as read back from a DUT.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ObservedOutcome {
    /// Result bus value.
    pub result: i32,
    /// Zero flag.
    pub zero: bool,
    /// Carry-out flag.
    pub carry_out: bool,
    /// Signed overflow flag.
    pub overflow: bool,
}

impl ObservedOutcome {
    /// Reads all four outputs from `dut`.
    pub fn sample<D: AluDut + ?Sized>(dut: &D) -> Self {
        Self {
            result: dut.result(),
            zero: dut.zero(),
            carry_out: dut.carry_out(),
            overflow: dut.overflow(),
        }
    }
}

/// One field on which the DUT disagreed with the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Position of the case in the generated sequence.
    pub case_index: usize,
    /// Disagreeing output.
    pub field: Field,
    /// Operation under test.
    pub op: Operation,
    /// First operand.
    pub a: i32,
    /// Second operand.
    pub b: i32,
    /// Reference value; flags are 0 or 1.
    pub expected: i32,
    /// DUT value; flags are 0 or 1.
    pub actual: i32,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[case {}] {} failed on op={}, a={}, b={}, should be {}, is {}",
            self.case_index, self.field, self.op, self.a, self.b, self.expected, self.actual
        )
    }
}

/// Compares every field of `observed` against `expected`.
///
/// All four fields are always compared; a mismatch in one does not hide the others.
pub fn compare(
    case_index: usize,
    case: TestCase,
    expected: &ExpectedOutcome,
    observed: &ObservedOutcome,
) -> Vec<Mismatch> {
    let pairs = [
        (Field::Result, expected.result, observed.result),
        (Field::Zero, expected.zero.into(), observed.zero.into()),
        (
            Field::CarryOut,
            expected.carry_out.into(),
            observed.carry_out.into(),
        ),
        (
            Field::Overflow,
            expected.overflow.into(),
            observed.overflow.into(),
        ),
    ];

    pairs
        .into_iter()
        .filter(|(_, expected, actual)| expected != actual)
        .map(|(field, expected, actual)| Mismatch {
            case_index,
            field,
            op: case.op,
            a: case.a,
            b: case.b,
            expected,
            actual,
        })
        .collect()
}

/// Outcome of checking one case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CaseVerdict {
    /// Position of the case in the generated sequence.
    pub index: usize,
    /// The case that was driven.
    pub case: TestCase,
    /// Reference outputs.
    pub expected: ExpectedOutcome,
    /// DUT outputs.
    pub observed: ObservedOutcome,
    /// Fields that disagreed, in comparison order.
    pub mismatches: Vec<Mismatch>,
}

impl CaseVerdict {
    /// `true` if all four fields matched.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Applies `case` to the DUT inputs and evaluates once.
///
/// Every input is set before the evaluation is triggered.
pub fn drive<D: AluDut + ?Sized>(dut: &mut D, case: TestCase) {
    dut.set_command(case.op);
    dut.set_operand_a(case.a);
    dut.set_operand_b(case.b);
    dut.evaluate();
}

/// Checks one case against the DUT.
///
/// The expectation is computed before the DUT is touched. Each mismatching
/// field is logged at `warn` level.
pub fn check_case<D: AluDut + ?Sized>(dut: &mut D, index: usize, case: TestCase) -> CaseVerdict {
    let expected = ExpectedOutcome::of(case);
    drive(dut, case);
    let observed = ObservedOutcome::sample(dut);
    let mismatches = compare(index, case, &expected, &observed);

    for m in &mismatches {
        warn!(
            index,
            field = m.field.name(),
            op = %m.op,
            a = m.a,
            b = m.b,
            expected = m.expected,
            actual = m.actual,
            "ALU mismatch"
        );
    }
    debug!(index, %case, passed = mismatches.is_empty(), "checked");

    CaseVerdict {
        index,
        case,
        expected,
        observed,
        mismatches,
    }
}

/// Outputs before and after a repeated evaluation with unchanged inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StabilityVerdict {
    /// Position of the case in the generated sequence.
    pub index: usize,
    /// The case that was driven.
    pub case: TestCase,
    /// Outputs after the first evaluation.
    pub first: ObservedOutcome,
    /// Outputs after the second evaluation.
    pub second: ObservedOutcome,
}

impl StabilityVerdict {
    /// `true` if the second evaluation left every output unchanged.
    pub fn stable(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for StabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[case {}] Outputs changed on re-evaluation for {}: {:?} then {:?}",
            self.index, self.case, self.first, self.second
        )
    }
}

/// Drives `case`, evaluates twice, and reports whether the outputs moved.
pub fn check_stability<D: AluDut + ?Sized>(
    dut: &mut D,
    index: usize,
    case: TestCase,
) -> StabilityVerdict {
    drive(dut, case);
    let first = ObservedOutcome::sample(dut);
    dut.evaluate();
    let second = ObservedOutcome::sample(dut);

    let verdict = StabilityVerdict {
        index,
        case,
        first,
        second,
    };
    if !verdict.stable() {
        warn!(index, %case, "outputs changed on re-evaluation");
    }
    verdict
}

/// Result of a full ALU suite run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct SuiteReport {
    /// One verdict per case, in generation order.
    pub verdicts: Vec<CaseVerdict>,
    /// Cases whose outputs moved on re-evaluation. Empty unless the
    /// stability check was enabled.
    pub unstable: Vec<StabilityVerdict>,
    /// Aggregated counts.
    pub stats: AluStats,
}

impl SuiteReport {
    /// `true` iff every case passed and no case was unstable.
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(CaseVerdict::passed) && self.unstable.is_empty()
    }

    /// Every mismatch across all cases, in order.
    pub fn mismatches(&self) -> impl Iterator<Item = &Mismatch> + '_ {
        self.verdicts.iter().flat_map(|v| v.mismatches.iter())
    }

    /// Verdicts of the failing cases.
    pub fn failures(&self) -> impl Iterator<Item = &CaseVerdict> + '_ {
        self.verdicts.iter().filter(|v| !v.passed())
    }
}

/// Runs the ALU oracle over a sequence of cases.
#[derive(Clone, Debug, Default)]
pub struct AluSuite {
    config: AluConfig,
}

impl AluSuite {
    /// Creates a suite with the given options.
    pub const fn new(config: AluConfig) -> Self {
        Self { config }
    }

    /// Checks every generated boundary case.
    pub fn run<D: AluDut + ?Sized>(&self, dut: &mut D) -> SuiteReport {
        self.run_cases(dut, cases::cases())
    }

    /// Checks every generated boundary case, handing each verdict to
    /// `observe` as soon as it is made.
    pub fn run_with<D, F>(&self, dut: &mut D, observe: F) -> SuiteReport
    where
        D: AluDut + ?Sized,
        F: FnMut(&CaseVerdict, Option<&StabilityVerdict>),
    {
        self.run_cases_with(dut, cases::cases(), observe)
    }

    /// Checks the given cases, numbering them from 0.
    ///
    /// The run always completes; the report's verdict is the conjunction of
    /// the per-case verdicts.
    pub fn run_cases<D, I>(&self, dut: &mut D, cases: I) -> SuiteReport
    where
        D: AluDut + ?Sized,
        I: IntoIterator<Item = TestCase>,
    {
        self.run_cases_with(dut, cases, |_, _| {})
    }

    /// Like [`run_cases`](Self::run_cases), calling `observe` after each case
    /// with its verdict and, if the case was unstable, its stability verdict.
    pub fn run_cases_with<D, I, F>(&self, dut: &mut D, cases: I, mut observe: F) -> SuiteReport
    where
        D: AluDut + ?Sized,
        I: IntoIterator<Item = TestCase>,
        F: FnMut(&CaseVerdict, Option<&StabilityVerdict>),
    {
        let mut report = SuiteReport::default();

        for (index, case) in cases.into_iter().enumerate() {
            let verdict = check_case(dut, index, case);
            report.stats.record(&verdict);

            let unstable = if self.config.check_stability {
                Some(check_stability(dut, index, case)).filter(|s| !s.stable())
            } else {
                None
            };
            observe(&verdict, unstable.as_ref());

            report.verdicts.push(verdict);
            if let Some(stability) = unstable {
                report.stats.unstable += 1;
                report.unstable.push(stability);
            }
        }

        info!(
            cases = report.stats.cases,
            failed = report.stats.failed,
            mismatches = report.stats.mismatches,
            "ALU suite finished"
        );
        report
    }
}
