//! # ALU Oracle Tests
//!
//! How the checker drives a DUT and what it reports back.

use alucheck_core::alu::{
    AluSuite, CASE_COUNT, Field, Mismatch, Operation, SuiteReport, TestCase, cases, check_case,
    check_stability,
};
use alucheck_core::config::AluConfig;
use alucheck_core::dut::{AluDut, AluFault, BehavioralAlu, FaultyAlu};
use mockall::Sequence;
use mockall::predicate::eq;
use pretty_assertions::assert_eq;

use crate::common::harness::{failed_fields, index_of, run_alu, run_alu_with_stability};
use crate::common::mocks::{MockAlu, constant_alu};

#[test]
fn test_behavioral_alu_passes_every_case() {
    let report = run_alu(&mut BehavioralAlu::new());
    assert_eq!(report.verdicts.len(), CASE_COUNT);
    assert_eq!(report.mismatches().count(), 0);
    assert_eq!(report.stats.passed, CASE_COUNT as u64);
    assert!(report.passed());
}

#[test]
fn test_verdicts_are_numbered_in_generation_order() {
    let report = run_alu(&mut BehavioralAlu::new());
    for (index, (verdict, case)) in report.verdicts.iter().zip(cases()).enumerate() {
        assert_eq!(verdict.index, index);
        assert_eq!(verdict.case, case);
    }
}

#[test]
fn test_inputs_are_set_before_single_evaluation() {
    let mut seq = Sequence::new();
    let mut alu = MockAlu::new();
    let _ = alu
        .expect_set_command()
        .with(eq(Operation::Sub))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = alu
        .expect_set_operand_a()
        .with(eq(7))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = alu
        .expect_set_operand_b()
        .with(eq(7))
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = alu
        .expect_evaluate()
        .times(1)
        .in_sequence(&mut seq)
        .return_const(());
    let _ = alu.expect_result().times(1).return_const(0);
    let _ = alu.expect_zero().times(1).return_const(true);
    let _ = alu.expect_carry_out().times(1).return_const(true);
    let _ = alu.expect_overflow().times(1).return_const(false);

    let verdict = check_case(&mut alu, 0, TestCase::new(Operation::Sub, 7, 7));
    assert!(verdict.passed());
}

#[test]
fn test_all_four_fields_reported_independently() {
    // Wrong on every field for SUB 0 - 0 (expected 0, zero, carry, no overflow).
    let mut alu = constant_alu(5, false, false, true);
    let verdict = check_case(&mut alu, 12, TestCase::new(Operation::Sub, 0, 0));

    let fields: Vec<Field> = verdict.mismatches.iter().map(|m| m.field).collect();
    assert_eq!(fields, Field::ALL.to_vec());
    assert!(verdict.mismatches.iter().all(|m| m.case_index == 12));
    assert_eq!(
        verdict.mismatches[0].to_string(),
        "[case 12] Result failed on op=sub, a=0, b=0, should be 0, is 5"
    );
}

#[test]
fn test_expected_does_not_read_dut() {
    // A DUT reporting result 0 must not make the zero flag expected for XOR.
    let mut alu = constant_alu(0, true, false, false);
    let verdict = check_case(&mut alu, 0, TestCase::new(Operation::Xor, 1, 1));
    assert!(!verdict.expected.zero);
    let fields: Vec<Field> = verdict.mismatches.iter().map(|m| m.field).collect();
    assert_eq!(fields, vec![Field::Zero]);
}

#[test]
fn test_suite_keeps_going_after_failures() {
    let mut alu = constant_alu(0, false, false, false);
    let report: SuiteReport = AluSuite::default().run(&mut alu);
    assert_eq!(report.verdicts.len(), CASE_COUNT);
    assert!(!report.passed());
    assert!(report.stats.failed > 0);
    assert_eq!(
        report.stats.passed + report.stats.failed,
        CASE_COUNT as u64
    );
}

#[test]
fn test_add_max_plus_one_mismatch_is_located() {
    // An ALU with no overflow detection.
    let mut alu = constant_alu(i32::MIN, false, false, false);
    let report = AluSuite::default().run_cases(
        &mut alu,
        [TestCase::new(Operation::Add, i32::MAX, 1)],
    );
    assert_eq!(failed_fields(&report), vec![Field::Overflow]);
    assert_eq!(
        report.mismatches().next().map(ToString::to_string),
        Some("[case 0] Overflow failed on op=add, a=2147483647, b=1, should be 1, is 0".to_owned())
    );
}

#[test]
fn test_index_locates_case() {
    let index = index_of(Operation::Add, i32::MAX, 1);
    assert_eq!(index, Some(3 * 56 + 2 * 8));
}

#[test]
fn test_stability_check_flags_drifting_outputs() {
    let mut alu = MockAlu::new();
    let _ = alu.expect_set_command().return_const(());
    let _ = alu.expect_set_operand_a().return_const(());
    let _ = alu.expect_set_operand_b().return_const(());
    let _ = alu.expect_evaluate().times(2).return_const(());
    let _ = alu.expect_zero().return_const(false);
    let _ = alu.expect_carry_out().return_const(false);
    let _ = alu.expect_overflow().return_const(false);
    let mut results = [1, 2].into_iter();
    let _ = alu
        .expect_result()
        .times(2)
        .returning(move || results.next().unwrap_or_default());

    let verdict = check_stability(&mut alu, 4, TestCase::new(Operation::Or, 0, 1));
    assert!(!verdict.stable());
    assert_eq!(verdict.first.result, 1);
    assert_eq!(verdict.second.result, 2);
}

#[test]
fn test_behavioral_alu_is_stable() {
    let report = run_alu_with_stability(&mut BehavioralAlu::new());
    assert!(report.unstable.is_empty());
    assert_eq!(report.stats.unstable, 0);
    assert!(report.passed());
}

#[test]
fn test_dyn_dut_is_accepted() {
    let mut boxed: Box<dyn AluDut> = Box::new(BehavioralAlu::new());
    assert!(run_alu(&mut *boxed).passed());
}

#[test]
fn test_observer_sees_each_verdict_as_it_is_checked() {
    let mut alu = FaultyAlu::new(BehavioralAlu::new(), AluFault::DropSubZeroCarry);
    let mut seen = Vec::new();
    let mut streamed: Vec<Mismatch> = Vec::new();
    let report = AluSuite::new(AluConfig::default()).run_with(&mut alu, |verdict, unstable| {
        assert!(unstable.is_none());
        seen.push(verdict.index);
        streamed.extend(verdict.mismatches.iter().copied());
    });

    assert_eq!(seen, (0..CASE_COUNT).collect::<Vec<_>>());
    assert_eq!(streamed.len(), 7);
    assert!(streamed.iter().all(|m| m.field == Field::CarryOut && m.b == 0));
    assert_eq!(streamed, report.mismatches().copied().collect::<Vec<_>>());
}

#[test]
fn test_observer_called_once_per_case_with_stability_checks() {
    let config = AluConfig {
        check_stability: true,
    };
    let mut calls = 0;
    let report = AluSuite::new(config).run_with(&mut BehavioralAlu::new(), |_, unstable| {
        assert!(unstable.is_none());
        calls += 1;
    });
    assert_eq!(calls, CASE_COUNT);
    assert!(report.passed());
}
