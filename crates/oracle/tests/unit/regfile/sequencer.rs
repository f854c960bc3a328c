//! # Sequencer Tests

use alucheck_core::OracleError;
use alucheck_core::config::RegFileConfig;
use alucheck_core::dut::BehavioralRegFile;
use alucheck_core::regfile::{Phase, ReadSweepConfig, RegFileSequencer, WriteSweepConfig};
use pretty_assertions::assert_eq;

#[test]
fn test_run_visits_every_phase() -> Result<(), OracleError> {
    let mut rf = BehavioralRegFile::new();
    let mut seq = RegFileSequencer::new(&mut rf);
    assert_eq!(seq.phase(), Phase::Idle);

    let report = seq.run(&RegFileConfig::default())?;
    assert_eq!(seq.phase(), Phase::Done);
    assert!(report.passed());
    assert_eq!(report.mismatches().count(), 0);
    Ok(())
}

#[test]
fn test_read_before_write_is_an_error() {
    let mut rf = BehavioralRegFile::new();
    let mut seq = RegFileSequencer::new(&mut rf);
    let err = seq.read_sweep(&ReadSweepConfig::default());
    assert_eq!(
        err.map_err(|e| e.to_string()).err().as_deref(),
        Some("sequencer in phase IDLE, expected WRITE-SWEEP")
    );
}

#[test]
fn test_write_twice_is_an_error() -> Result<(), OracleError> {
    let mut rf = BehavioralRegFile::new();
    let mut seq = RegFileSequencer::new(&mut rf);
    let _ = seq.write_sweep(&WriteSweepConfig::default())?;
    assert!(matches!(
        seq.write_sweep(&WriteSweepConfig::default()),
        Err(OracleError::SequenceOrder {
            expected: Phase::Idle,
            found: Phase::WriteSweep
        })
    ));
    Ok(())
}

#[test]
fn test_read_sees_write_sweep_data() -> Result<(), OracleError> {
    let mut rf = BehavioralRegFile::new();
    let config = RegFileConfig {
        write: WriteSweepConfig { data: 0x1234_5678 },
        read: ReadSweepConfig::default(),
    };
    let report = RegFileSequencer::new(&mut rf).run(&config)?;
    assert!(report.passed());
    assert_eq!(report.read.stats.comparisons, 64);
    assert_eq!(report.write.stats.comparisons, 32);
    Ok(())
}

#[test]
fn test_phase_display() {
    let names: Vec<String> = [Phase::Idle, Phase::WriteSweep, Phase::ReadSweep, Phase::Done]
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(names, ["IDLE", "WRITE-SWEEP", "READ-SWEEP", "DONE"]);
}
