//! ALU and register-file oracle CLI.
//!
//! This binary runs the harness against the built-in behavioral models. It performs:
//! 1. **ALU suite:** All 392 boundary cases, one diagnostic line per mismatching field.
//! 2. **Register-file sequence:** Write sweep then read sweep, one line per mismatching address.
//! 3. **Fault injection:** Optional defects wrapped around the models to exercise failure reporting.
//!
//! Exit status is 0 when every check passes, 1 when any check fails, and 2 on a usage or
//! configuration error.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use alucheck_core::alu::{AluSuite, SuiteReport};
use alucheck_core::config::{AluConfig, Config, ReportFormat};
use alucheck_core::dut::{
    AluDut, AluFault, BehavioralAlu, BehavioralRegFile, FaultyAlu, FaultyRegFile, RegFileDut,
    RegFileFault,
};
use alucheck_core::regfile::{RegFileReport, RegFileSequencer, SweepKind, SweepReport};

#[derive(Parser, Debug)]
#[command(
    name = "alucheck",
    author,
    version,
    about = "Boundary-value oracle for a 32-bit ALU and register file",
    long_about = "Check the ALU on 392 boundary cases (7 x 7 operand pairs x 8 operations) and run a clocked write/read sweep over the register file.\n\nIn text mode each mismatch is printed as soon as its case or sweep has been checked.\n\nExamples:\n  alucheck\n  alucheck alu --alu-fault drop-sub-zero-carry\n  alucheck regfile --regfile-fault stuck-bit=5:0\n  alucheck --config run.json --format json"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON configuration file; every field is optional.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report format, overriding the configuration file (`text` or `json`).
    #[arg(long, global = true, value_parser = parse_format)]
    format: Option<ReportFormat>,

    /// Inject an ALU fault: zero-stuck-low, drop-sub-zero-carry, invert-overflow, flip-bit=N.
    #[arg(long, global = true)]
    alu_fault: Option<AluFault>,

    /// Inject a register-file fault: stuck-bit=REG:BIT.
    #[arg(long, global = true)]
    regfile_fault: Option<RegFileFault>,

    /// Re-evaluate every ALU case and flag outputs that change.
    #[arg(long, global = true)]
    check_stability: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Run the ALU oracle only.
    Alu,
    /// Run the register-file sequencer only.
    Regfile,
    /// Run both (default).
    All,
}

/// Everything a run produced, serialized in JSON mode.
#[derive(Serialize)]
struct RunReport<'a> {
    alu: Option<&'a SuiteReport>,
    regfile: Option<&'a RegFileReport>,
    passed: bool,
}

fn parse_format(s: &str) -> Result<ReportFormat, String> {
    match s.to_ascii_lowercase().as_str() {
        "text" => Ok(ReportFormat::Text),
        "json" => Ok(ReportFormat::Json),
        other => Err(format!("unknown format `{other}`: expected text or json")),
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default: errors only).
///
/// Diagnostics required on stdout are streamed by `run`, so library
/// logging stays opt-in.
fn setup_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::ERROR.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing();

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(2)
        }
    }
}

/// Loads configuration, applies command-line overrides, and runs the selected suites.
///
/// In text mode each diagnostic line is written to `out` as soon as the
/// check that produced it has run. JSON mode writes one document at the end.
fn run(cli: &Cli, out: &mut dyn Write) -> Result<bool, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.report.format = format;
    }
    if cli.check_stability {
        config.alu.check_stability = true;
    }

    let command = cli.command.unwrap_or(Commands::All);
    debug!(?command, ?config, "effective configuration");
    let text = config.report.format == ReportFormat::Text;

    let alu_report = if matches!(command, Commands::Alu | Commands::All) {
        let mut dut: Box<dyn AluDut> = match cli.alu_fault {
            Some(fault) => Box::new(FaultyAlu::new(BehavioralAlu::new(), fault)),
            None => Box::new(BehavioralAlu::new()),
        };
        let report = run_alu(&mut *dut, config.alu, text.then_some(&mut *out))?;
        if text {
            print_alu_summary(out, &report, config.report.summary)?;
        }
        Some(report)
    } else {
        None
    };

    let regfile_report = if matches!(command, Commands::Regfile | Commands::All) {
        let mut dut: Box<dyn RegFileDut> = match cli.regfile_fault {
            Some(fault) => Box::new(FaultyRegFile::new(BehavioralRegFile::new(), fault)),
            None => Box::new(BehavioralRegFile::new()),
        };
        let mut seq = RegFileSequencer::new(&mut *dut);
        let write = seq.write_sweep(&config.regfile.write)?;
        if text {
            print_sweep(out, &write)?;
        }
        let read = seq.read_sweep(&config.regfile.read)?;
        if text {
            print_sweep(out, &read)?;
        }
        Some(RegFileReport { write, read })
    } else {
        None
    };

    let passed = alu_report.as_ref().is_none_or(SuiteReport::passed)
        && regfile_report.as_ref().is_none_or(RegFileReport::passed);

    if text {
        writeln!(out, "Overall: {}", verdict(passed))?;
    } else {
        let report = RunReport {
            alu: alu_report.as_ref(),
            regfile: regfile_report.as_ref(),
            passed,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }

    Ok(passed)
}

const fn verdict(passed: bool) -> &'static str {
    if passed { "PASS" } else { "FAIL" }
}

/// Runs the ALU suite, streaming one line per mismatching field and per
/// unstable case to `out` when given.
fn run_alu(
    dut: &mut dyn AluDut,
    config: AluConfig,
    mut out: Option<&mut dyn Write>,
) -> io::Result<SuiteReport> {
    let mut failed_write = None;
    let report = AluSuite::new(config).run_with(dut, |verdict, unstable| {
        let Some(out) = out.as_mut() else { return };
        let lines = verdict
            .mismatches
            .iter()
            .map(ToString::to_string)
            .chain(unstable.map(ToString::to_string));
        for line in lines {
            if let Err(e) = writeln!(out, "{line}") {
                let _ = failed_write.get_or_insert(e);
            }
        }
    });
    failed_write.map_or(Ok(report), Err)
}

/// Writes the ALU verdict line and, if enabled, the statistics summary.
fn print_alu_summary(out: &mut dyn Write, report: &SuiteReport, summary: bool) -> io::Result<()> {
    writeln!(
        out,
        "ALU test: {} ({}/{} cases passed)",
        verdict(report.passed()),
        report.stats.passed,
        report.stats.cases
    )?;
    if summary {
        writeln!(out, "{}", report.stats)?;
    }
    Ok(())
}

/// Writes one line per mismatching address, then the sweep verdict.
fn print_sweep(out: &mut dyn Write, report: &SweepReport) -> io::Result<()> {
    for m in &report.mismatches {
        writeln!(out, "{m}")?;
    }
    let kind = match report.kind {
        SweepKind::Write => "write",
        SweepKind::Read => "read",
    };
    writeln!(
        out,
        "Register file {kind} sweep: {} ({} comparisons, {} mismatches)",
        verdict(report.passed()),
        report.stats.comparisons,
        report.stats.mismatches
    )
}
