//! Process-level tests: exit codes and what lands on stdout/stderr.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn gpl2clr<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_gpl2clr"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_help_exits_zero() {
    let output = gpl2clr(["--help"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_help_wins_over_bad_arguments() {
    let output = gpl2clr(["a.gpl", "b.clr", "c.clr", "--bogus", "-h"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn test_missing_input_exits_one_with_help() {
    let output = gpl2clr(["--install"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.lines().next().unwrap().contains("missing required argument"));
    assert!(err.contains("Usage:"));
}

#[test]
fn test_unknown_option_prints_diagnostic_and_help() {
    let output = gpl2clr([fixture("minimal.gpl").as_os_str(), "--colour".as_ref()]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err
        .lines()
        .next()
        .unwrap()
        .contains("unrecognized option '--colour'"));
    assert!(err.contains("Usage:"));
}

#[test]
fn test_third_positional_prints_diagnostic_and_help() {
    let output = gpl2clr(["a.gpl", "b.clr", "c.clr"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.lines().next().unwrap().contains("unexpected argument 'c.clr'"));
    assert!(err.contains("Usage:"));
}

#[test]
fn test_runtime_failure_is_one_line_and_exits_zero() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("broken.clr");

    for verbose in [false, true] {
        let mut args = vec![
            fixture("broken.gpl").into_os_string(),
            out.clone().into_os_string(),
        ];
        if verbose {
            args.push("--verbose".into());
        }

        let output = gpl2clr(&args);

        assert_eq!(output.status.code(), Some(0));
        let err = stderr(&output);
        assert_eq!(err.lines().count(), 1, "stderr was: {err}");
        assert!(err.contains("parsing error on line 4: '10 20'"));
        assert!(!err.contains("Usage:"));
        assert!(!out.exists());
    }
}

#[test]
fn test_verbose_failure_folds_help_into_line() {
    let output = gpl2clr([
        fixture("not-gimp.gpl").as_os_str(),
        "--verbose".as_ref(),
        "--dry-run".as_ref(),
    ]);

    let err = stderr(&output);
    assert_eq!(err.lines().count(), 1, "stderr was: {err}");
    assert!(err.contains("(help: a GIMP palette starts with the line 'GIMP Palette')"));
}

#[test]
fn test_successful_conversion() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("primaries.clr");

    let output = gpl2clr([fixture("primaries.gpl").as_os_str(), out.as_os_str()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());
    assert!(stdout(&output).contains("Converted"));
    assert!(out.exists());
}

#[test]
fn test_dry_run_reports_without_writing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("minimal.clr");

    let output = gpl2clr([
        fixture("minimal.gpl").as_os_str(),
        out.as_os_str(),
        "--dry-run".as_ref(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("nothing written"));
    assert!(!out.exists());
}
