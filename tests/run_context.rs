//! Integration tests for run context preparation.

mod common;

use common::{step_config, workspace, MemoryProbe, JOB_ROOT, WORKDIR};
use rxrun::config::TestRailConfig;
use rxrun::context::SEQUENCE_EXTENSION;
use rxrun::{AssemblyError, PathProbe, RunContext, StepConfig};

// =============================================================================
// PATH RESOLUTION TESTS
// =============================================================================

#[test]
fn prepare_resolves_relative_executable() {
    let ctx = RunContext::prepare(&step_config(), JOB_ROOT, &workspace()).unwrap();
    assert_eq!(ctx.working_directory(), WORKDIR);
    assert_eq!(ctx.executable(), format!(r"{}\Test.exe", WORKDIR));
    assert_eq!(
        ctx.test_suite(),
        Some(format!(r"{}\Test.rxtst", WORKDIR).as_str())
    );
    assert_eq!(ctx.run_configuration(), None);
    assert!(ctx.test_rail().is_none());
}

#[test]
fn prepare_accepts_absolute_executable() {
    let probe = MemoryProbe::default().with_file(r"D:\Tests", "Smoke.exe");
    let config = StepConfig {
        executable: r"D:\Tests\Smoke.exe".into(),
        ..StepConfig::default()
    };
    let ctx = RunContext::prepare(&config, JOB_ROOT, &probe).unwrap();
    assert_eq!(ctx.executable(), r"D:\Tests\Smoke.exe");
    assert_eq!(ctx.test_suite(), None);
}

#[test]
fn prepare_accepts_drive_relative_executable() {
    let probe = MemoryProbe::default().with_file(r"C:", "Smoke.exe").with_dir(r"C:\");
    let config = StepConfig {
        executable: "C:Smoke.exe".into(),
        ..StepConfig::default()
    };
    let ctx = RunContext::prepare(&config, JOB_ROOT, &probe).unwrap();
    assert_eq!(ctx.working_directory(), r"C:\");
    assert_eq!(ctx.executable(), r"C:\Smoke.exe");
}

#[test]
fn sequence_files_are_listed_when_no_suite_is_given() {
    let probe = workspace().with_file(WORKDIR, "Nightly.rxsqc");
    assert_eq!(
        probe.files_with_extension(WORKDIR, SEQUENCE_EXTENSION),
        vec!["Nightly.rxsqc".to_string()]
    );
    let config = StepConfig {
        test_suite: String::new(),
        ..step_config()
    };
    let ctx = RunContext::prepare(&config, JOB_ROOT, &probe).unwrap();
    assert_eq!(ctx.test_suite(), None);
    assert!(ctx.suite_matches_executable());
}

// =============================================================================
// SUITE / EXECUTABLE PAIRING TESTS
// =============================================================================

#[test]
fn matching_suite_and_executable() {
    let ctx = RunContext::prepare(&step_config(), JOB_ROOT, &workspace()).unwrap();
    assert!(ctx.suite_matches_executable());
}

#[test]
fn suite_from_another_executable_does_not_match() {
    let probe = workspace().with_file(WORKDIR, "Other.rxtst");
    let config = StepConfig {
        test_suite: "Other.rxtst".into(),
        ..step_config()
    };
    let ctx = RunContext::prepare(&config, JOB_ROOT, &probe).unwrap();
    assert!(!ctx.suite_matches_executable());
}

#[test]
fn suite_pairing_ignores_case() {
    let probe = workspace().with_file(WORKDIR, "test.rxtst");
    let config = StepConfig {
        test_suite: "test.rxtst".into(),
        ..step_config()
    };
    let ctx = RunContext::prepare(&config, JOB_ROOT, &probe).unwrap();
    assert!(ctx.suite_matches_executable());
}

// =============================================================================
// FATAL ERROR TESTS
// =============================================================================

#[test]
fn blank_executable_is_fatal() {
    let config = StepConfig {
        executable: "  ".into(),
        ..StepConfig::default()
    };
    assert!(matches!(
        RunContext::prepare(&config, JOB_ROOT, &workspace()),
        Err(AssemblyError::MissingExecutable)
    ));
}

#[test]
fn missing_working_directory_is_fatal() {
    let config = StepConfig {
        executable: r"other\Test.exe".into(),
        ..StepConfig::default()
    };
    let err = RunContext::prepare(&config, JOB_ROOT, &workspace()).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(r"File or directory '{}\other' does not exist", JOB_ROOT)
    );
}

#[test]
fn working_directory_must_be_a_directory() {
    let probe = MemoryProbe::default().with_file(JOB_ROOT, "bin");
    let config = StepConfig {
        executable: r"bin\Test.exe".into(),
        ..StepConfig::default()
    };
    let err = RunContext::prepare(&config, JOB_ROOT, &probe).unwrap_err();
    assert!(matches!(err, AssemblyError::NotADirectory { .. }));
}

#[test]
fn missing_executable_file_is_fatal() {
    let config = StepConfig {
        executable: r"bin\Release\Missing.exe".into(),
        ..step_config()
    };
    let err = RunContext::prepare(&config, JOB_ROOT, &workspace()).unwrap_err();
    let expected = format!(r"{}\Missing.exe", WORKDIR);
    assert!(matches!(err, AssemblyError::PathNotFound { ref path } if *path == expected));
}

#[test]
fn test_rail_without_password_is_fatal() {
    let config = StepConfig {
        test_rail: TestRailConfig {
            enabled: true,
            user: "qa-bot".into(),
            ..TestRailConfig::default()
        },
        ..step_config()
    };
    assert!(matches!(
        RunContext::prepare(&config, JOB_ROOT, &workspace()),
        Err(AssemblyError::MissingCredentials { missing: "password" })
    ));
}

#[test]
fn disabled_test_rail_ignores_credentials() {
    let config = StepConfig {
        test_rail: TestRailConfig {
            enabled: false,
            user: "qa-bot".into(),
            ..TestRailConfig::default()
        },
        ..step_config()
    };
    let ctx = RunContext::prepare(&config, JOB_ROOT, &workspace()).unwrap();
    assert!(ctx.test_rail().is_none());
}

// =============================================================================
// SUMMARY TESTS
// =============================================================================

#[test]
fn summary_without_suite() {
    let config = StepConfig {
        test_suite: String::new(),
        ..step_config()
    };
    let summary = RunContext::prepare(&config, JOB_ROOT, &workspace())
        .unwrap()
        .to_string();
    assert!(summary.starts_with(&format!("Working directory:\t{}\n", WORKDIR)));
    assert!(summary.contains("Test executable:\tTest.exe\n"));
    assert!(summary.contains("Test suite:\t\tNo Test Suite File selected!\n"));
    assert!(summary.contains("Run configuration:\tnone\n"));
    assert!(summary.contains("TestRail sync:\t\tfalse\n"));
    assert!(summary.contains("Global parameters:\n\tnone\n"));
    assert!(summary.ends_with("Command line arguments:\n\tnone\n"));
}
