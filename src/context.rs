//! Per-run assembly context.
//!
//! One [`RunContext`] is prepared per execution request and discarded with
//! it; nothing here outlives a single invocation.

use std::fmt;
use std::path::Path;

use crate::args::Argument;
use crate::config::StepConfig;
use crate::credentials::TestRailCredentials;
use crate::error::AssemblyError;
use crate::paths::{base_file_name, executable_from_suite, join_file, working_directory_of};
use crate::report::ReportSpec;

/// Extension of test sequence files, run when no suite is given.
pub const SEQUENCE_EXTENSION: &str = "rxsqc";

/// Filesystem queries needed while preparing a run.
pub trait PathProbe {
    fn exists(&self, path: &str) -> bool;
    fn is_dir(&self, path: &str) -> bool;
    /// File names in `dir` with the given extension (no leading dot).
    fn files_with_extension(&self, dir: &str, extension: &str) -> Vec<String>;
}

/// [`PathProbe`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalProbe;

impl PathProbe for LocalProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn files_with_extension(&self, dir: &str, extension: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut files: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == extension))
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        files.sort();
        files
    }
}

/// Everything needed to assemble one invocation.
#[derive(Debug, Clone)]
pub struct RunContext {
    working_directory: String,
    executable: String,
    test_suite: Option<String>,
    run_configuration: Option<String>,
    report: ReportSpec,
    test_rail: Option<TestRailCredentials>,
    parameters: Vec<Argument>,
    arguments: Vec<Argument>,
}

impl RunContext {
    /// Resolve paths, check they exist and validate report and TestRail
    /// settings. Parameters and arguments are added afterwards.
    pub fn prepare(
        config: &StepConfig,
        job_root: &str,
        probe: &dyn PathProbe,
    ) -> Result<Self, AssemblyError> {
        let config = config.trimmed();
        if config.executable.is_empty() {
            return Err(AssemblyError::MissingExecutable);
        }

        let working_directory = working_directory_of(job_root, &config.executable);
        tracing::debug!(
            job_root,
            executable = %config.executable,
            working_directory = %working_directory,
            "Resolved working directory"
        );
        if !probe.exists(&working_directory) {
            return Err(AssemblyError::PathNotFound {
                path: working_directory,
            });
        }
        if !probe.is_dir(&working_directory) {
            return Err(AssemblyError::NotADirectory {
                path: working_directory,
            });
        }

        let executable_name = base_file_name(&config.executable)?;
        let executable = join_file(&working_directory, &executable_name);
        require_exists(probe, &executable)?;

        let test_suite = if config.test_suite.is_empty() {
            log_sequence_files(probe, &working_directory);
            None
        } else {
            let suite = join_file(&working_directory, &config.test_suite);
            require_exists(probe, &suite)?;
            Some(suite)
        };

        let run_configuration =
            (!config.run_configuration.is_empty()).then(|| config.run_configuration.clone());

        let report = ReportSpec::from_config(&working_directory, &config)?;

        let test_rail = if config.test_rail.enabled {
            let tr = &config.test_rail;
            Some(TestRailCredentials::new(
                &tr.user,
                &tr.password,
                &tr.run_id,
                &tr.run_name,
            )?)
        } else {
            None
        };

        Ok(Self {
            working_directory,
            executable,
            test_suite,
            run_configuration,
            report,
            test_rail,
            parameters: Vec::new(),
            arguments: Vec::new(),
        })
    }

    pub fn add_parameter(&mut self, parameter: Argument) {
        self.parameters.push(parameter);
    }

    pub fn add_argument(&mut self, argument: Argument) {
        self.arguments.push(argument);
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    pub fn test_suite(&self) -> Option<&str> {
        self.test_suite.as_deref()
    }

    pub fn run_configuration(&self) -> Option<&str> {
        self.run_configuration.as_deref()
    }

    pub fn report(&self) -> &ReportSpec {
        &self.report
    }

    pub fn test_rail(&self) -> Option<&TestRailCredentials> {
        self.test_rail.as_ref()
    }

    pub fn parameters(&self) -> &[Argument] {
        &self.parameters
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// False when the suite file is not the one built with the executable
    /// (`Smoke.rxtst` goes with `Smoke.exe`). True when no suite is set.
    pub fn suite_matches_executable(&self) -> bool {
        let Some(suite) = &self.test_suite else {
            return true;
        };
        match (executable_from_suite(suite), base_file_name(&self.executable)) {
            (Ok(expected), Ok(actual)) => expected.eq_ignore_ascii_case(&actual),
            _ => false,
        }
    }
}

fn require_exists(probe: &dyn PathProbe, path: &str) -> Result<(), AssemblyError> {
    if probe.exists(path) {
        Ok(())
    } else {
        Err(AssemblyError::PathNotFound {
            path: path.to_string(),
        })
    }
}

/// Without a suite the executable picks a sequence file itself; just report
/// what it will find.
fn log_sequence_files(probe: &dyn PathProbe, working_directory: &str) {
    let sequences = probe.files_with_extension(working_directory, SEQUENCE_EXTENSION);
    match sequences.as_slice() {
        [] => tracing::info!("No test sequence files found, the default test suite will run"),
        [single] => tracing::info!(file = %single, "Single test sequence file found"),
        many => tracing::info!(
            count = many.len(),
            "Multiple test sequence files found, the executable's default will run"
        ),
    }
}

fn file_name(path: &str) -> String {
    base_file_name(path).unwrap_or_else(|_| path.to_string())
}

/// Human-readable run summary.
impl fmt::Display for RunContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Working directory:\t{}", self.working_directory)?;
        writeln!(f, "Test executable:\t{}", file_name(&self.executable))?;
        match &self.test_suite {
            Some(suite) => writeln!(f, "Test suite:\t\t{}", file_name(suite))?,
            None => writeln!(f, "Test suite:\t\tNo Test Suite File selected!")?,
        }
        match &self.run_configuration {
            Some(rc) => writeln!(f, "Run configuration:\t{}", rc)?,
            None => writeln!(f, "Run configuration:\tnone")?,
        }
        write!(f, "{}", self.report)?;
        writeln!(f, "TestRail sync:\t\t{}", self.test_rail.is_some())?;
        if let Some(tr) = &self.test_rail {
            write!(f, "{}", tr)?;
        }

        writeln!(f, "Global parameters:")?;
        if self.parameters.is_empty() {
            writeln!(f, "\tnone")?;
        }
        for p in &self.parameters {
            writeln!(f, "\t{}", p)?;
        }

        writeln!(f, "Command line arguments:")?;
        if self.arguments.is_empty() {
            writeln!(f, "\tnone")?;
        }
        for a in &self.arguments {
            writeln!(f, "\t{}", a)?;
        }
        Ok(())
    }
}
