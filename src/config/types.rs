use std::fmt;

use serde::{Deserialize, Serialize};

/// Current version of the step configuration format.
pub const CONFIG_VERSION: u32 = 1;

/// Report name used when none is configured; expanded by the test executable.
pub const DEFAULT_REPORT_NAME: &str = "%S_%Y_%M%D_%T";

/// Report extension used when none is configured.
pub const DEFAULT_REPORT_EXTENSION: &str = "rxlog";

/// Raw build-step configuration, as entered in the host's job form.
///
/// Every field may be absent or blank; blank strings mean "not set".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepConfig {
    /// Format version.
    pub version: u32,
    /// Path to the test executable, absolute or relative to the job root.
    pub executable: String,
    /// Suite file name, relative to the executable's directory.
    pub test_suite: String,
    /// Named run configuration.
    pub run_configuration: String,
    /// Report directory, absolute or relative to the working directory.
    pub report_directory: String,
    /// Report file name; an extension, if present, is dropped.
    pub report_file: String,
    /// Report extension (default: "rxlog").
    pub report_extension: String,
    /// Also write a JUnit compatible report.
    pub junit_report: bool,
    /// Also write a compressed (.rxzlog) report.
    pub compressed_report: bool,
    /// Compressed report directory (default: working directory).
    pub compressed_report_directory: String,
    /// Compressed report file name (default: report file name).
    pub compressed_report_file: String,
    /// TestRail synchronization.
    pub test_rail: TestRailConfig,
    /// Global parameters, one per line or `;`-separated.
    pub global_parameters: String,
    /// Extra command line arguments, one per line or `;`-separated.
    pub command_line_arguments: String,
    /// Log a run summary before the invocation.
    pub summarize: bool,
}

/// TestRail settings. The password is masked in `Debug` output.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestRailConfig {
    pub enabled: bool,
    pub user: String,
    pub password: String,
    pub run_id: String,
    pub run_name: String,
}

impl fmt::Debug for TestRailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestRailConfig")
            .field("enabled", &self.enabled)
            .field("user", &self.user)
            .field("password", &"*****")
            .field("run_id", &self.run_id)
            .field("run_name", &self.run_name)
            .finish()
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            executable: String::new(),
            test_suite: String::new(),
            run_configuration: String::new(),
            report_directory: String::new(),
            report_file: String::new(),
            report_extension: DEFAULT_REPORT_EXTENSION.to_string(),
            junit_report: false,
            compressed_report: false,
            compressed_report_directory: String::new(),
            compressed_report_file: String::new(),
            test_rail: TestRailConfig::default(),
            global_parameters: String::new(),
            command_line_arguments: String::new(),
            summarize: false,
        }
    }
}

impl StepConfig {
    /// Copy with surrounding whitespace removed from every string field.
    ///
    /// Multi-line blobs keep their inner separators.
    pub fn trimmed(&self) -> Self {
        let t = |s: &String| s.trim().to_string();
        Self {
            version: self.version,
            executable: t(&self.executable),
            test_suite: t(&self.test_suite),
            run_configuration: t(&self.run_configuration),
            report_directory: t(&self.report_directory),
            report_file: t(&self.report_file),
            report_extension: t(&self.report_extension),
            junit_report: self.junit_report,
            compressed_report: self.compressed_report,
            compressed_report_directory: t(&self.compressed_report_directory),
            compressed_report_file: t(&self.compressed_report_file),
            test_rail: TestRailConfig {
                enabled: self.test_rail.enabled,
                user: t(&self.test_rail.user),
                password: t(&self.test_rail.password),
                run_id: t(&self.test_rail.run_id),
                run_name: t(&self.test_rail.run_name),
            },
            global_parameters: t(&self.global_parameters),
            command_line_arguments: t(&self.command_line_arguments),
            summarize: self.summarize,
        }
    }
}
