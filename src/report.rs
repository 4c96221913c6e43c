//! Report location and format options.

use std::fmt;

use crate::config::{StepConfig, DEFAULT_REPORT_EXTENSION, DEFAULT_REPORT_NAME};
use crate::error::AssemblyError;
use crate::paths::{is_absolute, join_file, resolve_report_directory, strip_extension};

/// Extension of compressed reports.
pub const COMPRESSED_REPORT_EXTENSION: &str = "rxzlog";

/// Resolved report settings. Directories are absolute, base names carry no
/// extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSpec {
    directory: String,
    base_name: String,
    extension: String,
    junit: bool,
    compressed: Option<CompressedReport>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CompressedReport {
    directory: String,
    base_name: String,
}

impl ReportSpec {
    /// Resolve the report settings of `config` against `working_directory`.
    ///
    /// Fails with [`AssemblyError::InvalidPath`] if a report file name is an
    /// absolute path.
    pub fn from_config(working_directory: &str, config: &StepConfig) -> Result<Self, AssemblyError> {
        let directory = directory_or(working_directory, &config.report_directory);
        let base_name = base_name_or(&config.report_file, DEFAULT_REPORT_NAME, "report file name")?;

        let extension = match config.report_extension.trim() {
            "" => DEFAULT_REPORT_EXTENSION.to_string(),
            ext => ext.trim_start_matches('.').to_string(),
        };

        let compressed = if config.compressed_report {
            Some(CompressedReport {
                directory: directory_or(working_directory, &config.compressed_report_directory),
                base_name: base_name_or(
                    &config.compressed_report_file,
                    &base_name,
                    "compressed report file name",
                )?,
            })
        } else {
            None
        };

        Ok(Self {
            directory,
            base_name,
            extension,
            junit: config.junit_report,
            compressed,
        })
    }

    pub fn directory(&self) -> &str {
        &self.directory
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn junit(&self) -> bool {
        self.junit
    }

    pub fn compressed(&self) -> bool {
        self.compressed.is_some()
    }

    /// Full report path, e.g. `C:\Reports\Smoke.rxlog`.
    pub fn report_file_argument(&self) -> String {
        join_file(
            &self.directory,
            &format!("{}.{}", self.base_name, self.extension),
        )
    }

    /// Full compressed report path, if compression is enabled.
    pub fn compressed_report_argument(&self) -> Option<String> {
        self.compressed.as_ref().map(|c| {
            join_file(
                &c.directory,
                &format!("{}.{}", c.base_name, COMPRESSED_REPORT_EXTENSION),
            )
        })
    }
}

fn directory_or(working_directory: &str, configured: &str) -> String {
    let configured = configured.trim();
    if configured.is_empty() {
        working_directory.to_string()
    } else {
        resolve_report_directory(working_directory, configured)
    }
}

fn base_name_or(configured: &str, default: &str, what: &'static str) -> Result<String, AssemblyError> {
    let configured = configured.trim();
    if configured.is_empty() {
        return Ok(default.to_string());
    }
    if is_absolute(configured) {
        return Err(AssemblyError::InvalidPath {
            path: configured.to_string(),
            what,
        });
    }
    // Names without an extension are used as-is.
    Ok(strip_extension(configured).unwrap_or_else(|_| configured.to_string()))
}

impl fmt::Display for ReportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report:")?;
        writeln!(f, "\tDirectory:\t{}", self.directory)?;
        writeln!(f, "\tName:\t\t{}", self.base_name)?;
        writeln!(f, "\tExtension:\t{}", self.extension)?;
        writeln!(f, "Compressed report:\t{}", self.compressed())?;
        if let Some(c) = &self.compressed {
            writeln!(f, "\tDirectory:\t{}", c.directory)?;
            writeln!(f, "\tName:\t\t{}", c.base_name)?;
            writeln!(f, "\tExtension:\t{}", COMPRESSED_REPORT_EXTENSION)?;
        }
        writeln!(f, "JUnit report:\t\t{}", self.junit)
    }
}
