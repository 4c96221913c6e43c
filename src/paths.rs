//! Windows path heuristics for the execution node.
//!
//! All functions here are syntactic: the test executable always runs on a
//! Windows node, so paths are treated as Windows paths regardless of the
//! host this crate runs on. `std::path` would give false negatives on Unix.

use thiserror::Error;

/// Separator used on the execution node.
pub const SEPARATOR: char = '\\';

/// Errors from path string manipulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("path must not be empty")]
    Blank,

    #[error("file name '{file_name}' does not have an extension")]
    NoExtension { file_name: String },

    #[error("'{input}' is not a valid test suite file")]
    NotATestSuite { input: String },
}

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// True for drive-letter (`C:`) and UNC (`\\server`) paths.
pub fn is_absolute(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    path.chars().nth(1) == Some(':') || path.starts_with(r"\\")
}

/// Append `relative` to `base`.
///
/// A leading `.` segment is dropped, a doubled separator at the seam is
/// collapsed and forward slashes in `relative` become backslashes.
pub fn combine(base: &str, relative: &str) -> String {
    let relative = match relative.strip_prefix('.') {
        Some(rest) if rest.is_empty() || rest.starts_with(is_separator) => rest,
        _ => relative,
    };
    let relative = relative.replace('/', "\\");

    let base_has_sep = base.ends_with(is_separator);
    let rel_has_sep = relative.starts_with(SEPARATOR);

    if relative.is_empty() {
        base.to_string()
    } else if base_has_sep && rel_has_sep {
        format!("{}{}", base, &relative[1..])
    } else if base_has_sep || rel_has_sep || base.is_empty() {
        format!("{}{}", base, relative)
    } else {
        format!("{}{}{}", base, SEPARATOR, relative)
    }
}

/// Absolute report directory: `candidate` as-is when absolute, else below `base`.
pub fn resolve_report_directory(base: &str, candidate: &str) -> String {
    if is_absolute(candidate) {
        candidate.to_string()
    } else {
        combine(base, candidate)
    }
}

/// Directory the test executable lives in.
///
/// Relative executable paths are taken relative to the job root.
pub fn working_directory_of(job_root: &str, executable: &str) -> String {
    let parent = parent_of(executable);
    if is_absolute(executable) {
        // `C:Test.exe` has no parent segment; use the drive root.
        return parent.unwrap_or_else(|| {
            let drive_end = executable.len() - strip_drive(executable).len();
            format!("{}{}", &executable[..drive_end], SEPARATOR)
        });
    }
    match parent {
        Some(parent) => combine(job_root, &parent),
        None => job_root.to_string(),
    }
}

fn parent_of(path: &str) -> Option<String> {
    let trimmed = path.trim_end_matches(is_separator);
    let pos = trimmed.rfind(is_separator)?;
    let parent = &trimmed[..pos];
    if parent.is_empty() {
        // `\foo.exe` lives directly below the root.
        return Some(SEPARATOR.to_string());
    }
    if parent.ends_with(':') {
        return Some(format!("{}{}", parent, SEPARATOR));
    }
    Some(parent.to_string())
}

/// `Report.rxzlog` → `Report`.
pub fn strip_extension(file_name: &str) -> Result<String, PathError> {
    if file_name.trim().is_empty() {
        return Err(PathError::Blank);
    }
    match file_name.rfind('.') {
        Some(pos) if pos > 0 => Ok(file_name[..pos].to_string()),
        _ => Err(PathError::NoExtension {
            file_name: file_name.to_string(),
        }),
    }
}

/// Final segment of `full_path`.
pub fn base_file_name(full_path: &str) -> Result<String, PathError> {
    if full_path.trim().is_empty() {
        return Err(PathError::Blank);
    }
    let trimmed = full_path.trim_end_matches(is_separator);
    let name = match trimmed.rfind(is_separator) {
        Some(pos) => &trimmed[pos + 1..],
        None => strip_drive(trimmed),
    };
    if name.is_empty() {
        return Err(PathError::Blank);
    }
    Ok(name.to_string())
}

/// `C:Test.exe` → `Test.exe`.
fn strip_drive(path: &str) -> &str {
    match path.char_indices().nth(2) {
        Some((i, _)) if path.chars().nth(1) == Some(':') => &path[i..],
        _ => path,
    }
}

/// File name of the executable that belongs to a suite file.
///
/// Used to check that a configured suite matches its executable; also
/// useful to callers that only know the suite.
///
/// `Tests\Suite.rxtst` → `Suite.exe`; `.exe` inputs pass through.
pub fn executable_from_suite(suite: &str) -> Result<String, PathError> {
    let executable = if suite.contains(".rxtst") {
        suite.replace(".rxtst", ".exe")
    } else if suite.contains(".exe") {
        suite.to_string()
    } else {
        return Err(PathError::NotATestSuite {
            input: suite.to_string(),
        });
    };
    base_file_name(&executable)
}

/// `directory` + `file`, inserting a separator when needed.
pub fn join_file(directory: &str, file: &str) -> String {
    if directory.is_empty() || directory.ends_with(is_separator) {
        format!("{}{}", directory, file)
    } else {
        format!("{}{}{}", directory, SEPARATOR, file)
    }
}
