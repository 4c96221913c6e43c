//! Shared test utilities.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use rxrun::{PathProbe, StepConfig};

pub const JOB_ROOT: &str = r"C:\Jenkins\workspace\smoke";
pub const WORKDIR: &str = r"C:\Jenkins\workspace\smoke\bin\Release";

/// In-memory filesystem over Windows-style paths.
#[derive(Debug, Default)]
pub struct MemoryProbe {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<String>>,
}

impl MemoryProbe {
    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.insert(dir.to_string());
        self
    }

    pub fn with_file(mut self, dir: &str, name: &str) -> Self {
        self.dirs.insert(dir.to_string());
        self.files
            .entry(dir.to_string())
            .or_default()
            .push(name.to_string());
        self
    }
}

impl PathProbe for MemoryProbe {
    fn exists(&self, path: &str) -> bool {
        if self.dirs.contains(path) {
            return true;
        }
        match path.rfind('\\') {
            Some(pos) => self
                .files
                .get(&path[..pos])
                .is_some_and(|f| f.iter().any(|n| n == &path[pos + 1..])),
            None => false,
        }
    }

    fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains(path)
    }

    fn files_with_extension(&self, dir: &str, extension: &str) -> Vec<String> {
        let suffix = format!(".{}", extension);
        self.files
            .get(dir)
            .map(|f| f.iter().filter(|n| n.ends_with(&suffix)).cloned().collect())
            .unwrap_or_default()
    }
}

/// Job workspace with `bin\Release\Test.exe` and `Test.rxtst`.
pub fn workspace() -> MemoryProbe {
    MemoryProbe::default()
        .with_dir(JOB_ROOT)
        .with_file(WORKDIR, "Test.exe")
        .with_file(WORKDIR, "Test.rxtst")
}

/// Minimal valid configuration for [`workspace`].
pub fn step_config() -> StepConfig {
    StepConfig {
        executable: r"bin\Release\Test.exe".into(),
        test_suite: "Test.rxtst".into(),
        ..StepConfig::default()
    }
}
