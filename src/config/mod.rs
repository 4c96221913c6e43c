//! Build-step configuration.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{
    StepConfig, TestRailConfig, CONFIG_VERSION, DEFAULT_REPORT_EXTENSION, DEFAULT_REPORT_NAME,
};
