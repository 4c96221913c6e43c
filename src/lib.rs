//! Command assembly engine for a Ranorex test-execution build step.
//!
//! Turns a [`StepConfig`] into an [`ExecutionPlan`]: the ordered command line
//! for the test executable, secrets flagged for masking, plus warnings for
//! every parameter or argument that was dropped.

pub mod args;
pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod invocation;
pub mod logging;
pub mod paths;
pub mod report;

pub use args::{build_execution_plan, Argument, ArgumentKind, ExecutionPlan, TokenError};
pub use config::{ConfigError, StepConfig};
pub use context::{LocalProbe, PathProbe, RunContext};
pub use error::AssemblyError;
pub use invocation::{Invocation, Token};
