//! Pipeline: ties all argument processing stages together.

use serde::Serialize;

use crate::args::assembler::CommandAssembler;
use crate::args::parser::{Argument, ArgumentKind, TokenError};
use crate::args::registry::{flag_registry, lookup, FlagBehavior, FlagDef};
use crate::args::tokenizer::{split_tokens, DEFAULT_SEPARATORS};
use crate::config::StepConfig;
use crate::context::{PathProbe, RunContext};
use crate::error::AssemblyError;
use crate::invocation::Invocation;

/// Everything the host's launcher needs for one run.
///
/// Serializes with masked secrets.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionPlan {
    /// Command line, secrets flagged for masking.
    pub invocation: Invocation,
    /// Directory to launch the command in.
    pub working_directory: String,
    /// One entry per dropped parameter or argument.
    pub warnings: Vec<String>,
    /// Run summary, when requested.
    pub summary: Option<String>,
}

/// Build the execution plan for `config`.
///
/// This is the main entry point for the engine. Relative paths in `config`
/// are resolved against `job_root`; existence checks go through `probe`.
///
/// Fatal problems (missing files, absolute report names, incomplete TestRail
/// credentials) return an error and no invocation. Malformed or reserved
/// tokens are dropped and listed in [`ExecutionPlan::warnings`].
pub fn build_execution_plan(
    config: &StepConfig,
    job_root: &str,
    probe: &dyn PathProbe,
) -> Result<ExecutionPlan, AssemblyError> {
    let registry = flag_registry();

    // Stage 1: Resolve paths and validate fixed settings
    let mut ctx = RunContext::prepare(config, job_root, probe)?;

    let mut warnings = Vec::new();
    if !ctx.suite_matches_executable() {
        let suite = ctx.test_suite().unwrap_or_default();
        tracing::warn!(
            suite,
            executable = ctx.executable(),
            "Test suite does not match executable"
        );
        warnings.push(format!(
            "Test suite '{}' does not belong to executable '{}'",
            suite,
            ctx.executable()
        ));
    }

    // Stage 2: Parse global parameters
    let (parameters, dropped) = parse_blob(
        &config.global_parameters,
        ArgumentKind::NamedParameter,
        &registry,
    );
    for parameter in parameters {
        ctx.add_parameter(parameter);
    }
    warnings.extend(dropped);

    // Stage 3: Parse command line arguments
    let (arguments, dropped) = parse_blob(
        &config.command_line_arguments,
        ArgumentKind::Generic,
        &registry,
    );
    for argument in arguments {
        ctx.add_argument(argument);
    }
    warnings.extend(dropped);

    // Stage 4: Summarize
    let summary = config.summarize.then(|| ctx.to_string());

    // Stage 5: Assemble
    let invocation = CommandAssembler::assemble(&ctx);
    tracing::debug!(invocation = %invocation, "Assembled invocation");

    Ok(ExecutionPlan {
        invocation,
        working_directory: ctx.working_directory().to_string(),
        warnings,
        summary,
    })
}

/// Tokenize and parse one blob. Returns the accepted arguments, trimmed, and
/// a warning for each dropped token.
fn parse_blob(
    blob: &str,
    kind: ArgumentKind,
    registry: &[FlagDef],
) -> (Vec<Argument>, Vec<String>) {
    let label = match kind {
        ArgumentKind::NamedParameter => "Parameter",
        ArgumentKind::Generic => "Argument",
    };

    let mut accepted = Vec::new();
    let mut warnings = Vec::new();
    for token in split_tokens(blob, DEFAULT_SEPARATORS) {
        match Argument::parse(&token, kind, registry) {
            Ok(mut argument) => {
                argument.trim();
                accepted.push(argument);
            }
            Err(err) => {
                tracing::info!(token = %token, error = %err, "{} will be ignored", label);
                warnings.push(format!(
                    "{} '{}' will be ignored: {}{}",
                    label,
                    token,
                    err,
                    reason_suffix(&err, registry)
                ));
            }
        }
    }
    (accepted, warnings)
}

/// Explain why a flag was rejected: what a reserved flag is for, or which
/// flags parameters accept.
fn reason_suffix(err: &TokenError, registry: &[FlagDef]) -> String {
    if !err.is_flag_rejection() {
        return String::new();
    }
    match err {
        TokenError::ReservedFlag { flag, .. } => lookup(registry, flag)
            .map(|d| format!(" ({})", d.description))
            .unwrap_or_default(),
        _ => {
            let accepted: Vec<&str> = registry
                .iter()
                .filter(|d| d.behavior == FlagBehavior::Parameter)
                .flat_map(|d| std::iter::once(d.long).chain(d.short))
                .collect();
            format!(" (parameter flags: {})", accepted.join(", "))
        }
    }
}
