//! Argument handling pipeline for rxrun.
//!
//! Free-form parameter and argument blobs typed into the job form become
//! validated tokens of the final invocation:
//!
//! ```text
//! Blob → Tokenize → Parse (+ registry) → Trim → Assemble → ExecutionPlan
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod parser;
mod pipeline;
mod registry;
mod tokenizer;

pub use assembler::{CommandAssembler, SHELL};
pub use parser::{Argument, ArgumentKind, TokenError, DEFAULT_PARAMETER_FLAG};
pub use pipeline::{build_execution_plan, ExecutionPlan};
pub use registry::{flag_registry, is_reserved, is_whitelisted, lookup, FlagBehavior, FlagDef};
pub use tokenizer::{split_tokens, DEFAULT_SEPARATORS};
