//! Command assembler: every invocation token in one place.

use crate::args::parser::Argument;
use crate::context::RunContext;
use crate::credentials::TestRailCredentials;
use crate::invocation::{Invocation, Token};
use crate::report::ReportSpec;

/// Shell entry point and its "run the following" switch.
pub const SHELL: [&str; 2] = ["cmd.exe", "/C"];

/// Builder for the invocation handed to the host's launcher.
///
/// Each `with_*` call appends its tokens; [`CommandAssembler::assemble`]
/// applies them in the fixed order the test executable expects.
#[derive(Debug, Clone)]
pub struct CommandAssembler {
    tokens: Vec<Token>,
}

impl CommandAssembler {
    /// Start with an empty token list.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Assemble the full invocation for a prepared run.
    pub fn assemble(ctx: &RunContext) -> Invocation {
        Self::new()
            .with_shell()
            .with_executable(ctx.executable())
            .with_test_suite(ctx.test_suite())
            .with_run_configuration(ctx.run_configuration())
            .with_report(ctx.report())
            .with_test_rail(ctx.test_rail())
            .with_arguments(ctx.parameters())
            .with_arguments(ctx.arguments())
            .build()
    }

    /// `cmd.exe /C`.
    pub fn with_shell(mut self) -> Self {
        self.tokens.extend(SHELL.iter().map(|s| plain(*s)));
        self
    }

    pub fn with_executable(mut self, executable: &str) -> Self {
        self.tokens.push(plain(executable));
        self
    }

    /// `/ts:<suite>`, when a suite was resolved.
    pub fn with_test_suite(mut self, suite: Option<&str>) -> Self {
        if let Some(suite) = suite {
            self.tokens.push(plain(format!("/ts:{}", suite)));
        }
        self
    }

    /// `/runconfig:<name>`, when set.
    pub fn with_run_configuration(mut self, run_configuration: Option<&str>) -> Self {
        if let Some(rc) = run_configuration {
            self.tokens.push(plain(format!("/runconfig:{}", rc)));
        }
        self
    }

    /// Report file, then `/junit`, then the compressed report flags.
    pub fn with_report(mut self, report: &ReportSpec) -> Self {
        self.tokens
            .push(plain(format!("/reportfile:{}", report.report_file_argument())));
        if report.junit() {
            self.tokens.push(plain("/junit"));
        }
        if let Some(zip) = report.compressed_report_argument() {
            self.tokens.push(plain("/zipreport"));
            self.tokens.push(plain(format!("/zipreportfile:{}", zip)));
        }
        self
    }

    /// TestRail flags; user name and password are always masked.
    pub fn with_test_rail(mut self, test_rail: Option<&TestRailCredentials>) -> Self {
        let Some(tr) = test_rail else {
            return self;
        };
        self.tokens.push(plain("/testrail"));
        self.tokens
            .push(Token::Masked(format!("/truser={}", tr.username())));
        self.tokens
            .push(Token::Masked(format!("/trpass={}", tr.password().expose())));
        if let Some(id) = tr.run_id() {
            self.tokens.push(plain(format!("/trrunid={}", id)));
        }
        if let Some(name) = tr.run_name() {
            self.tokens.push(plain(format!("/trrunname={}", name)));
        }
        self
    }

    /// Parsed parameters or arguments, in declaration order.
    pub fn with_arguments(mut self, arguments: &[Argument]) -> Self {
        self.tokens
            .extend(arguments.iter().map(|a| plain(a.to_string())));
        self
    }

    /// Freeze the token list.
    pub fn build(self) -> Invocation {
        Invocation::new(self.tokens)
    }
}

impl Default for CommandAssembler {
    fn default() -> Self {
        Self::new()
    }
}

fn plain(text: impl Into<String>) -> Token {
    Token::Plain(text.into())
}
