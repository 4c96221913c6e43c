//! Flag registry: single source of truth for reserved flags.

/// How the assembler treats a flag typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagBehavior {
    /// Emitted by the assembler itself, never accepted from free-form arguments.
    AssemblerOwned,
    /// Reserved for free-form arguments, but the flag used by named parameters.
    Parameter,
}

/// A single reserved flag definition.
#[derive(Debug, Clone)]
pub struct FlagDef {
    /// Long form as typed after the leading `/` (e.g. "reportfile").
    pub long: &'static str,
    /// Optional short form (e.g. "rf").
    pub short: Option<&'static str>,
    /// How the assembler handles it.
    pub behavior: FlagBehavior,
    /// Human-readable description (for warnings).
    pub description: &'static str,
}

impl FlagDef {
    /// Check if this definition matches the given flag (exact, case-sensitive).
    pub fn matches(&self, flag: &str) -> bool {
        flag == self.long || self.short == Some(flag)
    }
}

/// Build the complete flag registry.
pub fn flag_registry() -> Vec<FlagDef> {
    vec![
        // === Named parameter flags ===
        FlagDef {
            long: "param",
            short: Some("pa"),
            behavior: FlagBehavior::Parameter,
            description: "Global test suite parameter",
        },
        // === Flags emitted by the assembler ===
        FlagDef {
            long: "listconfigparams",
            short: Some("lcp"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "List configuration parameters",
        },
        FlagDef {
            long: "reportfile",
            short: Some("rf"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "Report file location",
        },
        FlagDef {
            long: "zipreport",
            short: Some("zr"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "Compressed report",
        },
        FlagDef {
            long: "junit",
            short: Some("ju"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "JUnit compatible report",
        },
        FlagDef {
            long: "listglobalparams",
            short: Some("lp"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "List global parameters",
        },
        FlagDef {
            long: "listtestcaseparams",
            short: Some("ltcpa"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "List test case parameters",
        },
        FlagDef {
            long: "runconfig",
            short: Some("rc"),
            behavior: FlagBehavior::AssemblerOwned,
            description: "Run configuration",
        },
        FlagDef {
            long: "testrail",
            short: None,
            behavior: FlagBehavior::AssemblerOwned,
            description: "TestRail synchronization",
        },
        FlagDef {
            long: "truser",
            short: None,
            behavior: FlagBehavior::AssemblerOwned,
            description: "TestRail user name",
        },
        FlagDef {
            long: "trpass",
            short: None,
            behavior: FlagBehavior::AssemblerOwned,
            description: "TestRail password",
        },
        FlagDef {
            long: "trrunid",
            short: None,
            behavior: FlagBehavior::AssemblerOwned,
            description: "TestRail run id",
        },
        FlagDef {
            long: "trrunname",
            short: None,
            behavior: FlagBehavior::AssemblerOwned,
            description: "TestRail run name",
        },
    ]
}

/// Look up the definition for `flag` after trimming surrounding whitespace.
pub fn lookup<'a>(registry: &'a [FlagDef], flag: &str) -> Option<&'a FlagDef> {
    let flag = flag.trim();
    registry.iter().find(|d| d.matches(flag))
}

/// True if `flag` may not appear in free-form arguments.
pub fn is_reserved(registry: &[FlagDef], flag: &str) -> bool {
    lookup(registry, flag).is_some()
}

/// True if `flag` is accepted for named parameters.
pub fn is_whitelisted(registry: &[FlagDef], flag: &str) -> bool {
    lookup(registry, flag).is_some_and(|d| d.behavior == FlagBehavior::Parameter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACKLIST: &[&str] = &[
        "param", "pa", "listconfigparams", "lcp", "reportfile", "rf", "zipreport", "zr", "junit",
        "ju", "listglobalparams", "lp", "listtestcaseparams", "ltcpa", "runconfig", "rc",
        "testrail", "truser", "trpass", "trrunid", "trrunname",
    ];

    #[test]
    fn every_blacklisted_flag_is_reserved() {
        let registry = flag_registry();
        for flag in BLACKLIST {
            assert!(is_reserved(&registry, flag), "{flag} should be reserved");
        }
    }

    #[test]
    fn runner_flags_we_do_not_emit_are_free() {
        let registry = flag_registry();
        for flag in [
            "ep", "endpointconfig", "reportlevel", "rl", "testsuite", "ts", "module", "mo",
            "testcaseparam", "tcpa", "runlabel", "rul", "testcasedatarange", "tcdr",
            "zipreportfile",
        ] {
            assert!(!is_reserved(&registry, flag), "{flag} should not be reserved");
        }
    }

    #[test]
    fn matching_is_case_sensitive_and_trimmed() {
        let registry = flag_registry();
        assert!(is_reserved(&registry, " testrail "));
        assert!(!is_reserved(&registry, "TestRail"));
        assert!(!is_reserved(&registry, "JUNIT"));
    }

    #[test]
    fn only_param_flags_are_whitelisted() {
        let registry = flag_registry();
        assert!(is_whitelisted(&registry, "pa"));
        assert!(is_whitelisted(&registry, "param"));
        assert!(is_whitelisted(&registry, " pa "));
        for flag in BLACKLIST.iter().filter(|f| **f != "pa" && **f != "param") {
            assert!(!is_whitelisted(&registry, flag), "{flag} should not be whitelisted");
        }
        assert!(!is_whitelisted(&registry, "Pa"));
    }
}
