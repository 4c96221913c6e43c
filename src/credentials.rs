//! TestRail credentials.
//!
//! The password is held in a [`SecureString`] so it never ends up in logs,
//! summaries or `Debug` output. It leaves this module only as a masked
//! invocation token.

use std::fmt;

use crate::error::AssemblyError;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building the invocation.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureString(*****)")
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*****")
    }
}

/// Validated credentials for the TestRail synchronization flags.
#[derive(Debug, Clone)]
pub struct TestRailCredentials {
    username: String,
    password: SecureString,
    run_id: Option<String>,
    run_name: Option<String>,
}

impl TestRailCredentials {
    /// Build credentials; user name and password are both required.
    ///
    /// Blank run id / run name are treated as absent.
    pub fn new(
        username: &str,
        password: &str,
        run_id: &str,
        run_name: &str,
    ) -> Result<Self, AssemblyError> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() {
            return Err(AssemblyError::MissingCredentials { missing: "username" });
        }
        if password.is_empty() {
            return Err(AssemblyError::MissingCredentials { missing: "password" });
        }
        Ok(Self {
            username: username.to_string(),
            password: SecureString::new(password.to_string()),
            run_id: non_blank(run_id),
            run_name: non_blank(run_name),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &SecureString {
        &self.password
    }

    pub fn run_id(&self) -> Option<&str> {
        self.run_id.as_deref()
    }

    pub fn run_name(&self) -> Option<&str> {
        self.run_name.as_deref()
    }
}

impl fmt::Display for TestRailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tUsername:\t{}", self.username)?;
        writeln!(f, "\tPassword:\t{}", self.password)?;
        if let Some(id) = &self.run_id {
            writeln!(f, "\tRun Id:\t\t{}", id)?;
        }
        if let Some(name) = &self.run_name {
            writeln!(f, "\tRun Name:\t{}", name)?;
        }
        Ok(())
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
