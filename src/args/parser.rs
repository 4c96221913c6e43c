//! Argument parser: one token → `flag[:name[=value]]`.
//!
//! Generic command-line arguments and named test-suite parameters share the
//! same split routine; only the validation step differs per [`ArgumentKind`].

use std::fmt;

use thiserror::Error;

use crate::args::registry::{is_reserved, is_whitelisted, FlagDef};

/// Flag substituted when a named parameter is typed without one.
pub const DEFAULT_PARAMETER_FLAG: &str = "pa";

/// Which validation rule a token is parsed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Free-form command-line argument; reserved flags are rejected.
    Generic,
    /// Global test suite parameter; `name=value` required, flag whitelisted.
    NamedParameter,
}

/// Why a single token was rejected. Never fatal to the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token is empty")]
    Empty,

    #[error("'{token}' does not contain a flag")]
    MissingFlag { token: String },

    #[error("'{token}': name or value must not be empty")]
    EmptyNameOrValue { token: String },

    #[error("'{token}' is not a valid parameter: expected name=value")]
    MissingNameValuePair { token: String },

    #[error("'{token}' uses reserved flag '{flag}'")]
    ReservedFlag { token: String, flag: String },

    #[error("'{token}': flag '{flag}' is not a parameter flag")]
    NotParameterFlag { token: String, flag: String },
}

impl TokenError {
    /// True when the token was well-formed but its flag is not allowed.
    pub fn is_flag_rejection(&self) -> bool {
        matches!(
            self,
            TokenError::ReservedFlag { .. } | TokenError::NotParameterFlag { .. }
        )
    }
}

/// A parsed argument or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    kind: ArgumentKind,
    flag: String,
    name: Option<String>,
    value: Option<String>,
}

/// Kind-independent split of a token.
struct RawParts<'a> {
    flag: Option<&'a str>,
    name: Option<&'a str>,
    value: Option<&'a str>,
}

impl Argument {
    /// Parse `token` under the rules of `kind`.
    pub fn parse(token: &str, kind: ArgumentKind, registry: &[FlagDef]) -> Result<Self, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Empty);
        }
        let parts = split(token, kind)?;

        match kind {
            ArgumentKind::Generic => {
                let flag = parts.flag.unwrap_or_default();
                if flag.trim().is_empty() {
                    return Err(TokenError::MissingFlag {
                        token: token.to_string(),
                    });
                }
                if is_reserved(registry, flag) {
                    return Err(TokenError::ReservedFlag {
                        token: token.to_string(),
                        flag: flag.trim().to_string(),
                    });
                }
                Ok(Self {
                    kind,
                    flag: flag.to_string(),
                    name: parts.name.map(String::from),
                    value: parts.value.map(String::from),
                })
            }
            ArgumentKind::NamedParameter => {
                let (Some(name), Some(value)) = (parts.name, parts.value) else {
                    return Err(TokenError::MissingNameValuePair {
                        token: token.to_string(),
                    });
                };
                let flag = match parts.flag {
                    Some(f) if !f.trim().is_empty() => {
                        if !is_whitelisted(registry, f) {
                            return Err(TokenError::NotParameterFlag {
                                token: token.to_string(),
                                flag: f.trim().to_string(),
                            });
                        }
                        f.to_string()
                    }
                    _ => DEFAULT_PARAMETER_FLAG.to_string(),
                };
                Ok(Self {
                    kind,
                    flag,
                    name: Some(name.to_string()),
                    value: Some(value.to_string()),
                })
            }
        }
    }

    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    pub fn flag(&self) -> &str {
        &self.flag
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Trim whitespace around flag, name and value independently.
    pub fn trim(&mut self) {
        self.flag = self.flag.trim().to_string();
        if let Some(name) = self.name.as_mut() {
            *name = name.trim().to_string();
        }
        if let Some(value) = self.value.as_mut() {
            *value = value.trim().to_string();
        }
    }
}

/// Canonical form: `flag:name=value`, `flag:name` or `flag`.
impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.flag)?;
        if let Some(name) = &self.name {
            write!(f, ":{}", name)?;
            if let Some(value) = &self.value {
                write!(f, "={}", value)?;
            }
        }
        Ok(())
    }
}

fn split(token: &str, kind: ArgumentKind) -> Result<RawParts<'_>, TokenError> {
    let equals = token.find('=');
    // A ':' after the first '=' belongs to the value (e.g. `Dir=C:\Temp`).
    let colon = token
        .find(':')
        .filter(|c| equals.map_or(true, |e| *c < e));

    if let Some(colon) = colon {
        let flag = strip_heading_slash(&token[..colon]);
        let (name, value) = split_name_value(token, &token[colon + 1..])?;
        return Ok(RawParts {
            flag: Some(flag),
            name: Some(name),
            value,
        });
    }

    if equals.is_some() && kind == ArgumentKind::NamedParameter {
        // Flagless `name=value`; the default flag is filled in later.
        let (name, value) = split_name_value(token, token)?;
        return Ok(RawParts {
            flag: None,
            name: Some(name),
            value,
        });
    }

    Ok(RawParts {
        flag: Some(strip_heading_slash(token)),
        name: None,
        value: None,
    })
}

fn split_name_value<'a>(
    token: &str,
    rest: &'a str,
) -> Result<(&'a str, Option<&'a str>), TokenError> {
    let empty = || TokenError::EmptyNameOrValue {
        token: token.to_string(),
    };
    if rest.trim().is_empty() {
        return Err(empty());
    }
    match rest.find('=') {
        None => Ok((rest, None)),
        Some(pos) => {
            let (name, value) = (&rest[..pos], &rest[pos + 1..]);
            if name.trim().is_empty() || value.trim().is_empty() {
                return Err(empty());
            }
            Ok((name, Some(value)))
        }
    }
}

fn strip_heading_slash(flag: &str) -> &str {
    let flag = flag.trim_start();
    flag.strip_prefix('/').unwrap_or(flag)
}
