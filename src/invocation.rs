//! The finished command line handed to the host's process launcher.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Placeholder shown instead of a masked token.
pub const MASK: &str = "********";

/// A single invocation token.
#[derive(Clone, PartialEq, Eq)]
pub enum Token {
    Plain(String),
    /// Must never appear in plaintext output.
    Masked(String),
}

impl Token {
    pub fn is_masked(&self) -> bool {
        matches!(self, Token::Masked(_))
    }

    /// The raw text, for the launcher only.
    pub fn expose(&self) -> &str {
        match self {
            Token::Plain(s) | Token::Masked(s) => s,
        }
    }

    /// Text safe for logs.
    pub fn display_text(&self) -> &str {
        match self {
            Token::Plain(s) => s,
            Token::Masked(_) => MASK,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Plain(s) => f.debug_tuple("Plain").field(s).finish(),
            Token::Masked(_) => f.debug_tuple("Masked").field(&MASK).finish(),
        }
    }
}

#[derive(serde::Serialize)]
struct TokenView<'a> {
    text: &'a str,
    masked: bool,
}

impl Serialize for Token {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        TokenView {
            text: self.display_text(),
            masked: self.is_masked(),
        }
        .serialize(serializer)
    }
}

/// Ordered, immutable token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    tokens: Vec<Token>,
}

impl Invocation {
    pub(crate) fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Raw argument list for the launcher, secrets included.
    pub fn to_args(&self) -> Vec<String> {
        self.tokens.iter().map(|t| t.expose().to_string()).collect()
    }

    /// Parallel to [`Invocation::to_args`]: `true` where output must be masked.
    pub fn mask_flags(&self) -> Vec<bool> {
        self.tokens.iter().map(Token::is_masked).collect()
    }
}

/// Masked, quoted rendering for logs.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&quote(token.display_text()))?;
        }
        Ok(())
    }
}

impl Serialize for Invocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.tokens.len()))?;
        for token in &self.tokens {
            seq.serialize_element(token)?;
        }
        seq.end()
    }
}

/// Wrap in double quotes when the token contains whitespace.
pub fn quote(text: &str) -> String {
    let already_quoted = text.len() >= 2 && text.starts_with('"') && text.ends_with('"');
    if already_quoted || !text.chars().any(char::is_whitespace) {
        text.to_string()
    } else {
        format!("\"{}\"", text)
    }
}
