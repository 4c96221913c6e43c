//! Tokenizer: free-form configuration blob → trimmed tokens.

/// Separators used by the parameter and argument text areas.
pub const DEFAULT_SEPARATORS: &[char] = &['\t', '\r', '\n', ';'];

/// Split `blob` on any of `separators`, trimming each piece and dropping
/// empty ones. Order is preserved.
pub fn split_tokens(blob: &str, separators: &[char]) -> Vec<String> {
    blob.split(|c: char| separators.contains(&c))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_custom_separators() {
        let tokens = split_tokens("This,is,Sparta;Test\tBanana", &[',', ';', '\t']);
        assert_eq!(tokens, vec!["This", "is", "Sparta", "Test", "Banana"]);
    }

    #[test]
    fn drops_blank_tokens_and_trims() {
        let tokens = split_tokens("  pa:A=1 ;;\r\n\t ; /rul:x  \n", DEFAULT_SEPARATORS);
        assert_eq!(tokens, vec!["pa:A=1", "/rul:x"]);
    }

    #[test]
    fn blank_input_yields_nothing() {
        assert!(split_tokens("", DEFAULT_SEPARATORS).is_empty());
        assert!(split_tokens("   \t\n ", DEFAULT_SEPARATORS).is_empty());
    }

    #[test]
    fn spaces_are_not_separators() {
        let tokens = split_tokens("pa:Test name=value 1", DEFAULT_SEPARATORS);
        assert_eq!(tokens, vec!["pa:Test name=value 1"]);
    }
}
