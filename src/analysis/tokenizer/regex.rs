//! Tokenizer that emits every match of a regular expression.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream, token_stream};
use crate::error::{ConfabError, Result};

/// Word pattern used by default: runs of two or more word characters.
///
/// Single-character words ("I", "a") never become terms.
pub const DEFAULT_PATTERN: &str = r"(?u)\b\w\w+\b";

/// A tokenizer that extracts every match of a regular expression.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with [`DEFAULT_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(DEFAULT_PATTERN)
    }

    /// Use `pattern` instead of the default word pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ConfabError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| Token::new(mat.as_str(), position, mat.range()))
            .collect();

        Ok(token_stream(tokens))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
