//! Unicode lowercasing.
//!
//! ```
//! use confab::analysis::token::{Token, token_stream};
//! use confab::analysis::token_filter::{Filter, LowercaseFilter};
//!
//! let stream = token_stream(vec![Token::new("See", 0, 0..3), Token::new("YOU", 1, 4..7)]);
//! let terms: Vec<String> = LowercaseFilter.filter(stream).unwrap().map(|t| t.text).collect();
//!
//! assert_eq!(terms, ["see", "you"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Lowercases every token so "Hello", "HELLO" and "hello" share one term.
///
/// Spans are untouched even when lowercasing changes the byte length.
#[derive(Clone, Copy, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            if token.text.chars().any(char::is_uppercase) {
                token.map_text(|text| text.to_lowercase())
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, token_stream};

    fn lowercase(tokens: Vec<Token>) -> Vec<Token> {
        LowercaseFilter::new()
            .filter(token_stream(tokens))
            .unwrap()
            .collect()
    }

    #[test]
    fn test_mixed_case() {
        let result = lowercase(vec![
            Token::new("Credit", 0, 0..6),
            Token::new("SCORE", 1, 7..12),
            Token::new("check", 2, 13..18),
        ]);

        let terms: Vec<&str> = result.iter().map(Token::as_str).collect();
        assert_eq!(terms, vec!["credit", "score", "check"]);
        assert_eq!(result[1].span, 7..12);
        assert_eq!(result[2].position, 2);
    }

    #[test]
    fn test_non_ascii() {
        let result = lowercase(vec![Token::new("ÇA", 0, 0..3), Token::new("ÅRET", 1, 4..9)]);
        assert_eq!(result[0].text, "ça");
        assert_eq!(result[1].text, "året");
    }

    #[test]
    fn test_empty_stream() {
        assert!(lowercase(Vec::new()).is_empty());
        assert_eq!(LowercaseFilter.name(), "lowercase");
    }
}
