//! Tokens produced by the analysis pipeline.
//!
//! ```
//! use confab::analysis::token::Token;
//!
//! let token = Token::new("weather", 2, 11..18);
//! assert_eq!(token.as_str(), "weather");
//! assert_eq!(&"What's the weather like"[token.span.clone()], "weather");
//! ```

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One term of analyzed text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Term text, after any filters have run.
    pub text: String,
    /// Index of the token within its stream.
    pub position: usize,
    /// Byte range of the token in the input it was cut from.
    pub span: Range<usize>,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize, span: Range<usize>) -> Self {
        Token {
            text: text.into(),
            position,
            span,
        }
    }

    /// Term text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Replace the text, keeping position and span.
    pub fn map_text<F: FnOnce(String) -> String>(self, f: F) -> Self {
        Token {
            text: f(self.text),
            ..self
        }
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Lazily evaluated sequence of tokens flowing from a tokenizer through filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Box any owned token iterator as a [`TokenStream`].
pub fn token_stream<I>(tokens: I) -> TokenStream
where
    I: IntoIterator<Item = Token>,
    I::IntoIter: 'static,
{
    Box::new(tokens.into_iter())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_text_keeps_span() {
        let token = Token::new("Hello", 0, 0..5).map_text(|t| t.to_lowercase());
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert_eq!(token.span, 0..5);
    }

    #[test]
    fn test_display_is_text() {
        assert_eq!(Token::new("budget", 3, 20..26).to_string(), "budget");
    }

    #[test]
    fn test_token_stream() {
        let stream = token_stream(vec![Token::new("see", 0, 0..3), Token::new("you", 1, 4..7)]);
        let terms: Vec<String> = stream.map(|t| t.text).collect();
        assert_eq!(terms, vec!["see", "you"]);
    }
}
