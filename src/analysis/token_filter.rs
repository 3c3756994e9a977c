//! Token filter implementations for token transformation.
//!
//! Filters receive the stream produced by a tokenizer and return a new
//! stream, so they can be chained inside an analyzer:
//!
//! ```text
//! Tokenizer → Lowercase → Vectorizer
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lowercase;

pub use lowercase::LowercaseFilter;
