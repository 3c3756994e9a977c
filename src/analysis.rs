//! Text analysis for Confab.
//!
//! Turns raw user text into the terms the TF-IDF vectorizer counts. The
//! pipeline is a tokenizer followed by a chain of filters, wrapped up behind
//! the [`Analyzer`](analyzer::Analyzer) trait.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::{Analyzer, PipelineAnalyzer, StandardAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, LowercaseFilter};
pub use tokenizer::{RegexTokenizer, Tokenizer};
