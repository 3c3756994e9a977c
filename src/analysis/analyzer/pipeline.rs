//! An analyzer assembled from a tokenizer and an ordered list of filters.
//!
//! ```
//! use std::sync::Arc;
//!
//! use confab::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use confab::analysis::token_filter::LowercaseFilter;
//! use confab::analysis::tokenizer::RegexTokenizer;
//!
//! // Keep single-letter words such as "I".
//! let analyzer = PipelineAnalyzer::new(Arc::new(RegexTokenizer::with_pattern(r"\w+").unwrap()))
//!     .add_filter(Arc::new(LowercaseFilter))
//!     .with_name("letters");
//!
//! assert_eq!(analyzer.terms("I Need HELP").unwrap(), ["i", "need", "help"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
    label: String,
}

impl PipelineAnalyzer {
    /// Start a pipeline with no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        let label = tokenizer.name().to_string();
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
            label,
        }
    }

    /// Append a filter; filters run in the order they are added.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.label.push('+');
        self.label.push_str(filter.name());
        self.filters.push(filter);
        self
    }

    /// Override the label shown in logs and `Debug` output.
    pub fn with_name<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.filters
            .iter()
            .try_fold(self.tokenizer.tokenize(text)?, |stream, filter| {
                filter.filter(stream)
            })
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PipelineAnalyzer").field(&self.label).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::LowercaseFilter;
    use crate::analysis::tokenizer::RegexTokenizer;

    fn regex() -> Arc<dyn Tokenizer> {
        Arc::new(RegexTokenizer::new().unwrap())
    }

    #[test]
    fn test_without_filters_case_is_kept() {
        let analyzer = PipelineAnalyzer::new(regex());
        assert_eq!(analyzer.terms("Take Care").unwrap(), ["Take", "Care"]);
        assert_eq!(analyzer.label(), "regex");
    }

    #[test]
    fn test_filters_are_applied() {
        let analyzer = PipelineAnalyzer::new(regex()).add_filter(Arc::new(LowercaseFilter));

        assert_eq!(analyzer.terms("Take Care").unwrap(), ["take", "care"]);
        assert_eq!(analyzer.filters().len(), 1);
        assert_eq!(analyzer.label(), "regex+lowercase");
        assert_eq!(format!("{analyzer:?}"), r#"PipelineAnalyzer("regex+lowercase")"#);
    }

    #[test]
    fn test_with_name() {
        let analyzer = PipelineAnalyzer::new(regex()).with_name("plain");
        assert_eq!(analyzer.label(), "plain");
    }
}
