//! The analyzer used for both intent patterns and user input.
//!
//! Words of two or more characters, lowercased. Stop words are kept: "what",
//! "you" and "are" separate several intents from one another.

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

#[derive(Clone, Debug)]
pub struct StandardAnalyzer(PipelineAnalyzer);

impl StandardAnalyzer {
    pub fn new() -> Result<Self> {
        let pipeline = PipelineAnalyzer::new(Arc::new(RegexTokenizer::new()?))
            .add_filter(Arc::new(LowercaseFilter))
            .with_name("standard");
        Ok(StandardAnalyzer(pipeline))
    }

    pub fn pipeline(&self) -> &PipelineAnalyzer {
        &self.0
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.0.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}
