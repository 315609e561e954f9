//! English analyzer: the canonical normalization pipeline.

use std::fmt::Debug;
use std::fmt::Formatter;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::letter::LetterTokenizer;
use crate::error::Result;

/// The canonical English analyzer: letter tokenization, lowercasing,
/// stopword removal, Porter stemming.
///
/// This is the exact normalization the model vocabulary was built with,
/// so it is the analyzer every vectorizer uses by default. Token order
/// and multiplicity are preserved end to end.
///
/// # Examples
///
/// ```
/// use verity::analysis::analyzer::{Analyzer, EnglishAnalyzer};
///
/// let analyzer = EnglishAnalyzer::new().unwrap();
/// let texts = analyzer.token_texts("Breaking: this report is fake!").unwrap();
///
/// assert_eq!(texts, vec!["break", "report", "fake"]);
/// ```
pub struct EnglishAnalyzer {
    inner: PipelineAnalyzer,
}

impl EnglishAnalyzer {
    /// Create a new English analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(LetterTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("english".to_string());

        Ok(Self { inner: analyzer })
    }
}

impl Default for EnglishAnalyzer {
    fn default() -> Self {
        Self::new().expect("English analyzer should be creatable with default settings")
    }
}

impl Analyzer for EnglishAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "english"
    }
}

impl Debug for EnglishAnalyzer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnglishAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}
