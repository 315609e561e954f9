//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, the main interface for text
//! analysis in Verity. Analyzers combine a tokenizer with filters to
//! transform raw text into the normalized token stream the vectorizer
//! consumes.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vectorizer
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1
//!             ↓
//!         Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`EnglishAnalyzer`](super::english::EnglishAnalyzer) - The canonical
//!   letter → lowercase → stop → stem pipeline
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom
//!   tokenizer + filter chains

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so analyzers can be shared across
/// concurrent classification calls.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This is the main method that performs the complete analysis
    /// pipeline, including tokenization and all configured filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Analyze the given text and return the token texts in order.
    ///
    /// Order and multiplicity are preserved; term frequency downstream
    /// depends on both.
    fn token_texts(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{Token, TokenStream};

    struct FixedAnalyzer;

    impl Analyzer for FixedAnalyzer {
        fn analyze(&self, _text: &str) -> Result<TokenStream> {
            let tokens = vec![Token::new("fake", 0), Token::new("fake", 1)];
            Ok(Box::new(tokens.into_iter()))
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_token_texts_preserves_multiplicity() {
        let analyzer = FixedAnalyzer;
        let texts = analyzer.token_texts("ignored").unwrap();
        assert_eq!(texts, vec!["fake".to_string(), "fake".to_string()]);
    }
}
