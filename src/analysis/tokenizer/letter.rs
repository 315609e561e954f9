//! Letter-run tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, VerityError};

/// A tokenizer that extracts maximal runs of ASCII letters.
///
/// Every byte outside `A-Z`/`a-z` acts as a separator, which makes this
/// equivalent to replacing all non-letter characters with whitespace and
/// splitting. Unexpected scripts, digits, and symbols never produce an
/// error; they simply never appear in a token.
///
/// # Examples
///
/// ```
/// use verity::analysis::token::Token;
/// use verity::analysis::tokenizer::Tokenizer;
/// use verity::analysis::tokenizer::letter::LetterTokenizer;
///
/// let tokenizer = LetterTokenizer::new().unwrap();
/// let tokens: Vec<Token> = tokenizer.tokenize("Breaking: 24/7 news!").unwrap().collect();
///
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].text, "Breaking");
/// assert_eq!(tokens[1].text, "news");
/// ```
#[derive(Clone, Debug)]
pub struct LetterTokenizer {
    /// The regex pattern used to extract letter runs
    pattern: Arc<Regex>,
}

impl LetterTokenizer {
    /// Create a new letter tokenizer.
    pub fn new() -> Result<Self> {
        let regex = Regex::new(r"[a-zA-Z]+")
            .map_err(|e| VerityError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(LetterTokenizer {
            pattern: Arc::new(regex),
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for LetterTokenizer {
    fn default() -> Self {
        Self::new().expect("Default letter pattern should be valid")
    }
}

impl Tokenizer for LetterTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "letter"
    }
}
