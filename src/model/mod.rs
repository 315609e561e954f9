//! Model bundle types for Verity.
//!
//! The model bundle is the immutable set of parameters produced by offline
//! training: the ordered vocabulary, the parallel IDF weights, the
//! logistic-regression coefficients, and the intercept. Position in the
//! vocabulary is the feature index — the contract binding the three arrays
//! together — so the vocabulary must never be reordered at runtime. The
//! bundle is loaded once, validated before any inference call, and shared
//! read-only (typically behind an `Arc`) across every classification call.
//!
//! # Examples
//!
//! ```
//! use verity::model::ModelBundle;
//!
//! let bundle = ModelBundle::new(
//!     vec!["report".to_string(), "fake".to_string()],
//!     vec![1.0, 2.0],
//!     vec![0.5, -1.2],
//!     0.1,
//! )
//! .unwrap();
//!
//! assert_eq!(bundle.len(), 2);
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerityError};

/// Immutable model parameters for vectorization and scoring.
///
/// The storage format is the caller's concern; any source that
/// deserializes into this record works. Validation must pass before the
/// bundle reaches a vectorizer or classifier: the constructors in
/// [`crate::features`] and [`crate::classifier`] enforce this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelBundle {
    /// Ordered vocabulary of stemmed terms; position is the feature index.
    pub vocabulary: Vec<String>,
    /// Inverse document frequency per vocabulary position.
    pub idf: Vec<f64>,
    /// Logistic-regression coefficient per vocabulary position.
    pub coefficients: Vec<f64>,
    /// Logistic-regression intercept.
    pub intercept: f64,
}

impl ModelBundle {
    /// Create a new model bundle, validating the array-length contract.
    pub fn new(
        vocabulary: Vec<String>,
        idf: Vec<f64>,
        coefficients: Vec<f64>,
        intercept: f64,
    ) -> Result<Self> {
        let bundle = ModelBundle {
            vocabulary,
            idf,
            coefficients,
            intercept,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Validate the bundle invariants.
    ///
    /// The vocabulary must be non-empty and the IDF and coefficient arrays
    /// must match its length. An invalid bundle must be rejected before
    /// any inference call; there is no partial recovery.
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(VerityError::model("vocabulary must not be empty"));
        }
        if self.idf.len() != self.vocabulary.len() {
            return Err(VerityError::model(format!(
                "idf length {} does not match vocabulary length {}",
                self.idf.len(),
                self.vocabulary.len()
            )));
        }
        if self.coefficients.len() != self.vocabulary.len() {
            return Err(VerityError::model(format!(
                "coefficient length {} does not match vocabulary length {}",
                self.coefficients.len(),
                self.vocabulary.len()
            )));
        }
        Ok(())
    }

    /// Load and validate a bundle from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let bundle: ModelBundle = serde_json::from_str(json)?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Load and validate a bundle from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let bundle: ModelBundle = serde_json::from_reader(BufReader::new(file))?;
        bundle.validate()?;
        Ok(bundle)
    }

    /// Get the vocabulary size (the feature-vector length).
    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Check whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_valid_bundle() {
        let bundle = ModelBundle::new(
            terms(&["report", "fake", "break"]),
            vec![1.0, 2.0, 1.5],
            vec![0.5, -1.2, 0.3],
            0.1,
        )
        .unwrap();

        assert_eq!(bundle.len(), 3);
        assert!(!bundle.is_empty());
        assert!(bundle.validate().is_ok());
    }

    #[test]
    fn test_empty_vocabulary_rejected() {
        let result = ModelBundle::new(vec![], vec![], vec![], 0.0);

        match result {
            Err(VerityError::Model(msg)) => assert!(msg.contains("empty")),
            other => panic!("expected model error, got {other:?}"),
        }
    }

    #[test]
    fn test_idf_length_mismatch_rejected() {
        let result = ModelBundle::new(terms(&["report", "fake"]), vec![1.0], vec![0.5, 0.3], 0.0);

        match result {
            Err(VerityError::Model(msg)) => assert!(msg.contains("idf length 1")),
            other => panic!("expected model error, got {other:?}"),
        }
    }

    #[test]
    fn test_coefficient_length_mismatch_rejected() {
        let result = ModelBundle::new(
            terms(&["report", "fake"]),
            vec![1.0, 2.0],
            vec![0.5, 0.3, 0.9],
            0.0,
        );

        match result {
            Err(VerityError::Model(msg)) => assert!(msg.contains("coefficient length 3")),
            other => panic!("expected model error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "vocabulary": ["report", "fake"],
            "idf": [1.0, 2.0],
            "coefficients": [0.5, -1.2],
            "intercept": 0.1
        }"#;

        let bundle = ModelBundle::from_json(json).unwrap();

        assert_eq!(bundle.vocabulary, terms(&["report", "fake"]));
        assert_eq!(bundle.intercept, 0.1);
    }

    #[test]
    fn test_from_json_rejects_mismatch() {
        let json = r#"{
            "vocabulary": ["report", "fake"],
            "idf": [1.0],
            "coefficients": [0.5, -1.2],
            "intercept": 0.1
        }"#;

        assert!(ModelBundle::from_json(json).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let bundle = ModelBundle::new(
            terms(&["report", "fake"]),
            vec![1.0, 2.0],
            vec![0.5, -1.2],
            0.1,
        )
        .unwrap();

        let json = serde_json::to_string(&bundle).unwrap();
        let loaded = ModelBundle::from_json(&json).unwrap();

        assert_eq!(loaded, bundle);
    }
}
