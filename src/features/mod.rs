//! TF-IDF feature extraction for Verity.
//!
//! Converts a normalized token stream into a fixed-length feature vector:
//! raw term counts (not frequencies) weighted by precomputed IDF values,
//! then L2-normalized. Both choices reproduce the scheme the model
//! coefficients were trained against; substituting frequency-scaled TF or
//! skipping the normalization silently corrupts every prediction.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::error::Result;
use crate::model::ModelBundle;

/// TF-IDF vectorizer over a fixed vocabulary.
///
/// Holds the immutable model bundle and a term→index map built once at
/// construction. Each call allocates only the per-call feature vector, so
/// a single vectorizer can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use verity::features::TfIdfVectorizer;
/// use verity::model::ModelBundle;
///
/// let bundle = Arc::new(
///     ModelBundle::new(
///         vec!["report".to_string(), "fake".to_string()],
///         vec![1.0, 2.0],
///         vec![0.5, -1.2],
///         0.1,
///     )
///     .unwrap(),
/// );
///
/// let vectorizer = TfIdfVectorizer::new(bundle).unwrap();
/// let features = vectorizer.vectorize("a fake report").unwrap();
///
/// assert_eq!(features.len(), 2);
/// ```
pub struct TfIdfVectorizer {
    /// The immutable model bundle.
    bundle: Arc<ModelBundle>,
    /// Term -> feature index, built once from the ordered vocabulary.
    term_index: AHashMap<String, usize>,
    /// Analyzer for normalization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.bundle.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new vectorizer with the canonical English analyzer.
    pub fn new(bundle: Arc<ModelBundle>) -> Result<Self> {
        Self::with_analyzer(bundle, Arc::new(EnglishAnalyzer::new()?))
    }

    /// Create a new vectorizer with a custom analyzer.
    ///
    /// The bundle is validated here so no invalid bundle can reach
    /// `vectorize`.
    pub fn with_analyzer(bundle: Arc<ModelBundle>, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        bundle.validate()?;

        let mut term_index = AHashMap::with_capacity(bundle.len());
        for (index, term) in bundle.vocabulary.iter().enumerate() {
            // First occurrence of a term keeps its index.
            term_index.entry(term.clone()).or_insert(index);
        }

        Ok(Self {
            bundle,
            term_index,
            analyzer,
        })
    }

    /// Convert text into an L2-normalized TF-IDF feature vector.
    ///
    /// Tokens absent from the vocabulary contribute nothing. If no token
    /// overlaps the vocabulary the all-zero vector is returned unchanged;
    /// otherwise the result has Euclidean norm 1.
    pub fn vectorize(&self, text: &str) -> Result<Vec<f64>> {
        let mut features = vec![0.0; self.bundle.len()];

        // Raw term counts against the fixed vocabulary.
        for token in self.analyzer.analyze(text)? {
            if let Some(&index) = self.term_index.get(&token.text) {
                features[index] += 1.0;
            }
        }

        // Apply IDF
        for (index, value) in features.iter_mut().enumerate() {
            *value *= self.bundle.idf[index];
        }

        // L2 normalization
        let norm = features.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut features {
                *value /= norm;
            }
        }

        Ok(features)
    }

    /// Get the size of the vocabulary (the feature-vector length).
    pub fn vocabulary_size(&self) -> usize {
        self.bundle.len()
    }

    /// Get the model bundle backing this vectorizer.
    pub fn bundle(&self) -> &Arc<ModelBundle> {
        &self.bundle
    }

    /// Get the analyzer backing this vectorizer.
    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }
}
