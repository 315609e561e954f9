//! Logistic-regression scoring for Verity.
//!
//! The classifier computes a dot product between the feature vector and
//! the model coefficients, adds the intercept, and applies the logistic
//! transform. It is stateless and fully deterministic: a single pass over
//! the feature vector, no retries, no partial results.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::error::{Result, VerityError};
use crate::features::TfIdfVectorizer;
use crate::model::ModelBundle;

/// The logistic (sigmoid) transform.
fn sigmoid(score: f64) -> f64 {
    1.0 / (1.0 + (-score).exp())
}

/// A classification outcome.
///
/// Label 1 means likely fabricated; label 0 means likely reliable.
/// Confidence is the probability of whichever label was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Binary decision: 1 = likely fabricated, 0 = likely reliable.
    pub label: u8,
    /// Probability that the text is fabricated, in (0, 1).
    pub probability: f64,
    /// Probability of the chosen label: `max(p, 1 - p)`.
    pub confidence: f64,
}

/// Logistic-regression classifier over TF-IDF features.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use verity::classifier::LogisticClassifier;
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
/// let classifier = LogisticClassifier::new(bundle).unwrap();
/// let prediction = classifier.predict(&[0.0, 1.0]).unwrap();
///
/// assert_eq!(prediction.label, 0);
/// ```
#[derive(Clone, Debug)]
pub struct LogisticClassifier {
    /// The immutable model bundle.
    bundle: Arc<ModelBundle>,
}

impl LogisticClassifier {
    /// Create a new classifier, validating the bundle.
    pub fn new(bundle: Arc<ModelBundle>) -> Result<Self> {
        bundle.validate()?;
        Ok(Self { bundle })
    }

    /// Score a feature vector and return the prediction.
    ///
    /// The feature slice must have one entry per vocabulary position;
    /// anything else is a model-contract violation, not a scorable input.
    pub fn predict(&self, features: &[f64]) -> Result<Prediction> {
        if features.len() != self.bundle.coefficients.len() {
            return Err(VerityError::model(format!(
                "feature length {} does not match coefficient length {}",
                features.len(),
                self.bundle.coefficients.len()
            )));
        }

        let score = self.bundle.intercept
            + features
                .iter()
                .zip(self.bundle.coefficients.iter())
                .map(|(f, c)| f * c)
                .sum::<f64>();

        let probability = sigmoid(score);
        let label = u8::from(probability > 0.5);

        Ok(Prediction {
            label,
            probability,
            confidence: probability.max(1.0 - probability),
        })
    }
}

/// End-to-end text classifier: normalize, vectorize, score.
///
/// Composes the analysis pipeline, the TF-IDF vectorizer, and the
/// logistic classifier over one shared model bundle. Each call allocates
/// only transient local state, so one instance can serve concurrent
/// callers without coordination.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use verity::classifier::TextClassifier;
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
/// let classifier = TextClassifier::new(bundle).unwrap();
/// let prediction = classifier.classify("this report is fake").unwrap();
///
/// assert!(prediction.probability > 0.0 && prediction.probability < 1.0);
/// ```
#[derive(Debug)]
pub struct TextClassifier {
    vectorizer: TfIdfVectorizer,
    classifier: LogisticClassifier,
}

impl TextClassifier {
    /// Create a new text classifier with the canonical English analyzer.
    pub fn new(bundle: Arc<ModelBundle>) -> Result<Self> {
        Ok(Self {
            vectorizer: TfIdfVectorizer::new(Arc::clone(&bundle))?,
            classifier: LogisticClassifier::new(bundle)?,
        })
    }

    /// Create a new text classifier with a custom analyzer.
    pub fn with_analyzer(bundle: Arc<ModelBundle>, analyzer: Arc<dyn Analyzer>) -> Result<Self> {
        Ok(Self {
            vectorizer: TfIdfVectorizer::with_analyzer(Arc::clone(&bundle), analyzer)?,
            classifier: LogisticClassifier::new(bundle)?,
        })
    }

    /// Classify a block of text.
    ///
    /// Empty or fully out-of-vocabulary input is defined behavior, not an
    /// error: the zero vector is scored and the result is
    /// `sigmoid(intercept)`.
    pub fn classify(&self, text: &str) -> Result<Prediction> {
        let features = self.vectorizer.vectorize(text)?;
        self.classifier.predict(&features)
    }

    /// Classify many texts in parallel.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Result<Vec<Prediction>> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    /// Normalize text into the ordered stemmed-token sequence the
    /// vectorizer counts.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>> {
        self.vectorizer.analyzer().token_texts(text)
    }

    /// Get the vectorizer backing this classifier.
    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }
}
