//! # Verity
//!
//! An on-device fake news detection core for Rust.
//!
//! Verity classifies a block of English text as likely fabricated or likely
//! reliable using a linear model trained offline. The crate covers the
//! inference pipeline only: deterministic text analysis (letter
//! tokenization, stopword removal, Porter stemming), TF-IDF feature
//! vectorization against a fixed vocabulary, and logistic-regression
//! scoring. Article extraction, host messaging, and result rendering are
//! left to the caller.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Byte-exact reproduction of the reference stemming and vectorizer
//!   normalization
//! - Flexible text analysis pipeline
//! - Immutable model bundle, safe for concurrent classification
//! - Serde-based model loading and JSON output
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use verity::classifier::TextClassifier;
//! use verity::model::ModelBundle;
//!
//! let bundle = Arc::new(
//!     ModelBundle::new(
//!         vec!["report".to_string(), "fake".to_string(), "breaking".to_string()],
//!         vec![1.0, 2.0, 1.5],
//!         vec![0.5, -1.2, 0.3],
//!         0.1,
//!     )
//!     .unwrap(),
//! );
//!
//! let classifier = TextClassifier::new(bundle).unwrap();
//! let prediction = classifier
//!     .classify("Breaking: this report is fake fake fake.")
//!     .unwrap();
//!
//! assert_eq!(prediction.label, 0);
//! assert!(prediction.probability < 0.5);
//! ```

pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod features;
pub mod model;

pub mod prelude {
    //! Commonly used types, re-exported for convenience.

    pub use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer, PipelineAnalyzer};
    pub use crate::classifier::{LogisticClassifier, Prediction, TextClassifier};
    pub use crate::error::{Result, VerityError};
    pub use crate::features::TfIdfVectorizer;
    pub use crate::model::ModelBundle;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
