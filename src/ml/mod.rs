//! Text classification: TF-IDF features feeding a multinomial Naive Bayes model.
//!
//! Everything here is fitted once at startup and read-only afterwards.

pub mod metrics;
pub mod naive_bayes;
pub mod pipeline;
pub mod tfidf;

pub use pipeline::{EmotionClassifier, FitOptions};

use thiserror::Error;

/// Errors raised while fitting the classifier.
#[derive(Debug, Error, PartialEq)]
pub enum TrainError {
    #[error("Empty training set")]
    EmptyTrainingSet,
    #[error("Mismatched training inputs: {texts} texts, {labels} labels")]
    LengthMismatch { texts: usize, labels: usize },
    #[error("Smoothing alpha must be a positive number, got {0}")]
    InvalidAlpha(f64),
    /// No training text produced a single token.
    #[error("No vocabulary could be learned from the training texts")]
    EmptyVocabulary,
    #[error("Class index {0} is out of range")]
    UnknownClassIndex(usize),
}
