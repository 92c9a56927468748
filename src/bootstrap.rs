//! Startup sequence: settings, dataset, split, fit, evaluation.
//!
//! Everything here runs before the window exists. Any error is fatal and is
//! reported by the binary before exiting.

use std::path::Path;

use thiserror::Error;

use crate::config::{self, AppSettings, ConfigError};
use crate::dataset::{self, DatasetLoadError, SplitError};
use crate::ml::metrics::{self, EvaluationReport};
use crate::ml::{EmotionClassifier, FitOptions, TrainError};

/// Fatal startup failures. Display text is shown to the user as-is.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Dataset(#[from] DatasetLoadError),
    #[error("Invalid train/test split: {0}")]
    Split(#[from] SplitError),
    #[error("Failed to train the emotion classifier: {0}")]
    Train(#[from] TrainError),
}

/// Fitted state handed to the UI.
#[derive(Debug)]
pub struct Startup {
    pub settings: AppSettings,
    pub classifier: EmotionClassifier,
    pub train_rows: usize,
    pub evaluation: EvaluationReport,
    /// Set when the settings file could not be used and defaults were applied.
    pub settings_warning: Option<String>,
}

/// Load settings from the application directory, then [`prepare_with_settings`].
///
/// Only a settings file that exists but cannot be parsed is fatal. Any other
/// settings failure falls back to the defaults and is reported in
/// [`Startup::settings_warning`].
pub fn prepare() -> Result<Startup, StartupError> {
    let (settings, settings_warning) = match config::load_or_default() {
        Ok(settings) => (settings, None),
        Err(err @ ConfigError::ParseToml { .. }) => return Err(err.into()),
        Err(err) => {
            tracing::warn!("Settings unavailable, using defaults: {err}");
            (AppSettings::default(), Some(err.to_string()))
        }
    };
    let mut startup = prepare_with_settings(settings)?;
    startup.settings_warning = settings_warning;
    Ok(startup)
}

/// Load the dataset named by `settings`, split it and fit the classifier.
pub fn prepare_with_settings(settings: AppSettings) -> Result<Startup, StartupError> {
    let corpus = dataset::load_corpus(&settings.dataset_path)?;
    if corpus.is_empty() {
        return Err(DatasetLoadError::Empty.into());
    }
    let split = dataset::train_test_split(&corpus, settings.test_fraction, settings.split_seed)?;
    tracing::info!(
        "Split {} rows into {} training / {} evaluation (seed {})",
        corpus.len(),
        split.train.len(),
        split.test.len(),
        settings.split_seed
    );

    let classifier = EmotionClassifier::fit_corpus(
        &split.train,
        &FitOptions {
            alpha: settings.smoothing_alpha,
        },
    )?;
    tracing::info!(
        "Classifier ready: {} terms, classes [{}]",
        classifier.vocabulary_len(),
        classifier.classes().join(", ")
    );

    let evaluation = metrics::evaluate(&classifier, &split.test);
    metrics::log_evaluation(&evaluation);

    Ok(Startup {
        train_rows: split.train.len(),
        settings,
        classifier,
        evaluation,
        settings_warning: None,
    })
}

/// Shortcut used by tests and tools: default settings with a custom dataset path.
pub fn prepare_from_dataset(path: &Path) -> Result<Startup, StartupError> {
    prepare_with_settings(AppSettings {
        dataset_path: path.to_path_buf(),
        ..AppSettings::default()
    })
}
