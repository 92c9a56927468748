//! Labeled corpus loading and splitting.

pub mod loader;
pub mod split;

pub use loader::{Corpus, DatasetLoadError, LABEL_COLUMN, LabeledText, TEXT_COLUMN, load_corpus};
pub use split::{Split, SplitError, train_test_split};
