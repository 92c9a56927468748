//! CSV loader for the labeled emotion corpus.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

/// Header naming the free-text column.
pub const TEXT_COLUMN: &str = "text";
/// Header naming the emotion label column.
pub const LABEL_COLUMN: &str = "Emotion";

#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("Dataset file '{}' not found.", display_name(.path))]
    NotFound { path: PathBuf },
    #[error("Dataset file is empty.")]
    Empty,
    #[error("Dataset does not have the required columns 'text' and 'Emotion'.")]
    MissingColumns,
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed dataset {path}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// One labeled training example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledText {
    pub text: String,
    pub label: String,
}

/// In-memory labeled corpus in file order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    rows: Vec<LabeledText>,
}

impl Corpus {
    pub fn from_rows(rows: Vec<LabeledText>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[LabeledText] {
        &self.rows
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.text.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.label.as_str())
    }

    /// Unique labels in sorted order.
    pub fn class_ids(&self) -> Vec<String> {
        self.labels()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Load the labeled corpus from a CSV file with a header row.
pub fn load_corpus(path: &Path) -> Result<Corpus, DatasetLoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => DatasetLoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DatasetLoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let corpus = read_corpus(BufReader::new(file), path)?;
    tracing::info!(
        "Loaded {} labeled rows from {}",
        corpus.len(),
        path.display()
    );
    Ok(corpus)
}

pub(crate) fn read_corpus<R: Read>(reader: R, path: &Path) -> Result<Corpus, DatasetLoadError> {
    let csv_err = |source: csv::Error| DatasetLoadError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers().map_err(csv_err)?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(DatasetLoadError::Empty);
    }
    let (text_idx, label_idx) = column_indices(&headers).ok_or(DatasetLoadError::MissingColumns)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    let mut seen = 0usize;
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        seen += 1;
        match (record.get(text_idx), record.get(label_idx)) {
            (Some(text), Some(label)) if !text.is_empty() && !label.is_empty() => {
                rows.push(LabeledText {
                    text: text.to_string(),
                    label: label.to_string(),
                });
            }
            _ => skipped += 1,
        }
    }
    if seen == 0 {
        return Err(DatasetLoadError::Empty);
    }
    if skipped > 0 {
        tracing::warn!(
            "Skipped {skipped} dataset rows with an empty '{TEXT_COLUMN}' or '{LABEL_COLUMN}' cell"
        );
    }
    Ok(Corpus::from_rows(rows))
}

fn column_indices(headers: &StringRecord) -> Option<(usize, usize)> {
    let find = |name: &str| headers.iter().position(|header| header == name);
    Some((find(TEXT_COLUMN)?, find(LABEL_COLUMN)?))
}
