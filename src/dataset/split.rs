//! Deterministic train/evaluation split.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::loader::{Corpus, LabeledText};

#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    #[error("test fraction must be within [0, 1), got {0}")]
    InvalidFraction(f64),
}

/// Training and held-out evaluation subsets.
#[derive(Debug, Clone, Default)]
pub struct Split {
    pub train: Corpus,
    pub test: Corpus,
}

/// Shuffle the corpus with `seed` and hold out `ceil(len * test_fraction)` rows.
///
/// The training side always keeps at least one row when the corpus is
/// non-empty.
pub fn train_test_split(
    corpus: &Corpus,
    test_fraction: f64,
    seed: u64,
) -> Result<Split, SplitError> {
    if !(0.0..1.0).contains(&test_fraction) {
        return Err(SplitError::InvalidFraction(test_fraction));
    }
    let total = corpus.len();
    let test_len = ((total as f64) * test_fraction).ceil() as usize;
    let test_len = test_len.min(total.saturating_sub(1));

    let mut indices: Vec<usize> = (0..total).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let pick = |idx: &[usize]| -> Corpus {
        Corpus::from_rows(
            idx.iter()
                .map(|&i| corpus.rows()[i].clone())
                .collect::<Vec<LabeledText>>(),
        )
    };
    let (test_idx, train_idx) = indices.split_at(test_len);
    Ok(Split {
        train: pick(train_idx),
        test: pick(test_idx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(n: usize) -> Corpus {
        Corpus::from_rows(
            (0..n)
                .map(|i| LabeledText {
                    text: format!("sample text {i}"),
                    label: if i % 2 == 0 { "joy" } else { "fear" }.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn holds_out_twenty_percent() {
        let split = train_test_split(&corpus(10), 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 8);
        assert_eq!(split.test.len(), 2);

        let split = train_test_split(&corpus(11), 0.2, 42).unwrap();
        assert_eq!(split.test.len(), 3);
        assert_eq!(split.train.len(), 8);
    }

    #[test]
    fn same_seed_gives_same_split() {
        let data = corpus(50);
        let a = train_test_split(&data, 0.2, 42).unwrap();
        let b = train_test_split(&data, 0.2, 42).unwrap();
        assert_eq!(a.test.rows(), b.test.rows());
        assert_eq!(a.train.rows(), b.train.rows());
    }

    #[test]
    fn split_partitions_every_row() {
        let data = corpus(23);
        let split = train_test_split(&data, 0.2, 7).unwrap();
        let mut texts: Vec<&str> = split.train.texts().chain(split.test.texts()).collect();
        texts.sort_unstable();
        let mut expected: Vec<&str> = data.texts().collect();
        expected.sort_unstable();
        assert_eq!(texts, expected);
    }

    #[test]
    fn single_row_stays_in_training() {
        let split = train_test_split(&corpus(1), 0.2, 42).unwrap();
        assert_eq!(split.train.len(), 1);
        assert!(split.test.is_empty());
    }

    #[test]
    fn rejects_fraction_outside_unit_interval() {
        assert_eq!(
            train_test_split(&corpus(4), 1.0, 42).unwrap_err(),
            SplitError::InvalidFraction(1.0)
        );
        assert!(train_test_split(&corpus(4), -0.1, 42).is_err());
        assert!(train_test_split(&corpus(4), f64::NAN, 42).is_err());
    }
}
