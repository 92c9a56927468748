use super::MultinomialNb;
use crate::ml::TrainError;
use crate::ml::tfidf::SparseVector;

/// Training options for the Naive Bayes estimator.
#[derive(Debug, Clone)]
pub struct NbOptions {
    /// Additive (Laplace/Lidstone) smoothing.
    pub alpha: f64,
}

impl Default for NbOptions {
    fn default() -> Self {
        Self { alpha: 1.0 }
    }
}

/// Fit a multinomial model on sparse rows `x` with class indices `y`.
pub fn train_multinomial_nb(
    x: &[SparseVector],
    y: &[usize],
    classes: Vec<String>,
    n_features: usize,
    options: &NbOptions,
) -> Result<MultinomialNb, TrainError> {
    if x.is_empty() {
        return Err(TrainError::EmptyTrainingSet);
    }
    if x.len() != y.len() {
        return Err(TrainError::LengthMismatch {
            texts: x.len(),
            labels: y.len(),
        });
    }
    if !options.alpha.is_finite() || options.alpha <= 0.0 {
        return Err(TrainError::InvalidAlpha(options.alpha));
    }
    if n_features == 0 {
        return Err(TrainError::EmptyVocabulary);
    }
    let n_classes = classes.len();
    if n_classes == 0 {
        return Err(TrainError::EmptyTrainingSet);
    }

    let mut class_count = vec![0usize; n_classes];
    let mut feature_count = vec![0.0f64; n_classes * n_features];
    for (row, &class) in x.iter().zip(y) {
        let Some(count) = class_count.get_mut(class) else {
            return Err(TrainError::UnknownClassIndex(class));
        };
        *count += 1;
        let base = class * n_features;
        for &(index, weight) in row {
            if index < n_features {
                feature_count[base + index] += weight;
            }
        }
    }

    let total = x.len() as f64;
    let class_log_prior = class_count
        .iter()
        .map(|&count| (count as f64 / total).ln())
        .collect();

    let alpha = options.alpha;
    let mut feature_log_prob = feature_count;
    for row in feature_log_prob.chunks_mut(n_features) {
        let denom = (row.iter().sum::<f64>() + alpha * n_features as f64).ln();
        for value in row.iter_mut() {
            *value = (*value + alpha).ln() - denom;
        }
    }

    Ok(MultinomialNb {
        classes,
        class_log_prior,
        feature_log_prob,
        n_features,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<String> {
        vec!["joy".into(), "sadness".into()]
    }

    #[test]
    fn rejects_empty_and_mismatched_input() {
        let opts = NbOptions::default();
        assert!(matches!(
            train_multinomial_nb(&[], &[], classes(), 3, &opts),
            Err(TrainError::EmptyTrainingSet)
        ));
        assert!(matches!(
            train_multinomial_nb(&[vec![(0, 1.0)]], &[0, 1], classes(), 3, &opts),
            Err(TrainError::LengthMismatch {
                texts: 1,
                labels: 2
            })
        ));
    }

    #[test]
    fn rejects_bad_alpha_and_class_index() {
        let bad = NbOptions { alpha: 0.0 };
        assert!(matches!(
            train_multinomial_nb(&[vec![(0, 1.0)]], &[0], classes(), 1, &bad),
            Err(TrainError::InvalidAlpha(_))
        ));
        assert!(matches!(
            train_multinomial_nb(&[vec![(0, 1.0)]], &[5], classes(), 1, &NbOptions::default()),
            Err(TrainError::UnknownClassIndex(5))
        ));
    }

    #[test]
    fn class_without_rows_gets_negative_infinite_prior() {
        let model = train_multinomial_nb(
            &[vec![(0, 1.0)]],
            &[0],
            classes(),
            1,
            &NbOptions::default(),
        )
        .unwrap();
        let jll = model.joint_log_likelihood(&vec![(0, 1.0)]);
        assert!(jll[1].is_infinite() && jll[1] < 0.0);
        assert_eq!(model.predict_index(&vec![(0, 1.0)]), 0);
    }
}
