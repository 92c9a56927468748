//! Multinomial Naive Bayes over sparse TF-IDF vectors.

use super::tfidf::SparseVector;

mod train;
pub use train::{NbOptions, train_multinomial_nb};

/// Fitted multinomial Naive Bayes model.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<String>,
    class_log_prior: Vec<f64>,
    /// Row-major `classes x n_features` log probabilities.
    feature_log_prob: Vec<f64>,
    n_features: usize,
}

impl MultinomialNb {
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Per-class `log P(c) + Σ x_t log P(t | c)`.
    ///
    /// Feature indices outside the fitted vocabulary contribute nothing.
    pub fn joint_log_likelihood(&self, x: &SparseVector) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .enumerate()
            .map(|(class, prior)| {
                let row = &self.feature_log_prob[class * self.n_features..][..self.n_features];
                prior
                    + x.iter()
                        .filter_map(|&(index, weight)| row.get(index).map(|lp| weight * lp))
                        .sum::<f64>()
            })
            .collect()
    }

    /// Index of the most likely class; ties go to the earliest class.
    pub fn predict_index(&self, x: &SparseVector) -> usize {
        let mut best = 0usize;
        let mut best_val = f64::NEG_INFINITY;
        for (idx, value) in self.joint_log_likelihood(x).into_iter().enumerate() {
            if value > best_val {
                best_val = value;
                best = idx;
            }
        }
        best
    }

    /// Posterior class probabilities in class order.
    pub fn predict_proba(&self, x: &SparseVector) -> Vec<f64> {
        softmax(&self.joint_log_likelihood(x))
    }
}

pub(crate) fn softmax(raw: &[f64]) -> Vec<f64> {
    if raw.is_empty() {
        return Vec::new();
    }
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = raw.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return vec![1.0 / raw.len() as f64; raw.len()];
    }
    exps.into_iter().map(|e| e / sum).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_model() -> MultinomialNb {
        // Two features: class "a" prefers feature 0, class "b" prefers feature 1.
        let x = vec![vec![(0, 1.0)], vec![(0, 0.8), (1, 0.2)], vec![(1, 1.0)]];
        let y = vec![0, 0, 1];
        train_multinomial_nb(
            &x,
            &y,
            vec!["a".into(), "b".into()],
            2,
            &NbOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn priors_follow_class_frequency() {
        let model = toy_model();
        let empty = model.joint_log_likelihood(&Vec::new());
        assert!((empty[0] - (2.0f64 / 3.0).ln()).abs() < 1e-12);
        assert!((empty[1] - (1.0f64 / 3.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn smoothed_feature_probabilities() {
        let model = toy_model();
        // Class a: feature sums [1.8, 0.2], alpha 1, V 2 => (1.8 + 1) / (2 + 2).
        let lp = model.feature_log_prob[0];
        assert!((lp - (2.8f64 / 4.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn predicts_class_by_likelihood() {
        let model = toy_model();
        assert_eq!(model.predict_index(&vec![(0, 1.0)]), 0);
        assert_eq!(model.predict_index(&vec![(1, 1.0)]), 1);
        // Out-of-range features are ignored, leaving the prior to decide.
        assert_eq!(model.predict_index(&vec![(9, 1.0)]), 0);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let proba = toy_model().predict_proba(&vec![(1, 1.0)]);
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(proba[1] > proba[0]);
    }

    #[test]
    fn softmax_handles_extremes() {
        assert!(softmax(&[]).is_empty());
        let out = softmax(&[f64::NEG_INFINITY, f64::NEG_INFINITY]);
        assert_eq!(out, vec![0.5, 0.5]);
    }
}
