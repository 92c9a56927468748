//! Held-out evaluation of a fitted classifier.

use std::collections::BTreeMap;

use super::EmotionClassifier;
use crate::dataset::Corpus;

/// Confusion matrix for a `K`-class classifier.
#[derive(Debug, Clone)]
pub struct ConfusionMatrix {
    pub n_classes: usize,
    /// Row-major `KxK` counts (`truth * K + predicted`).
    pub counts: Vec<u32>,
}

impl ConfusionMatrix {
    pub fn new(n_classes: usize) -> Self {
        Self {
            n_classes,
            counts: vec![0; n_classes * n_classes],
        }
    }

    pub fn add(&mut self, truth: usize, predicted: usize) {
        if truth >= self.n_classes || predicted >= self.n_classes {
            return;
        }
        let idx = truth * self.n_classes + predicted;
        self.counts[idx] = self.counts[idx].saturating_add(1);
    }

    pub fn get(&self, truth: usize, predicted: usize) -> u32 {
        self.counts[truth * self.n_classes + predicted]
    }
}

/// Precision/recall statistics for a single class.
#[derive(Debug, Clone, PartialEq)]
pub struct PerClassStats {
    /// `TP / (TP + FP)`.
    pub precision: f32,
    /// `TP / (TP + FN)`.
    pub recall: f32,
    pub support: u32,
}

/// Compute per-class precision and recall from a confusion matrix.
pub fn precision_recall_by_class(cm: &ConfusionMatrix) -> Vec<PerClassStats> {
    let k = cm.n_classes;
    (0..k)
        .map(|class| {
            let tp = cm.get(class, class) as f32;
            let support: u32 = (0..k).map(|j| cm.get(class, j)).sum();
            let predicted: u32 = (0..k).map(|i| cm.get(i, class)).sum();
            let fn_ = support as f32 - tp;
            let fp = predicted as f32 - tp;
            PerClassStats {
                precision: ratio(tp, tp + fp),
                recall: ratio(tp, tp + fn_),
                support,
            }
        })
        .collect()
}

fn ratio(num: f32, den: f32) -> f32 {
    if den == 0.0 { 0.0 } else { num / den }
}

/// Result of scoring a classifier against labeled rows.
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub classes: Vec<String>,
    pub confusion: ConfusionMatrix,
    pub total: usize,
    pub correct: usize,
    /// Rows whose label never occurred in training; always counted as misses.
    pub unseen_labels: usize,
}

impl EvaluationReport {
    pub fn accuracy(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f32 / self.total as f32
        }
    }

    pub fn per_class(&self) -> BTreeMap<&str, PerClassStats> {
        self.classes
            .iter()
            .map(String::as_str)
            .zip(precision_recall_by_class(&self.confusion))
            .collect()
    }
}

/// Predict every row of `corpus` and tally the outcome.
pub fn evaluate(classifier: &EmotionClassifier, corpus: &Corpus) -> EvaluationReport {
    let classes = classifier.classes().to_vec();
    let index: BTreeMap<&str, usize> = classes
        .iter()
        .enumerate()
        .map(|(i, c)| (c.as_str(), i))
        .collect();
    let mut confusion = ConfusionMatrix::new(classes.len());
    let mut correct = 0usize;
    let mut unseen_labels = 0usize;
    for row in corpus.rows() {
        let predicted = classifier.predict(&row.text);
        if predicted == row.label {
            correct += 1;
        }
        match (index.get(row.label.as_str()), index.get(predicted)) {
            (Some(&truth), Some(&pred)) => confusion.add(truth, pred),
            _ => unseen_labels += 1,
        }
    }
    EvaluationReport {
        classes,
        confusion,
        total: corpus.len(),
        correct,
        unseen_labels,
    }
}

/// Log held-out accuracy; quiet when there is nothing to score.
pub fn log_evaluation(report: &EvaluationReport) {
    if report.total == 0 {
        tracing::debug!("Evaluation split is empty; skipping accuracy report");
        return;
    }
    tracing::info!(
        "Held-out accuracy {:.3} ({}/{} rows, {} with labels unseen in training)",
        report.accuracy(),
        report.correct,
        report.total,
        report.unseen_labels
    );
    for (class, stats) in report.per_class() {
        tracing::debug!(
            "  {class}: precision {:.3} recall {:.3} support {}",
            stats.precision,
            stats.recall,
            stats.support
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LabeledText;
    use crate::ml::FitOptions;

    fn row(text: &str, label: &str) -> LabeledText {
        LabeledText {
            text: text.into(),
            label: label.into(),
        }
    }

    #[test]
    fn precision_recall_from_counts() {
        let mut cm = ConfusionMatrix::new(2);
        cm.add(0, 0);
        cm.add(0, 0);
        cm.add(0, 1);
        cm.add(1, 1);
        cm.add(7, 0);
        let stats = precision_recall_by_class(&cm);
        assert_eq!(stats[0].support, 3);
        assert!((stats[0].recall - 2.0 / 3.0).abs() < 1e-6);
        assert!((stats[0].precision - 1.0).abs() < 1e-6);
        assert!((stats[1].precision - 0.5).abs() < 1e-6);
    }

    #[test]
    fn evaluation_counts_unseen_labels_as_misses() {
        let train = ["happy happy day", "sad gloomy night"];
        let labels = ["joy", "sadness"];
        let clf = EmotionClassifier::fit(&train, &labels, &FitOptions::default()).unwrap();
        let held_out = Corpus::from_rows(vec![
            row("a happy day", "joy"),
            row("gloomy night again", "sadness"),
            row("gloomy happy happy", "boredom"),
        ]);

        let report = evaluate(&clf, &held_out);

        assert_eq!(report.total, 3);
        assert_eq!(report.correct, 2);
        assert_eq!(report.unseen_labels, 1);
        assert!((report.accuracy() - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(report.per_class()["joy"].support, 1);
    }

    #[test]
    fn empty_evaluation_has_zero_accuracy() {
        let clf =
            EmotionClassifier::fit(&["nice day"], &["joy"], &FitOptions::default()).unwrap();
        let report = evaluate(&clf, &Corpus::default());
        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy(), 0.0);
    }
}
