//! Fitted text-to-emotion pipeline.

use std::collections::BTreeMap;

use super::TrainError;
use super::naive_bayes::{MultinomialNb, NbOptions, train_multinomial_nb};
use super::tfidf::{SparseVector, TfidfVectorizer};
use crate::dataset::Corpus;

/// Options used when fitting [`EmotionClassifier`].
#[derive(Debug, Clone)]
pub struct FitOptions {
    pub alpha: f64,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            alpha: NbOptions::default().alpha,
        }
    }
}

/// TF-IDF vectorizer and Naive Bayes predictor trained together.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    vectorizer: TfidfVectorizer,
    model: MultinomialNb,
}

impl EmotionClassifier {
    /// Fit the vocabulary, term weights and class statistics on paired texts and labels.
    pub fn fit<T, L>(texts: &[T], labels: &[L], options: &FitOptions) -> Result<Self, TrainError>
    where
        T: AsRef<str>,
        L: AsRef<str>,
    {
        if texts.len() != labels.len() {
            return Err(TrainError::LengthMismatch {
                texts: texts.len(),
                labels: labels.len(),
            });
        }
        if texts.is_empty() {
            return Err(TrainError::EmptyTrainingSet);
        }

        let class_index: BTreeMap<&str, usize> = {
            let mut sorted: Vec<&str> = labels.iter().map(AsRef::as_ref).collect();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.into_iter().enumerate().map(|(i, c)| (c, i)).collect()
        };
        let classes: Vec<String> = class_index.keys().map(|c| c.to_string()).collect();
        let y: Vec<usize> = labels
            .iter()
            .map(|label| class_index[label.as_ref()])
            .collect();

        let vectorizer = TfidfVectorizer::fit(texts.iter().map(AsRef::as_ref));
        let x: Vec<SparseVector> = texts
            .iter()
            .map(|text| vectorizer.transform(text.as_ref()))
            .collect();
        let model = train_multinomial_nb(
            &x,
            &y,
            classes,
            vectorizer.vocabulary_len(),
            &NbOptions {
                alpha: options.alpha,
            },
        )?;
        tracing::debug!(
            "Fitted classifier: {} documents, {} terms, {} classes",
            texts.len(),
            vectorizer.vocabulary_len(),
            model.classes().len()
        );
        Ok(Self { vectorizer, model })
    }

    /// Fit directly on a labeled corpus.
    pub fn fit_corpus(corpus: &Corpus, options: &FitOptions) -> Result<Self, TrainError> {
        let texts: Vec<&str> = corpus.texts().collect();
        let labels: Vec<&str> = corpus.labels().collect();
        Self::fit(&texts, &labels, options)
    }

    /// Most probable label for `text`.
    pub fn predict(&self, text: &str) -> &str {
        let x = self.vectorizer.transform(text);
        &self.model.classes()[self.model.predict_index(&x)]
    }

    /// Label probabilities for `text`, most likely first.
    pub fn predict_proba(&self, text: &str) -> Vec<(&str, f64)> {
        let x = self.vectorizer.transform(text);
        let mut scored: Vec<(&str, f64)> = self
            .model
            .classes()
            .iter()
            .map(String::as_str)
            .zip(self.model.predict_proba(&x))
            .collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
    }

    pub fn classes(&self) -> &[String] {
        self.model.classes()
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vectorizer.vocabulary_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn training_pairs() -> (Vec<&'static str>, Vec<&'static str>) {
        let rows = [
            ("I am so happy today", "joy"),
            ("what a wonderful happy morning", "joy"),
            ("this makes me smile and laugh", "joy"),
            ("I feel so sad and lonely", "sadness"),
            ("tears keep falling, such a sad day", "sadness"),
            ("I miss her and feel empty", "sadness"),
            ("this makes me furious and angry", "anger"),
            ("I am so angry at this traffic", "anger"),
            ("stop yelling, I am furious", "anger"),
        ];
        rows.iter().copied().unzip()
    }

    #[test]
    fn predicts_training_examples() {
        let (texts, labels) = training_pairs();
        let clf = EmotionClassifier::fit(&texts, &labels, &FitOptions::default()).unwrap();
        assert_eq!(clf.predict("I am so happy today"), "joy");
        for (text, label) in texts.iter().zip(&labels) {
            assert_eq!(clf.predict(text), *label, "text: {text}");
        }
    }

    #[test]
    fn classes_are_sorted_and_unique() {
        let (texts, labels) = training_pairs();
        let clf = EmotionClassifier::fit(&texts, &labels, &FitOptions::default()).unwrap();
        assert_eq!(clf.classes(), ["anger", "joy", "sadness"]);
    }

    #[test]
    fn unknown_words_fall_back_to_prior() {
        let texts = ["happy happy joy", "glad and happy", "bleak and gloomy"];
        let labels = ["joy", "joy", "sadness"];
        let clf = EmotionClassifier::fit(&texts, &labels, &FitOptions::default()).unwrap();
        assert_eq!(clf.predict("qwerty zxcvb"), "joy");
        assert_eq!(clf.predict(""), "joy");
    }

    #[test]
    fn proba_is_sorted_and_normalized() {
        let (texts, labels) = training_pairs();
        let clf = EmotionClassifier::fit(&texts, &labels, &FitOptions::default()).unwrap();
        let proba = clf.predict_proba("so angry and furious");
        assert_eq!(proba[0].0, "anger");
        assert!(proba.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        assert!((proba.iter().map(|(_, p)| p).sum::<f64>() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_errors_are_reported() {
        let opts = FitOptions::default();
        let none: [&str; 0] = [];
        assert_eq!(
            EmotionClassifier::fit(&none, &none, &opts).unwrap_err(),
            TrainError::EmptyTrainingSet
        );
        assert_eq!(
            EmotionClassifier::fit(&["a b"], &["joy", "fear"], &opts).unwrap_err(),
            TrainError::LengthMismatch {
                texts: 1,
                labels: 2
            }
        );
        assert_eq!(
            EmotionClassifier::fit(&["! ?", "a"], &["joy", "fear"], &opts).unwrap_err(),
            TrainError::EmptyVocabulary
        );
        assert!(matches!(
            EmotionClassifier::fit(&["good day"], &["joy"], &FitOptions { alpha: -1.0 })
                .unwrap_err(),
            TrainError::InvalidAlpha(_)
        ));
    }

    #[test]
    fn fit_corpus_matches_fit() {
        use crate::dataset::LabeledText;
        let (texts, labels) = training_pairs();
        let corpus = Corpus::from_rows(
            texts
                .iter()
                .zip(&labels)
                .map(|(t, l)| LabeledText {
                    text: t.to_string(),
                    label: l.to_string(),
                })
                .collect(),
        );
        let clf = EmotionClassifier::fit_corpus(&corpus, &FitOptions::default()).unwrap();
        assert_eq!(clf.predict("tears and sad loneliness"), "sadness");
    }
}
