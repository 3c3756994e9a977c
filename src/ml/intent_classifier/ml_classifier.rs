//! Machine learning-based intent classifier using TF-IDF and logistic regression.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::catalog::IntentCatalog;
use crate::error::{ConfabError, Result};

use super::classifier::IntentClassifier;
use super::config::ClassifierConfig;
use super::logistic::{LogisticRegression, argmax};
use super::tfidf::TfIdfVectorizer;
use super::types::{FitReport, Prediction};

/// Machine learning-based intent classifier.
///
/// Built unfitted with [`new`](Self::new), then fitted once with
/// [`fit`](Self::fit). After fitting it is read-only and can be shared
/// between sessions.
#[derive(Debug)]
pub struct MLBasedIntentClassifier {
    config: ClassifierConfig,
    /// TF-IDF vectorizer.
    vectorizer: TfIdfVectorizer,
    /// Softmax model over the vectorizer's features.
    model: LogisticRegression,
    /// Tags in sorted order; model class `i` is `classes[i]`.
    classes: Vec<String>,
}

impl MLBasedIntentClassifier {
    /// Create an unfitted classifier.
    pub fn new(config: ClassifierConfig, analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            model: LogisticRegression::new(&config),
            vectorizer: TfIdfVectorizer::new(analyzer),
            classes: Vec::new(),
            config,
        }
    }

    /// Fit on every pattern of `catalog`.
    pub fn fit(&mut self, catalog: &IntentCatalog) -> Result<FitReport> {
        catalog.ensure_trainable()?;
        self.config.validate()?;
        if let Some(fallback) = &self.config.fallback_tag {
            if !catalog.contains(fallback) {
                return Err(ConfabError::invalid_config(format!(
                    "fallback tag '{fallback}' is not in the catalog"
                )));
            }
        }

        let pairs = catalog.all_training_pairs();
        let classes: Vec<String> = pairs
            .iter()
            .map(|pair| pair.tag.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let documents: Vec<String> = pairs.iter().map(|pair| pair.pattern.clone()).collect();
        let features = self.vectorizer.fit_transform(&documents)?;
        let labels = pairs
            .iter()
            .map(|pair| {
                classes
                    .binary_search(&pair.tag)
                    .map_err(|_| ConfabError::unknown_tag(pair.tag.clone()))
            })
            .collect::<Result<Vec<usize>>>()?;

        let report = self.model.fit(&features, &labels, classes.len())?;
        self.classes = classes;

        log::info!(
            "Fitted intent classifier: {} patterns, {} tags, {} terms, {} iterations",
            report.n_samples,
            report.n_classes,
            report.n_features,
            report.iterations
        );
        Ok(report)
    }

    /// Whether `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        self.model.is_fitted() && !self.classes.is_empty()
    }

    /// Tags the classifier can return, in sorted order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Size of the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    /// Probability of every class for `text`, paired with its tag.
    pub fn class_probabilities(&self, text: &str) -> Result<Vec<(String, f64)>> {
        let probabilities = self.probabilities(text)?;
        Ok(self.classes.iter().cloned().zip(probabilities).collect())
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn probabilities(&self, text: &str) -> Result<Vec<f64>> {
        if !self.is_fitted() {
            return Err(ConfabError::not_fitted(
                "MLBasedIntentClassifier used before fit",
            ));
        }
        let features = self.vectorizer.transform(text)?;
        self.model.predict_proba(&features)
    }

    fn classify_impl(&self, text: &str) -> Result<Prediction> {
        let probabilities = self.probabilities(text)?;
        let best = argmax(&probabilities);
        let confidence = probabilities[best];

        if let (Some(min_confidence), Some(fallback)) =
            (self.config.min_confidence, &self.config.fallback_tag)
        {
            if confidence < min_confidence {
                log::debug!(
                    "Confidence {confidence:.3} for '{}' below {min_confidence}; using '{fallback}'",
                    self.classes[best]
                );
                return Ok(Prediction {
                    tag: fallback.clone(),
                    confidence,
                    fallback: true,
                });
            }
        }

        Ok(Prediction {
            tag: self.classes[best].clone(),
            confidence,
            fallback: false,
        })
    }
}

impl IntentClassifier for MLBasedIntentClassifier {
    fn classify(&self, text: &str) -> Result<Prediction> {
        self.classify_impl(text)
    }

    fn name(&self) -> &str {
        "ml_based"
    }
}
