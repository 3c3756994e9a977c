//! Helper functions for creating intent classifiers.

use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, StandardAnalyzer};
use crate::catalog::IntentCatalog;
use crate::error::Result;

use super::classifier::IntentClassifier;
use super::config::ClassifierConfig;
use super::ml_classifier::MLBasedIntentClassifier;

/// Fit an ML-based classifier on `catalog` with the standard analyzer.
pub fn fit_classifier(
    catalog: &IntentCatalog,
    config: ClassifierConfig,
) -> Result<MLBasedIntentClassifier> {
    let analyzer = Arc::new(StandardAnalyzer::new()?);
    let mut classifier = MLBasedIntentClassifier::new(config, analyzer);
    classifier.fit(catalog)?;
    Ok(classifier)
}

/// Fit an ML-based classifier with a custom analyzer and box it behind the
/// [`IntentClassifier`] trait.
pub fn new_ml_based(
    catalog: &IntentCatalog,
    analyzer: Arc<dyn Analyzer>,
    config: ClassifierConfig,
) -> Result<Box<dyn IntentClassifier>> {
    let mut classifier = MLBasedIntentClassifier::new(config, analyzer);
    classifier.fit(catalog)?;
    Ok(Box::new(classifier))
}
