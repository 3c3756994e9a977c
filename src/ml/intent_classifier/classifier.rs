//! Intent classifier trait definition.

use crate::error::Result;

use super::types::Prediction;

/// Intent classifier trait.
///
/// A fitted classifier maps any text to exactly one tag of the catalog it
/// was fitted on. There is no "no match" outcome.
pub trait IntentClassifier: Send + Sync {
    /// Classify `text`, returning the winning tag and its confidence.
    fn classify(&self, text: &str) -> Result<Prediction>;

    /// Predict the tag for `text`.
    fn predict(&self, text: &str) -> Result<String> {
        self.classify(text).map(|prediction| prediction.tag)
    }

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
