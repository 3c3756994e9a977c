//! Machine learning components for Confab.
//!
//! Currently this is the intent classifier: TF-IDF features over analyzed
//! text feeding a multinomial logistic regression.

pub mod intent_classifier;
