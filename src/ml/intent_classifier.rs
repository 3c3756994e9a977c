//! Intent classification using TF-IDF and logistic regression.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: common interface for all classifiers
//! - `MLBasedIntentClassifier`: TF-IDF features + multinomial logistic regression
//! - `TfIdfVectorizer`: feature extraction using TF-IDF
//! - `LogisticRegression`: L2-regularized softmax model fitted by gradient descent
//! - `ClassifierConfig`: tunable parameters and the optional confidence policy
//!
//! # Example
//!
//! ```rust
//! use confab::catalog::{Intent, IntentCatalog};
//! use confab::ml::intent_classifier::{self, ClassifierConfig, IntentClassifier};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = IntentCatalog::new(vec![
//!     Intent::new("greeting", ["Hi", "Hello"], ["Hi there"]),
//!     Intent::new("goodbye", ["Bye", "See you later"], ["Goodbye"]),
//! ])?;
//!
//! let classifier = intent_classifier::fit_classifier(&catalog, ClassifierConfig::default())?;
//! assert_eq!(classifier.predict("Hello")?, "greeting");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod config;
mod core;
mod logistic;
mod ml_classifier;
mod tfidf;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use config::ClassifierConfig;
pub use core::{fit_classifier, new_ml_based};
pub use logistic::LogisticRegression;
pub use ml_classifier::MLBasedIntentClassifier;
pub use tfidf::TfIdfVectorizer;
pub use types::{FitReport, Prediction};
