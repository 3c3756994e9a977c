//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// Result of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted intent tag.
    pub tag: String,
    /// Probability the model assigns to its best class.
    pub confidence: f64,
    /// Whether the confidence policy replaced the model's choice with the
    /// fallback tag.
    pub fallback: bool,
}

/// Summary of a model fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// Gradient descent iterations run.
    pub iterations: usize,
    /// Whether the gradient fell below the tolerance.
    pub converged: bool,
    /// Final value of the regularized objective.
    pub loss: f64,
    /// Number of training examples.
    pub n_samples: usize,
    /// Number of distinct classes.
    pub n_classes: usize,
    /// Number of features (vocabulary size).
    pub n_features: usize,
}
