//! Configuration for the ML-based intent classifier.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfabError, Result};

/// Tunable parameters of the classifier.
///
/// Missing fields take their default when deserialized, so a config file
/// only needs the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Inverse regularization strength (C). Larger means weaker L2 penalty.
    pub regularization: f64,
    /// Cap on gradient descent iterations.
    pub max_iterations: usize,
    /// Stop once every gradient component is below this.
    pub tolerance: f64,
    /// Gradient descent step size.
    pub learning_rate: f64,
    /// Seed for weight initialization.
    pub seed: u64,
    /// Below this top-class probability, answer with `fallback_tag` instead.
    pub min_confidence: Option<f64>,
    /// Tag used when the confidence policy rejects a prediction.
    pub fallback_tag: Option<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            regularization: 10.0,
            max_iterations: 10_000,
            tolerance: 1e-5,
            learning_rate: 1.0,
            seed: 0,
            min_confidence: None,
            fallback_tag: None,
        }
    }
}

impl ClassifierConfig {
    /// Load a config from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClassifierConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Enable the confidence policy.
    pub fn with_confidence_policy<S: Into<String>>(
        mut self,
        min_confidence: f64,
        fallback_tag: S,
    ) -> Self {
        self.min_confidence = Some(min_confidence);
        self.fallback_tag = Some(fallback_tag.into());
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.regularization > 0.0 && self.regularization.is_finite()) {
            return Err(ConfabError::invalid_config(
                "regularization must be a positive number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(ConfabError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }
        if !(self.tolerance > 0.0) {
            return Err(ConfabError::invalid_config("tolerance must be positive"));
        }
        if !(self.learning_rate > 0.0 && self.learning_rate.is_finite()) {
            return Err(ConfabError::invalid_config(
                "learning_rate must be a positive number",
            ));
        }
        if let Some(min_confidence) = self.min_confidence {
            if !(0.0..=1.0).contains(&min_confidence) {
                return Err(ConfabError::invalid_config(
                    "min_confidence must be between 0 and 1",
                ));
            }
            if self.fallback_tag.is_none() {
                return Err(ConfabError::invalid_config(
                    "min_confidence requires a fallback_tag",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = ClassifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_iterations, 10_000);
        assert!(config.min_confidence.is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ClassifierConfig = serde_json::from_str(r#"{"seed": 42}"#).unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.regularization, 10.0);
    }

    #[test]
    fn test_invalid_values() {
        let config = ClassifierConfig {
            regularization: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfabError::InvalidConfig(_))));

        let config = ClassifierConfig {
            max_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClassifierConfig {
            tolerance: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_confidence_policy_needs_fallback() {
        let config = ClassifierConfig {
            min_confidence: Some(0.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ClassifierConfig::default().with_confidence_policy(0.5, "help");
        assert!(config.validate().is_ok());

        let config = ClassifierConfig::default().with_confidence_policy(1.5, "help");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classifier.json");
        std::fs::write(&path, r#"{"regularization": 2.5, "max_iterations": 500}"#).unwrap();

        let config = ClassifierConfig::from_path(&path).unwrap();
        assert_eq!(config.regularization, 2.5);
        assert_eq!(config.max_iterations, 500);
        assert_eq!(config.learning_rate, 1.0);
    }
}
