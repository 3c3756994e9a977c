//! Multinomial logistic regression.
//!
//! The model keeps one weight vector and one intercept per class and scores a
//! feature vector with the softmax of the class scores. Fitting minimizes
//!
//! ```text
//! (1/n) * Σ cross_entropy(x_i, y_i) + ||W||² / (2 * C * n)
//! ```
//!
//! by full-batch gradient descent. Intercepts are not penalized.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{ConfabError, Result};

use super::config::ClassifierConfig;
use super::types::FitReport;

/// Magnitude bound of the random initial weights.
const INIT_SCALE: f64 = 0.01;

/// L2-regularized softmax classifier over dense feature vectors.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    regularization: f64,
    max_iterations: usize,
    tolerance: f64,
    learning_rate: f64,
    seed: u64,
    /// `weights[class][feature]`; empty until fitted.
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
    n_features: usize,
}

impl LogisticRegression {
    /// Create an unfitted model with the solver parameters from `config`.
    pub fn new(config: &ClassifierConfig) -> Self {
        Self {
            regularization: config.regularization,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
            learning_rate: config.learning_rate,
            seed: config.seed,
            weights: Vec::new(),
            intercepts: Vec::new(),
            n_features: 0,
        }
    }

    /// Fit the model. `labels[i]` is the class index of `features[i]`, in
    /// `0..n_classes`.
    pub fn fit(
        &mut self,
        features: &[Vec<f64>],
        labels: &[usize],
        n_classes: usize,
    ) -> Result<FitReport> {
        if features.is_empty() {
            return Err(ConfabError::insufficient_data("no training examples"));
        }
        if features.len() != labels.len() {
            return Err(ConfabError::other(format!(
                "{} feature vectors but {} labels",
                features.len(),
                labels.len()
            )));
        }
        if n_classes < 2 {
            return Err(ConfabError::insufficient_data(format!(
                "need at least 2 classes, got {n_classes}"
            )));
        }
        if let Some(&label) = labels.iter().find(|&&label| label >= n_classes) {
            return Err(ConfabError::other(format!(
                "label {label} out of range for {n_classes} classes"
            )));
        }

        let n_features = features[0].len();
        if features.iter().any(|x| x.len() != n_features) {
            return Err(ConfabError::other("feature vectors differ in length"));
        }

        let n_samples = features.len() as f64;
        let lambda = 1.0 / (self.regularization * n_samples);

        let mut rng = StdRng::seed_from_u64(self.seed);
        self.weights = (0..n_classes)
            .map(|_| {
                (0..n_features)
                    .map(|_| rng.random_range(-INIT_SCALE..INIT_SCALE))
                    .collect()
            })
            .collect();
        self.intercepts = vec![0.0; n_classes];
        self.n_features = n_features;

        let mut grad_w = vec![vec![0.0; n_features]; n_classes];
        let mut grad_b = vec![0.0; n_classes];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            for (gw, w) in grad_w.iter_mut().zip(&self.weights) {
                for (g, &wj) in gw.iter_mut().zip(w) {
                    *g = lambda * wj;
                }
            }
            grad_b.iter_mut().for_each(|g| *g = 0.0);

            for (x, &label) in features.iter().zip(labels) {
                let probabilities = softmax(&self.scores(x));
                for (class, p) in probabilities.into_iter().enumerate() {
                    let target = if class == label { 1.0 } else { 0.0 };
                    let delta = (p - target) / n_samples;
                    grad_b[class] += delta;
                    for (g, &xj) in grad_w[class].iter_mut().zip(x) {
                        if xj != 0.0 {
                            *g += delta * xj;
                        }
                    }
                }
            }

            let max_gradient = grad_w
                .iter()
                .flatten()
                .chain(&grad_b)
                .fold(0.0f64, |acc, g| acc.max(g.abs()));
            if max_gradient < self.tolerance {
                converged = true;
                break;
            }

            for (w, gw) in self.weights.iter_mut().zip(&grad_w) {
                for (wj, g) in w.iter_mut().zip(gw) {
                    *wj -= self.learning_rate * g;
                }
            }
            for (b, g) in self.intercepts.iter_mut().zip(&grad_b) {
                *b -= self.learning_rate * g;
            }
            iterations += 1;
        }

        let loss = self.objective(features, labels, lambda);
        if converged {
            log::debug!("Logistic regression converged after {iterations} iterations (loss {loss:.6})");
        } else {
            log::warn!(
                "Logistic regression did not converge within {} iterations (loss {loss:.6}); \
                 consider raising max_iterations",
                self.max_iterations
            );
        }

        Ok(FitReport {
            iterations,
            converged,
            loss,
            n_samples: features.len(),
            n_classes,
            n_features,
        })
    }

    /// Raw class scores (logits) for `x`.
    pub fn decision_function(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_input(x)?;
        Ok(self.scores(x))
    }

    /// Class probabilities for `x`; they sum to one.
    pub fn predict_proba(&self, x: &[f64]) -> Result<Vec<f64>> {
        self.check_input(x)?;
        Ok(softmax(&self.scores(x)))
    }

    /// Index of the highest scoring class. Ties go to the lowest index.
    pub fn predict(&self, x: &[f64]) -> Result<usize> {
        Ok(argmax(&self.decision_function(x)?))
    }

    /// Whether `fit` has completed.
    pub fn is_fitted(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Number of classes the model was fitted on.
    pub fn n_classes(&self) -> usize {
        self.weights.len()
    }

    fn check_input(&self, x: &[f64]) -> Result<()> {
        if !self.is_fitted() {
            return Err(ConfabError::not_fitted(
                "LogisticRegression used before fit",
            ));
        }
        if x.len() != self.n_features {
            return Err(ConfabError::other(format!(
                "expected {} features, got {}",
                self.n_features,
                x.len()
            )));
        }
        Ok(())
    }

    fn scores(&self, x: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| b + w.iter().zip(x).map(|(wj, xj)| wj * xj).sum::<f64>())
            .collect()
    }

    fn objective(&self, features: &[Vec<f64>], labels: &[usize], lambda: f64) -> f64 {
        let cross_entropy: f64 = features
            .iter()
            .zip(labels)
            .map(|(x, &label)| -softmax(&self.scores(x))[label].max(f64::MIN_POSITIVE).ln())
            .sum::<f64>()
            / features.len() as f64;
        let penalty: f64 = self.weights.iter().flatten().map(|w| w * w).sum();
        cross_entropy + 0.5 * lambda * penalty
    }
}

/// Numerically stable softmax.
pub(crate) fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Index of the first maximum.
pub(crate) fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two one-hot features, one per class.
    fn separable() -> (Vec<Vec<f64>>, Vec<usize>) {
        (
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
                vec![0.0, 0.0, 1.0],
            ],
            vec![0, 0, 1, 1],
        )
    }

    #[test]
    fn test_fit_and_predict() {
        let (features, labels) = separable();
        let mut model = LogisticRegression::new(&ClassifierConfig::default());
        let report = model.fit(&features, &labels, 2).unwrap();

        assert!(report.converged);
        assert_eq!(report.n_samples, 4);
        assert_eq!(report.n_features, 3);
        for (x, &label) in features.iter().zip(&labels) {
            assert_eq!(model.predict(x).unwrap(), label);
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let (features, labels) = separable();
        let mut model = LogisticRegression::new(&ClassifierConfig::default());
        model.fit(&features, &labels, 2).unwrap();

        let proba = model.predict_proba(&[0.3, 0.3, 0.3]).unwrap();
        assert_eq!(proba.len(), 2);
        assert!((proba.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fit_is_reproducible() {
        let (features, labels) = separable();
        let config = ClassifierConfig {
            max_iterations: 50,
            ..Default::default()
        };

        let mut a = LogisticRegression::new(&config);
        let mut b = LogisticRegression::new(&config);
        a.fit(&features, &labels, 2).unwrap();
        b.fit(&features, &labels, 2).unwrap();

        let x = [0.2, 0.5, 0.1];
        assert_eq!(a.decision_function(&x).unwrap(), b.decision_function(&x).unwrap());
    }

    #[test]
    fn test_iteration_cap_reports_not_converged() {
        let (features, labels) = separable();
        let config = ClassifierConfig {
            max_iterations: 1,
            ..Default::default()
        };
        let mut model = LogisticRegression::new(&config);
        let report = model.fit(&features, &labels, 2).unwrap();

        assert!(!report.converged);
        assert_eq!(report.iterations, 1);
        assert!(model.is_fitted());
    }

    #[test]
    fn test_predict_before_fit() {
        let model = LogisticRegression::new(&ClassifierConfig::default());
        assert!(matches!(
            model.predict(&[1.0]),
            Err(ConfabError::NotFitted(_))
        ));
    }

    #[test]
    fn test_wrong_dimension() {
        let (features, labels) = separable();
        let mut model = LogisticRegression::new(&ClassifierConfig::default());
        model.fit(&features, &labels, 2).unwrap();
        assert!(model.predict(&[1.0]).is_err());
    }

    #[test]
    fn test_single_class_rejected() {
        let mut model = LogisticRegression::new(&ClassifierConfig::default());
        let result = model.fit(&[vec![1.0]], &[0], 1);
        assert!(matches!(result, Err(ConfabError::InsufficientData(_))));
    }

    #[test]
    fn test_softmax_and_argmax() {
        let p = softmax(&[1000.0, 1000.0]);
        assert!((p[0] - 0.5).abs() < 1e-12);
        assert_eq!(argmax(&[0.1, 0.7, 0.7]), 1);
        assert_eq!(argmax(&[2.0]), 0);
    }
}
