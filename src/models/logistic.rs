//! Logistic regression.
//!
//! `p(accident) = σ(w·x + b)`.

use nalgebra::DVector;

use crate::error::PredictError;
use crate::models::{Classifier, sigmoid};

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coefficients: DVector<f64>,
    intercept: f64,
}

impl LogisticRegression {
    /// Returns `None` if any parameter is non-finite.
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Option<Self> {
        if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
            return None;
        }
        Some(Self {
            coefficients: DVector::from_vec(coefficients),
            intercept,
        })
    }

    /// Raw margin `w·x + b`.
    pub fn decision_function(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.coefficients.len() {
            return Err(PredictError::Inference(format!(
                "expected {} features, got {}",
                self.coefficients.len(),
                features.len()
            )));
        }
        let x = DVector::from_column_slice(features);
        Ok(self.coefficients.dot(&x) + self.intercept)
    }
}

impl Classifier for LogisticRegression {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], PredictError> {
        let p1 = sigmoid(self.decision_function(features)?);
        Ok([1.0 - p1, p1])
    }

    fn kind(&self) -> &'static str {
        "logistic_regression"
    }
}
