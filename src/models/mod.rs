//! Probabilistic classifiers and the loaded model artifact.
//!
//! Scoring code only sees the `Classifier` trait and a `ModelArtifact`; how
//! the artifact got into memory is a `ModelLoader` concern (see
//! `crate::io::artifact` for the JSON loader).

use std::fmt;
use std::sync::Arc;

use crate::error::{AppError, PredictError};

pub mod forest;
pub mod logistic;

pub use forest::{DecisionTree, RandomForest};
pub use logistic::LogisticRegression;

/// A binary classifier exposing class probabilities.
pub trait Classifier: Send + Sync {
    /// `[p(no accident), p(accident)]` for one feature row, in the artifact's
    /// feature order.
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], PredictError>;

    /// Short name for logs and the UI header.
    fn kind(&self) -> &'static str;
}

/// A trained classifier plus the ordered feature names it was trained on.
///
/// Loaded once at start-up and shared read-only afterwards.
#[derive(Clone)]
pub struct ModelArtifact {
    classifier: Arc<dyn Classifier>,
    feature_names: Arc<[String]>,
}

impl ModelArtifact {
    pub fn new(classifier: Arc<dyn Classifier>, feature_names: Vec<String>) -> Self {
        Self {
            classifier,
            feature_names: feature_names.into(),
        }
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }
}

impl fmt::Debug for ModelArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelArtifact")
            .field("kind", &self.classifier.kind())
            .field("features", &self.feature_names.len())
            .finish()
    }
}

/// Source of a `ModelArtifact`.
pub trait ModelLoader {
    fn load(&self) -> Result<ModelArtifact, AppError>;
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
