//! Read/write model artifact JSON files.
//!
//! An artifact is the portable form of a trained classifier:
//!
//! - the encoding contract version it was trained against
//! - the ordered feature names (the column order `predict_proba` expects)
//! - the classifier parameters, tagged by `kind`
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "encoding_version": 1,
//!   "feature_names": ["hour", "minute", "day_of_week_Mon", "..."],
//!   "classifier": { "kind": "logistic_regression", "coefficients": [0.01, ...], "intercept": -1.2 }
//! }
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{Classifier, DecisionTree, LogisticRegression, ModelArtifact, ModelLoader, RandomForest};
use crate::preprocess::ENCODING_VERSION;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactFile {
    pub format_version: u32,
    pub encoding_version: u32,
    pub feature_names: Vec<String>,
    pub classifier: ClassifierSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierSpec {
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    RandomForest {
        trees: Vec<TreeSpec>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSpec {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<[f64; 2]>,
}

impl ArtifactFile {
    /// Validate and build the in-memory artifact.
    pub fn into_artifact(self) -> Result<ModelArtifact, AppError> {
        if self.format_version != FORMAT_VERSION {
            return Err(AppError::config(format!(
                "Unsupported model artifact format_version {} (expected {FORMAT_VERSION}).",
                self.format_version
            )));
        }
        if self.encoding_version != ENCODING_VERSION {
            return Err(AppError::config(format!(
                "Model was trained against encoding version {}, this build encodes version {ENCODING_VERSION}.",
                self.encoding_version
            )));
        }
        if self.feature_names.is_empty() {
            return Err(AppError::config("Model artifact lists no feature names."));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.feature_names.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(AppError::config(format!(
                "Model artifact lists feature '{dup}' more than once."
            )));
        }

        let n_features = self.feature_names.len();
        let classifier: Arc<dyn Classifier> = match self.classifier {
            ClassifierSpec::LogisticRegression {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != n_features {
                    return Err(AppError::config(format!(
                        "Logistic regression has {} coefficients for {n_features} features.",
                        coefficients.len()
                    )));
                }
                let model = LogisticRegression::new(coefficients, intercept).ok_or_else(|| {
                    AppError::config("Logistic regression parameters must be finite.")
                })?;
                Arc::new(model)
            }
            ClassifierSpec::RandomForest { trees } => {
                let trees = trees
                    .into_iter()
                    .enumerate()
                    .map(|(i, t)| {
                        DecisionTree::new(
                            t.children_left,
                            t.children_right,
                            t.feature,
                            t.threshold,
                            t.value,
                            n_features,
                        )
                        .map_err(|e| AppError::config(format!("Invalid tree {i} in model artifact: {e}")))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                let forest = RandomForest::new(trees, n_features)
                    .map_err(|e| AppError::config(format!("Invalid model artifact: {e}")))?;
                Arc::new(forest)
            }
        };

        Ok(ModelArtifact::new(classifier, self.feature_names))
    }
}

/// Read an artifact JSON file (no validation beyond the schema).
pub fn read_artifact_json(path: &Path) -> Result<ArtifactFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::config(format!("Failed to open model artifact '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        AppError::config(format!("Invalid model artifact '{}': {e}", path.display()))
    })
}

/// Write an artifact JSON file. Training happens outside this crate, so only
/// tests produce artifacts.
#[cfg(test)]
pub(crate) fn write_artifact_json(path: &Path, artifact: &ArtifactFile) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create model artifact '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, artifact)
        .map_err(|e| AppError::config(format!("Failed to write model artifact: {e}")))
}

/// Loads a `ModelArtifact` from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonModelLoader {
    path: PathBuf,
}

impl JsonModelLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModelLoader for JsonModelLoader {
    fn load(&self) -> Result<ModelArtifact, AppError> {
        let artifact = read_artifact_json(&self.path)?.into_artifact()?;
        tracing::info!(
            path = %self.path.display(),
            kind = artifact.classifier().kind(),
            features = artifact.feature_names().len(),
            "loaded model artifact"
        );
        Ok(artifact)
    }
}
