//! Risk scorer: encoded row → probability of an accident.

use crate::error::PredictError;
use crate::models::ModelArtifact;
use crate::preprocess::EncodedRecord;

/// Index of the "accident" class in a two-class `predict_proba` output.
pub const ACCIDENT_CLASS: usize = 1;

/// Absolute slack allowed on the two class probabilities summing to 1.
const SUM_TOLERANCE: f64 = 1e-6;

/// Wraps the loaded artifact; scoring is a pure read of it.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    artifact: ModelArtifact,
}

impl RiskScorer {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    pub fn feature_names(&self) -> &[String] {
        self.artifact.feature_names()
    }

    /// Probability of the accident class, in `[0, 1]`.
    ///
    /// `record` must already be in the model's column order
    /// (see `EncodedRecord::align`); anything else is rejected, not reordered.
    pub fn score(&self, record: &EncodedRecord) -> Result<f64, PredictError> {
        record.check_columns(self.artifact.feature_names())?;

        let proba = self.artifact.classifier().predict_proba(record.values())?;
        validate_proba(proba)?;
        Ok(proba[ACCIDENT_CLASS])
    }
}

fn validate_proba(proba: [f64; 2]) -> Result<(), PredictError> {
    for p in proba {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(PredictError::InvalidOutput(format!(
                "class probabilities {proba:?} are not within [0, 1]"
            )));
        }
    }
    let sum = proba[0] + proba[1];
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(PredictError::InvalidOutput(format!(
            "class probabilities {proba:?} sum to {sum}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FormInput, assemble_record};
    use crate::models::LogisticRegression;
    use crate::preprocess::{encode, feature_names};
    use crate::testing::{FixedClassifier, artifact_with};
    use std::sync::Arc;

    fn encoded_default() -> EncodedRecord {
        encode(&assemble_record(&FormInput::default()).unwrap()).unwrap()
    }

    #[test]
    fn returns_accident_class_probability() {
        let scorer = RiskScorer::new(artifact_with(FixedClassifier::new(0.85), feature_names()));
        assert_eq!(scorer.score(&encoded_default()).unwrap(), 0.85);
    }

    #[test]
    fn scoring_is_idempotent() {
        let mut coefficients = vec![0.0; 74];
        coefficients[0] = 0.1;
        coefficients[2] = 0.7;
        let model = LogisticRegression::new(coefficients, -1.0).unwrap();
        let scorer = RiskScorer::new(ModelArtifact::new(Arc::new(model), feature_names()));

        let rec = encoded_default();
        let a = scorer.score(&rec).unwrap();
        let b = scorer.score(&rec).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert!((0.0..=1.0).contains(&a));
    }

    #[test]
    fn column_order_mismatch_is_detected() {
        let mut names = feature_names();
        names.swap(0, 1);
        let scorer = RiskScorer::new(artifact_with(FixedClassifier::new(0.5), names));
        let err = scorer.score(&encoded_default()).unwrap_err();
        assert!(matches!(err, PredictError::FeatureOrder { position: 0, .. }));
    }

    #[test]
    fn column_set_mismatch_is_detected() {
        let mut names = feature_names();
        names.pop();
        names.push("speed_limit".to_string());
        let scorer = RiskScorer::new(artifact_with(FixedClassifier::new(0.5), names));
        let err = scorer.score(&encoded_default()).unwrap_err();
        assert!(matches!(err, PredictError::FeatureMismatch { .. }));
    }

    #[test]
    fn out_of_range_output_is_rejected() {
        let scorer = RiskScorer::new(artifact_with(FixedClassifier::raw([-0.2, 1.2]), feature_names()));
        assert!(matches!(
            scorer.score(&encoded_default()),
            Err(PredictError::InvalidOutput(_))
        ));

        let scorer = RiskScorer::new(artifact_with(FixedClassifier::raw([0.5, 0.9]), feature_names()));
        assert!(matches!(
            scorer.score(&encoded_default()),
            Err(PredictError::InvalidOutput(_))
        ));
    }

    #[test]
    fn inference_failure_propagates() {
        let scorer = RiskScorer::new(artifact_with(FixedClassifier::failing(), feature_names()));
        assert!(matches!(
            scorer.score(&encoded_default()),
            Err(PredictError::Inference(_))
        ));
    }
}
