//! Shared prediction pipeline used by both the CLI and the TUI.
//!
//! form → record → encode → align to the model → score → risk band
//!
//! The front-ends only deal with collecting input and presenting a
//! `Prediction` (or a `PredictError`).

use serde::Serialize;

use crate::domain::{FormInput, InputRecord, assemble_record};
use crate::error::PredictError;
use crate::models::ModelArtifact;
use crate::preprocess::encode;
use crate::report::{RiskLevel, probability_percent};
use crate::scoring::RiskScorer;

/// Outcome of one Predict action. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub input: InputRecord,
    pub probability: f64,
    pub percent: f64,
    pub risk_level: RiskLevel,
    pub title: &'static str,
    pub advice: &'static [&'static str],
}

impl Prediction {
    fn new(input: InputRecord, probability: f64) -> Self {
        let risk_level = RiskLevel::from_probability(probability);
        Self {
            input,
            probability,
            percent: probability_percent(probability),
            risk_level,
            title: risk_level.title(),
            advice: risk_level.advice(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Predictor {
    scorer: RiskScorer,
}

impl Predictor {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self {
            scorer: RiskScorer::new(artifact),
        }
    }

    pub fn artifact(&self) -> &ModelArtifact {
        self.scorer.artifact()
    }

    /// Run the full pipeline for one set of form selections.
    pub fn predict(&self, form: &FormInput) -> Result<Prediction, PredictError> {
        let outcome = self.predict_inner(form);
        match &outcome {
            Ok(p) => tracing::info!(
                probability = p.probability,
                risk = p.title,
                "prediction complete"
            ),
            Err(err) => tracing::warn!(error = %err, "prediction failed"),
        }
        outcome
    }

    fn predict_inner(&self, form: &FormInput) -> Result<Prediction, PredictError> {
        let record = assemble_record(form)?;
        let encoded = encode(&record)?.align(self.scorer.feature_names())?;
        let probability = self.scorer.score(&encoded)?;
        Ok(Prediction::new(record, probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DayOfWeek, Field, TimeOfDay};
    use crate::preprocess::feature_names;
    use crate::testing::{FixedClassifier, artifact_with};

    #[test]
    fn first_options_at_0830_monday_with_085_is_high_risk() {
        let form = FormInput::first_options(TimeOfDay::new(8, 30).unwrap(), DayOfWeek::Mon);
        let predictor = Predictor::new(artifact_with(FixedClassifier::new(0.85), feature_names()));

        let p = predictor.predict(&form).unwrap();
        assert_eq!(p.input.get(Field::Time), Some("08:30"));
        assert_eq!(p.input.get(Field::DayOfWeek), Some("Mon"));
        assert_eq!(p.input.get(Field::TypeOfVehicle), Some("🚚 Lorry (41–100Q)"));
        assert_eq!(p.risk_level, RiskLevel::High);
        assert_eq!(p.title, "High Risk");
        assert_eq!(p.advice, RiskLevel::High.advice());
        assert!((p.percent - 85.0).abs() < 1e-9);
    }

    #[test]
    fn model_feature_order_is_followed_via_alignment() {
        let mut names = feature_names();
        names.reverse();
        let predictor = Predictor::new(artifact_with(FixedClassifier::new(0.3), names));
        let p = predictor.predict(&FormInput::default()).unwrap();
        assert_eq!(p.risk_level, RiskLevel::Low);
    }

    #[test]
    fn model_with_unknown_features_fails_per_request() {
        let mut names = feature_names();
        names.push("road_width".to_string());
        let predictor = Predictor::new(artifact_with(FixedClassifier::new(0.3), names));
        let err = predictor.predict(&FormInput::default()).unwrap_err();
        assert_eq!(
            err,
            PredictError::FeatureMismatch {
                missing: vec!["road_width".to_string()],
                unexpected: Vec::new(),
            }
        );
    }

    #[test]
    fn serializes_for_json_output() {
        let predictor = Predictor::new(artifact_with(FixedClassifier::new(0.5), feature_names()));
        let p = predictor.predict(&FormInput::default()).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["risk_level"], "moderate");
        assert_eq!(json["input"]["time"], "08:30");
        assert_eq!(json["advice"].as_array().map(|a| a.len()), Some(4));
    }
}
