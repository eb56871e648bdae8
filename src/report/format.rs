//! Formatted terminal output for the non-interactive commands.
//!
//! Formatting lives in one place so the TUI and CLI present the same numbers.

use crate::app::pipeline::Prediction;
use crate::domain::InputRecord;

/// `0.85` → `"85.00%"`.
pub fn format_percent(probability: f64) -> String {
    format!("{:.2}%", crate::report::probability_percent(probability))
}

/// Input echo, one `key: value` per line.
pub fn format_input(record: &InputRecord) -> String {
    let width = record.keys().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (field, value) in record.iter() {
        out.push_str(&format!("  {:<width$}  {value}\n", field.key()));
    }
    out
}

/// Full prediction report: inputs, band, percentage and advice.
pub fn format_prediction(prediction: &Prediction) -> String {
    let mut out = String::new();

    out.push_str("=== Accident Risk Prediction ===\n");
    out.push_str(&format_input(&prediction.input));
    out.push('\n');
    out.push_str(&format!(
        "{} {}\n",
        prediction.risk_level.badge(),
        prediction.title
    ));
    out.push_str(&format!(
        "{} probability of accident\n",
        format_percent(prediction.probability)
    ));
    out.push('\n');
    out.push_str("Safety Recommendations\n");
    for line in prediction.advice {
        out.push_str(&format!("- {line}\n"));
    }
    out
}

/// The encoding contract as a numbered list.
pub fn format_schema(encoding_version: u32, feature_names: &[String]) -> String {
    let mut out = String::new();
    out.push_str(&format!("encoding_version: {encoding_version}\n"));
    out.push_str(&format!("features ({}):\n", feature_names.len()));
    for (i, name) in feature_names.iter().enumerate() {
        out.push_str(&format!("{i:>4}  {name}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::Predictor;
    use crate::domain::FormInput;
    use crate::preprocess::feature_names;
    use crate::testing::{FixedClassifier, artifact_with};

    #[test]
    fn percent_has_two_decimals_and_no_double_scaling() {
        assert_eq!(format_percent(0.85), "85.00%");
        assert_eq!(format_percent(0.123456), "12.35%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn prediction_report_contains_band_and_advice() {
        let predictor = Predictor::new(artifact_with(FixedClassifier::new(0.25), feature_names()));
        let p = predictor.predict(&FormInput::default()).unwrap();
        let text = format_prediction(&p);
        assert!(text.contains("✅ Low Risk\n"));
        assert!(text.contains("25.00% probability of accident"));
        assert!(text.contains("- Obey all traffic laws\n"));
        assert!(text.contains("time"));
        assert!(text.contains("08:30"));
    }

    #[test]
    fn schema_lists_every_feature() {
        let names = feature_names();
        let text = format_schema(1, &names);
        assert!(text.starts_with("encoding_version: 1\nfeatures (74):\n"));
        assert!(text.contains("   0  hour\n"));
        assert_eq!(text.lines().count(), 2 + names.len());
    }
}
