//! Categorical-to-numeric encoding.
//!
//! This is a pinned contract between the form and the trained model:
//!
//! 1. `time` (`HH:MM`) becomes two numeric columns, `hour` and `minute`.
//! 2. Every categorical label is stripped of its leading decoration (emoji,
//!    variation selectors, spaces) and must then be one of the field's known
//!    categories.
//! 3. Each categorical field is one-hot encoded over its full vocabulary into
//!    `{field}_{category}` columns, fields in record order and categories in
//!    option order.
//!
//! Model artifacts store the `ENCODING_VERSION` they were trained against.
//! Any change to the rules above, or to a field vocabulary, must bump it.

use chrono::{NaiveTime, Timelike};

use crate::domain::{Field, InputRecord};
use crate::error::PredictError;

pub mod encoded;

pub use encoded::EncodedRecord;

pub const ENCODING_VERSION: u32 = 1;

const HOUR: &str = "hour";
const MINUTE: &str = "minute";

/// The full ordered column list the encoder emits.
pub fn feature_names() -> Vec<String> {
    let mut names = vec![HOUR.to_string(), MINUTE.to_string()];
    for field in Field::ALL {
        if let Some(vocab) = field.vocabulary() {
            names.extend(vocab.iter().map(|v| one_hot_name(field, v)));
        }
    }
    names
}

/// Strip the leading decoration from a display label.
///
/// `"🌧️💨 Raining and Windy"` → `"Raining and Windy"`.
pub fn canonical_label(raw: &str) -> &str {
    raw.trim_start_matches(|c: char| !c.is_alphanumeric()).trim_end()
}

/// Encode one record. Total and deterministic for every record the form can
/// produce; anything else is an error.
pub fn encode(record: &InputRecord) -> Result<EncodedRecord, PredictError> {
    let mut names = Vec::new();
    let mut values = Vec::new();

    let raw_time = record
        .get(Field::Time)
        .ok_or(PredictError::MissingField(Field::Time.key()))?;
    let time = NaiveTime::parse_from_str(raw_time.trim(), "%H:%M")
        .map_err(|_| PredictError::InvalidTime(raw_time.to_string()))?;
    names.push(HOUR.to_string());
    values.push(time.hour() as f64);
    names.push(MINUTE.to_string());
    values.push(time.minute() as f64);

    for field in Field::ALL {
        let Some(vocab) = field.vocabulary() else {
            continue;
        };
        let raw = record
            .get(field)
            .ok_or(PredictError::MissingField(field.key()))?;
        let category = canonical_label(raw);
        let hot = vocab
            .iter()
            .position(|v| *v == category)
            .ok_or_else(|| PredictError::UnknownCategory {
                field: field.key(),
                value: raw.to_string(),
            })?;

        for (i, v) in vocab.iter().enumerate() {
            names.push(one_hot_name(field, v));
            values.push(if i == hot { 1.0 } else { 0.0 });
        }
    }

    tracing::debug!(columns = names.len(), "encoded input record");
    Ok(EncodedRecord::new(names, values))
}

fn one_hot_name(field: Field, category: &str) -> String {
    format!("{}_{}", field.key(), category)
}
