//! The numeric row handed to the model.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::PredictError;

/// Ordered (feature name, value) columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedRecord {
    names: Vec<String>,
    values: Vec<f64>,
}

impl EncodedRecord {
    /// # Panics
    /// Panics if `names` and `values` differ in length.
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Self {
        assert_eq!(names.len(), values.len(), "one value per feature name");
        Self { names, values }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }

    /// Reorder the columns into `expected` order.
    ///
    /// The column *sets* must be identical: a feature the model expects but the
    /// encoder did not produce, or one the encoder produced but the model does
    /// not know, is a `FeatureMismatch`. Nothing is zero-filled or dropped.
    pub fn align(&self, expected: &[String]) -> Result<EncodedRecord, PredictError> {
        self.check_set(expected)?;

        let index: HashMap<&str, usize> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let values = expected.iter().map(|n| self.values[index[n.as_str()]]).collect();
        Ok(EncodedRecord {
            names: expected.to_vec(),
            values,
        })
    }

    /// Check the columns are exactly `expected`, same order.
    ///
    /// A set difference is reported as `FeatureMismatch` before any order check.
    pub fn check_columns(&self, expected: &[String]) -> Result<(), PredictError> {
        self.check_set(expected)?;

        match self.names.iter().zip(expected).position(|(a, b)| a != b) {
            None => Ok(()),
            Some(position) => Err(PredictError::FeatureOrder {
                position,
                got: self.names[position].clone(),
                expected: expected[position].clone(),
            }),
        }
    }

    // Same distinct names on both sides; a duplicated name is a mismatch.
    fn check_set(&self, expected: &[String]) -> Result<(), PredictError> {
        let got: HashSet<&str> = self.names.iter().map(String::as_str).collect();
        let want: HashSet<&str> = expected.iter().map(String::as_str).collect();

        let missing: Vec<String> = expected
            .iter()
            .filter(|n| !got.contains(n.as_str()))
            .cloned()
            .collect();
        let unexpected: Vec<String> = self
            .names
            .iter()
            .filter(|n| !want.contains(n.as_str()))
            .cloned()
            .collect();

        let distinct = got.len() == self.names.len() && want.len() == expected.len();
        if missing.is_empty() && unexpected.is_empty() && distinct {
            Ok(())
        } else {
            Err(PredictError::FeatureMismatch { missing, unexpected })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn align_reorders_by_name() {
        let rec = EncodedRecord::new(names(&["a", "b", "c"]), vec![1.0, 2.0, 3.0]);
        let aligned = rec.align(&names(&["c", "a", "b"])).unwrap();
        assert_eq!(aligned.names(), names(&["c", "a", "b"]).as_slice());
        assert_eq!(aligned.values(), &[3.0, 1.0, 2.0]);
        assert!(aligned.check_columns(&names(&["c", "a", "b"])).is_ok());
    }

    #[test]
    fn align_rejects_missing_and_unexpected() {
        let rec = EncodedRecord::new(names(&["a", "b"]), vec![1.0, 2.0]);
        let err = rec.align(&names(&["a", "z"])).unwrap_err();
        assert_eq!(
            err,
            PredictError::FeatureMismatch {
                missing: names(&["z"]),
                unexpected: names(&["b"]),
            }
        );
    }

    #[test]
    fn align_rejects_subset() {
        let rec = EncodedRecord::new(names(&["a", "b", "c"]), vec![1.0, 2.0, 3.0]);
        let err = rec.align(&names(&["a", "b"])).unwrap_err();
        assert!(matches!(err, PredictError::FeatureMismatch { ref missing, ref unexpected }
            if missing.is_empty() && unexpected == &names(&["c"])));
    }

    #[test]
    fn align_rejects_duplicated_expected_names() {
        let rec = EncodedRecord::new(names(&["a", "b"]), vec![1.0, 2.0]);
        assert!(rec.align(&names(&["a", "a", "b"])).is_err());
    }

    #[test]
    fn check_columns_reports_set_difference_before_order() {
        let rec = EncodedRecord::new(names(&["a", "b"]), vec![1.0, 2.0]);
        let err = rec.check_columns(&names(&["a", "z"])).unwrap_err();
        assert_eq!(
            err,
            PredictError::FeatureMismatch {
                missing: names(&["z"]),
                unexpected: names(&["b"]),
            }
        );

        let err = rec.check_columns(&names(&["z", "a"])).unwrap_err();
        assert!(matches!(err, PredictError::FeatureMismatch { .. }));
    }

    #[test]
    fn check_columns_reports_first_out_of_order_position() {
        let rec = EncodedRecord::new(names(&["a", "b", "c"]), vec![1.0, 2.0, 3.0]);
        let err = rec.check_columns(&names(&["a", "c", "b"])).unwrap_err();
        assert_eq!(
            err,
            PredictError::FeatureOrder {
                position: 1,
                got: "b".to_string(),
                expected: "c".to_string(),
            }
        );
    }
}
