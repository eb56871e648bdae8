//! Random forest of binary decision trees.
//!
//! Trees use the flat array layout common to tree-ensemble exports: node `i`
//! has `children_left[i]`, `children_right[i]`, `feature[i]`, `threshold[i]`
//! and a two-class weight `value[i]`. A child index of `-1` marks a leaf.
//! Traversal goes left when `x[feature] <= threshold`.

use crate::error::PredictError;
use crate::models::Classifier;

const LEAF: i64 = -1;

#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    value: Vec<[f64; 2]>,
}

impl DecisionTree {
    /// Validate the node arrays against `n_features`.
    pub fn new(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<f64>,
        value: Vec<[f64; 2]>,
        n_features: usize,
    ) -> Result<Self, String> {
        let n = children_left.len();
        if n == 0 {
            return Err("tree has no nodes".to_string());
        }
        if children_right.len() != n || feature.len() != n || threshold.len() != n || value.len() != n {
            return Err(format!(
                "node arrays differ in length (left={n}, right={}, feature={}, threshold={}, value={})",
                children_right.len(),
                feature.len(),
                threshold.len(),
                value.len()
            ));
        }

        for i in 0..n {
            let (l, r) = (children_left[i], children_right[i]);
            if (l == LEAF) != (r == LEAF) {
                return Err(format!("node {i} has exactly one child"));
            }
            if l == LEAF {
                let [a, b] = value[i];
                if !(a.is_finite() && b.is_finite() && a >= 0.0 && b >= 0.0 && a + b > 0.0) {
                    return Err(format!("leaf {i} has invalid class weights {:?}", value[i]));
                }
                continue;
            }
            // Children must point forward, which also rules out cycles.
            for child in [l, r] {
                if child <= i as i64 || child >= n as i64 {
                    return Err(format!("node {i} has out-of-range child {child}"));
                }
            }
            if feature[i] < 0 || feature[i] as usize >= n_features {
                return Err(format!("node {i} splits on unknown feature {}", feature[i]));
            }
            if threshold[i].is_nan() {
                return Err(format!("node {i} has a NaN threshold"));
            }
        }

        Ok(Self {
            children_left,
            children_right,
            feature,
            threshold,
            value,
        })
    }

    /// Normalised class distribution at the leaf `features` lands in.
    pub fn leaf_proba(&self, features: &[f64]) -> [f64; 2] {
        let mut node = 0usize;
        while self.children_left[node] != LEAF {
            let x = features[self.feature[node] as usize];
            node = if x <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        let [a, b] = self.value[node];
        let total = a + b;
        [a / total, b / total]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>, n_features: usize) -> Result<Self, String> {
        if trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        Ok(Self { trees, n_features })
    }
}

impl Classifier for RandomForest {
    fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2], PredictError> {
        if features.len() != self.n_features {
            return Err(PredictError::Inference(format!(
                "expected {} features, got {}",
                self.n_features,
                features.len()
            )));
        }
        if let Some(i) = features.iter().position(|x| x.is_nan()) {
            return Err(PredictError::Inference(format!("feature {i} is NaN")));
        }

        let mut acc = [0.0, 0.0];
        for tree in &self.trees {
            let [a, b] = tree.leaf_proba(features);
            acc[0] += a;
            acc[1] += b;
        }
        let n = self.trees.len() as f64;
        Ok([acc[0] / n, acc[1] / n])
    }

    fn kind(&self) -> &'static str {
        "random_forest"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split on feature 0 at 0.5: left leaf 3:1, right leaf 1:3.
    fn stump(feature: i64) -> DecisionTree {
        DecisionTree::new(
            vec![1, -1, -1],
            vec![2, -1, -1],
            vec![feature, -2, -2],
            vec![0.5, -2.0, -2.0],
            vec![[4.0, 4.0], [3.0, 1.0], [1.0, 3.0]],
            2,
        )
        .unwrap()
    }

    #[test]
    fn threshold_is_inclusive_on_the_left() {
        let t = stump(0);
        assert_eq!(t.leaf_proba(&[0.5, 0.0]), [0.75, 0.25]);
        assert_eq!(t.leaf_proba(&[0.6, 0.0]), [0.25, 0.75]);
    }

    #[test]
    fn forest_averages_tree_distributions() {
        let forest = RandomForest::new(vec![stump(0), stump(1)], 2).unwrap();
        let p = forest.predict_proba(&[1.0, 0.0]).unwrap();
        assert!((p[1] - 0.5).abs() < 1e-12);
        let p = forest.predict_proba(&[1.0, 1.0]).unwrap();
        assert!((p[1] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn malformed_trees_are_rejected() {
        // Right child missing.
        assert!(DecisionTree::new(vec![1, -1], vec![-1, -1], vec![0, -2], vec![0.5, 0.0], vec![[1.0, 1.0]; 2], 1).is_err());
        // Feature out of range.
        assert!(DecisionTree::new(vec![1, -1, -1], vec![2, -1, -1], vec![5, -2, -2], vec![0.5, 0.0, 0.0], vec![[1.0, 1.0]; 3], 2).is_err());
        // Backwards edge.
        assert!(DecisionTree::new(vec![0, -1], vec![1, -1], vec![0, -2], vec![0.5, 0.0], vec![[1.0, 1.0]; 2], 1).is_err());
        // Empty leaf weights.
        assert!(DecisionTree::new(vec![-1], vec![-1], vec![-2], vec![-2.0], vec![[0.0, 0.0]], 1).is_err());
        assert!(RandomForest::new(Vec::new(), 3).is_err());
    }

    #[test]
    fn width_mismatch_is_an_inference_error() {
        let forest = RandomForest::new(vec![stump(0)], 2).unwrap();
        assert!(forest.predict_proba(&[1.0]).is_err());
        assert!(forest.predict_proba(&[f64::NAN, 0.0]).is_err());
    }
}
