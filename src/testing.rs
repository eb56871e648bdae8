//! Shared test fixtures.

use std::sync::Arc;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::choices::*;
use crate::domain::{FormInput, TimeOfDay};
use crate::error::PredictError;
use crate::models::{Classifier, ModelArtifact};

/// A classifier that ignores its input.
pub struct FixedClassifier {
    output: Result<[f64; 2], PredictError>,
}

impl FixedClassifier {
    pub fn new(p_accident: f64) -> Self {
        Self::raw([1.0 - p_accident, p_accident])
    }

    pub fn raw(output: [f64; 2]) -> Self {
        Self { output: Ok(output) }
    }

    pub fn failing() -> Self {
        Self {
            output: Err(PredictError::Inference("model exploded".to_string())),
        }
    }
}

impl Classifier for FixedClassifier {
    fn predict_proba(&self, _features: &[f64]) -> Result<[f64; 2], PredictError> {
        self.output.clone()
    }

    fn kind(&self) -> &'static str {
        "fixed"
    }
}

pub fn artifact_with(classifier: impl Classifier + 'static, feature_names: Vec<String>) -> ModelArtifact {
    ModelArtifact::new(Arc::new(classifier), feature_names)
}

fn pick<T: Copy>(rng: &mut StdRng, all: &[T]) -> Option<T> {
    all.choose(rng).copied()
}

/// A form with every widget at a random valid position.
pub fn random_form(rng: &mut StdRng) -> FormInput {
    let hour = rng.gen_range(0..24);
    let minute = rng.gen_range(0..12) * 5;
    FormInput {
        time: TimeOfDay::new(hour, minute),
        day_of_week: pick(rng, DayOfWeek::ALL),
        area_accident: pick(rng, AreaAccident::ALL),
        type_of_vehicle: pick(rng, TypeOfVehicle::ALL),
        lane_or_medians: pick(rng, LaneOrMedians::ALL),
        road_surface_type: pick(rng, RoadSurfaceType::ALL),
        road_surface_conditions: pick(rng, RoadSurfaceConditions::ALL),
        light_conditions: pick(rng, LightConditions::ALL),
        weather_conditions: pick(rng, WeatherConditions::ALL),
        sex_of_driver: pick(rng, SexOfDriver::ALL),
    }
}
