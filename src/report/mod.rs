//! Risk presenter: probability → risk band, advice and formatted output.

use serde::Serialize;

pub mod format;

pub use format::*;

/// Above this probability the risk is High.
pub const HIGH_THRESHOLD: f64 = 0.70;
/// Above this probability (and up to `HIGH_THRESHOLD`) the risk is Moderate.
pub const MODERATE_THRESHOLD: f64 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    /// Bucket a probability. Both thresholds belong to the lower band:
    /// exactly 0.70 is Moderate, exactly 0.40 is Low.
    pub fn from_probability(p: f64) -> Self {
        if p > HIGH_THRESHOLD {
            RiskLevel::High
        } else if p > MODERATE_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RiskLevel::High => "High Risk",
            RiskLevel::Moderate => "Moderate Risk",
            RiskLevel::Low => "Low Risk",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            RiskLevel::High => "🚨",
            RiskLevel::Moderate => "⚠️",
            RiskLevel::Low => "✅",
        }
    }

    /// Hex colour of the band.
    pub fn color_hex(self) -> &'static str {
        match self {
            RiskLevel::High => "#FF0000",
            RiskLevel::Moderate => "#FFA500",
            RiskLevel::Low => "#00FF00",
        }
    }

    /// Safety recommendations shown under the result.
    pub fn advice(self) -> &'static [&'static str] {
        match self {
            RiskLevel::High => &[
                "Consider delaying your trip if possible",
                "Exercise extreme caution if you must travel",
                "Reduce speed significantly",
                "Increase following distance",
                "Ensure all vehicle lights are working",
            ],
            RiskLevel::Moderate => &[
                "Drive with increased awareness",
                "Moderate your speed",
                "Be prepared for sudden stops",
                "Check weather conditions before departing",
            ],
            RiskLevel::Low => &[
                "Still maintain safe driving practices",
                "Stay alert for unexpected hazards",
                "Obey all traffic laws",
            ],
        }
    }
}

/// Probability as a display percentage (`0.85` → `85.0`).
pub fn probability_percent(p: f64) -> f64 {
    p * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_exclusive_on_the_low_side() {
        assert_eq!(RiskLevel::from_probability(0.70), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.7000001), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.40), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.4000001), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(1.0), RiskLevel::High);
    }

    #[test]
    fn high_band_advice_is_verbatim() {
        let level = RiskLevel::from_probability(0.85);
        assert_eq!(level.title(), "High Risk");
        assert_eq!(
            level.advice(),
            [
                "Consider delaying your trip if possible",
                "Exercise extreme caution if you must travel",
                "Reduce speed significantly",
                "Increase following distance",
                "Ensure all vehicle lights are working",
            ]
        );
    }

    #[test]
    fn percent_is_scaled_once() {
        assert!((probability_percent(0.85) - 85.0).abs() < 1e-9);
        assert_eq!(probability_percent(1.0), 100.0);
    }
}
