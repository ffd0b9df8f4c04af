use serde::{Deserialize, Serialize};

/// Scoring configuration.
///
/// Controls the desert sub-score weights and the minimum connection speeds a
/// region needs before telehealth is considered at all. Omitted sections fall
/// back to their defaults.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   desert_weights:
///     facility_density: 0.3
///     distance_to_clinic: 0.3
///     specialist_availability: 0.2
///     transportation: 0.2
///   speed:
///     min_download_mbps: 1.5
///     min_upload_mbps: 0.5
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Weights applied to the four healthcare desert sub-scores
    #[serde(default)]
    pub desert_weights: ScoreWeights,

    /// Minimum download/upload speeds for video visits
    #[serde(default)]
    pub speed: SpeedThresholds,
}

impl ScoringConfig {
    /// Replace the speed minimums that were given, leaving the rest as loaded.
    ///
    /// Overrides are not checked here; run `validate_scoring` on the result.
    pub fn with_speed_overrides(
        mut self,
        min_download_mbps: Option<f64>,
        min_upload_mbps: Option<f64>,
    ) -> Self {
        if let Some(min_download) = min_download_mbps {
            tracing::debug!(min_download, "overriding minimum download speed");
            self.speed.min_download_mbps = min_download;
        }
        if let Some(min_upload) = min_upload_mbps {
            tracing::debug!(min_upload, "overriding minimum upload speed");
            self.speed.min_upload_mbps = min_upload;
        }
        self
    }
}

/// Healthcare desert sub-score weights.
///
/// The four weights must sum to 1.0 for the combined score to stay in
/// `[0, 1]` before clamping. The scorer does not check this;
/// [`validate_scoring`](super::validate_scoring) does.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreWeights {
    pub facility_density: f64,
    pub distance_to_clinic: f64,
    pub specialist_availability: f64,
    pub transportation: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            facility_density: 0.3,
            distance_to_clinic: 0.3,
            specialist_availability: 0.2,
            transportation: 0.2,
        }
    }
}

impl ScoreWeights {
    pub fn total(&self) -> f64 {
        self.facility_density
            + self.distance_to_clinic
            + self.specialist_availability
            + self.transportation
    }
}

/// Telehealth feasibility weights. Speed matters most.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityWeights {
    pub speed: f64,
    pub coverage: f64,
    pub reliability: f64,
}

impl FeasibilityWeights {
    pub const STANDARD: Self = Self {
        speed: 0.5,
        coverage: 0.3,
        reliability: 0.2,
    };
}

impl Default for FeasibilityWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Minimum connection speeds for a usable video visit.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SpeedThresholds {
    pub min_download_mbps: f64,
    pub min_upload_mbps: f64,
}

impl SpeedThresholds {
    pub const DEFAULT_MIN_DOWNLOAD_MBPS: f64 = 1.5;
    pub const DEFAULT_MIN_UPLOAD_MBPS: f64 = 0.5;
}

impl Default for SpeedThresholds {
    fn default() -> Self {
        Self {
            min_download_mbps: Self::DEFAULT_MIN_DOWNLOAD_MBPS,
            min_upload_mbps: Self::DEFAULT_MIN_UPLOAD_MBPS,
        }
    }
}
