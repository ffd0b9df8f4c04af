//! Telehealth feasibility scoring.
//!
//! Speed is a hard gate: a region below either minimum speed gets a speed
//! sub-score of 0 no matter how fast the other direction is. Above the
//! minimums, download and upload each ramp linearly toward a fixed
//! "excellent" margin and the speed sub-score is their average.

use super::classification::FeasibilityClassification;
use super::config::{FeasibilityWeights, SpeedThresholds};
use super::engine::{SubScore, TelehealthAssessment};
use super::normalize::{capped_ramp, clamp_unit};
use crate::region::types::ConnectivityMetrics;

/// Download margin (Mbps) above the minimum that counts as excellent.
pub const DOWNLOAD_RANGE_MBPS: f64 = 23.5;

/// Upload margin (Mbps) above the minimum that counts as excellent.
pub const UPLOAD_RANGE_MBPS: f64 = 9.5;

/// Feasibility at or above this score means telehealth is viable.
pub const VIABILITY_THRESHOLD: f64 = 0.5;

pub fn speed_score(download_mbps: f64, upload_mbps: f64, thresholds: &SpeedThresholds) -> f64 {
    if download_mbps < thresholds.min_download_mbps || upload_mbps < thresholds.min_upload_mbps {
        return 0.0;
    }

    let download = capped_ramp(
        download_mbps - thresholds.min_download_mbps,
        DOWNLOAD_RANGE_MBPS,
    );
    let upload = capped_ramp(upload_mbps - thresholds.min_upload_mbps, UPLOAD_RANGE_MBPS);

    (download + upload) / 2.0
}

/// Coverage percentage as a fraction. Not clamped.
pub fn coverage_score(internet_coverage_pct: f64) -> f64 {
    internet_coverage_pct / 100.0
}

pub fn is_telehealth_viable(feasibility_score: f64) -> bool {
    feasibility_score >= VIABILITY_THRESHOLD
}

#[derive(Debug, Clone, Default)]
pub struct TelehealthFeasibilityScorer {
    thresholds: SpeedThresholds,
    weights: FeasibilityWeights,
}

impl TelehealthFeasibilityScorer {
    pub fn new(thresholds: SpeedThresholds) -> Self {
        Self {
            thresholds,
            weights: FeasibilityWeights::STANDARD,
        }
    }

    pub fn thresholds(&self) -> &SpeedThresholds {
        &self.thresholds
    }

    pub fn speed_score(&self, download_mbps: f64, upload_mbps: f64) -> f64 {
        speed_score(download_mbps, upload_mbps, &self.thresholds)
    }

    /// Feasibility score in `[0, 1]`; higher is more feasible.
    pub fn calculate_feasibility_score(&self, metrics: &ConnectivityMetrics) -> f64 {
        self.assess(metrics).score
    }

    pub fn is_telehealth_viable(&self, feasibility_score: f64) -> bool {
        is_telehealth_viable(feasibility_score)
    }

    pub fn classify_feasibility(&self, feasibility_score: f64) -> FeasibilityClassification {
        FeasibilityClassification::from_score(feasibility_score)
    }

    pub fn assess(&self, metrics: &ConnectivityMetrics) -> TelehealthAssessment {
        let speed_detail = if metrics.download_speed_mbps < self.thresholds.min_download_mbps
            || metrics.upload_speed_mbps < self.thresholds.min_upload_mbps
        {
            format!(
                "{}/{} Mbps below minimum {}/{}",
                metrics.download_speed_mbps,
                metrics.upload_speed_mbps,
                self.thresholds.min_download_mbps,
                self.thresholds.min_upload_mbps
            )
        } else {
            format!(
                "{}/{} Mbps down/up",
                metrics.download_speed_mbps, metrics.upload_speed_mbps
            )
        };

        let breakdown = vec![
            SubScore::new(
                "Speed",
                speed_detail,
                self.speed_score(metrics.download_speed_mbps, metrics.upload_speed_mbps),
                self.weights.speed,
            ),
            SubScore::new(
                "Coverage",
                format!("{}% with internet access", metrics.internet_coverage_pct),
                coverage_score(metrics.internet_coverage_pct),
                self.weights.coverage,
            ),
            SubScore::new(
                "Reliability",
                format!("{} connection reliability", metrics.reliability),
                metrics.reliability,
                self.weights.reliability,
            ),
        ];

        let total: f64 = breakdown.iter().map(|s| s.contribution).sum();
        let score = clamp_unit(total);
        let viable = self.is_telehealth_viable(score);
        let classification = self.classify_feasibility(score);

        tracing::debug!(
            speed = breakdown[0].value,
            coverage = breakdown[1].value,
            reliability = breakdown[2].value,
            total,
            score,
            viable,
            %classification,
            "feasibility score"
        );

        TelehealthAssessment {
            score,
            viable,
            classification,
            breakdown,
        }
    }
}
