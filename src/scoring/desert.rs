//! Healthcare desert scoring.
//!
//! A region's desert score is a weighted sum of four sub-scores, each in
//! `[0, 1]` for well-formed input, where higher means worse access:
//!
//! | Sub-score      | Rule                                                  |
//! |----------------|-------------------------------------------------------|
//! | Facility       | `1 - (facilities per 1,000) / 0.5`, floored at 0      |
//! | Distance       | `avg_distance / 50`, capped at 1                      |
//! | Specialist     | `1 - specialists per 10,000`, floored at 0            |
//! | Transportation | 0 with public transit, 1 without                      |
//!
//! Only the weighted total is clamped to `[0, 1]`.

use super::classification::DesertClassification;
use super::config::ScoreWeights;
use super::engine::{DesertAssessment, SubScore};
use super::normalize::{capped_ramp, clamp_unit, per_capita, shortfall};
use crate::region::types::RegionMetrics;

/// Facilities per 1,000 residents considered adequate.
pub const ADEQUATE_FACILITIES_PER_1000: f64 = 0.5;

/// Average distance (miles) at which the distance sub-score saturates.
pub const MAX_DISTANCE_MILES: f64 = 50.0;

/// Specialists per 10,000 residents considered good coverage.
pub const ADEQUATE_SPECIALISTS_PER_10000: f64 = 1.0;

pub fn facility_score(facility_count: u64, population: u64) -> f64 {
    match per_capita(facility_count, population, 1_000.0) {
        Some(per_1000) => shortfall(per_1000, ADEQUATE_FACILITIES_PER_1000),
        None => 1.0,
    }
}

pub fn distance_score(avg_distance: f64) -> f64 {
    capped_ramp(avg_distance, MAX_DISTANCE_MILES)
}

pub fn specialist_score(specialist_count: u64, population: u64) -> f64 {
    match per_capita(specialist_count, population, 10_000.0) {
        Some(per_10000) => shortfall(per_10000, ADEQUATE_SPECIALISTS_PER_10000),
        None => 1.0,
    }
}

pub fn transportation_score(has_public_transportation: bool) -> f64 {
    if has_public_transportation {
        0.0
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct HealthcareDesertScorer {
    weights: ScoreWeights,
}

impl HealthcareDesertScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Desert score in `[0, 1]`; higher is a more severe desert.
    pub fn calculate_desert_score(&self, metrics: &RegionMetrics) -> f64 {
        self.assess(metrics).score
    }

    pub fn classify_region(&self, desert_score: f64) -> DesertClassification {
        DesertClassification::from_score(desert_score)
    }

    /// Score a region and keep the per-sub-score breakdown.
    pub fn assess(&self, metrics: &RegionMetrics) -> DesertAssessment {
        let w = &self.weights;
        let breakdown = vec![
            SubScore::new(
                "Facility density",
                format!(
                    "{} facilities / {} residents",
                    metrics.facility_count, metrics.population
                ),
                facility_score(metrics.facility_count, metrics.population),
                w.facility_density,
            ),
            SubScore::new(
                "Distance to clinic",
                format!("{} mi average", metrics.avg_distance),
                distance_score(metrics.avg_distance),
                w.distance_to_clinic,
            ),
            SubScore::new(
                "Specialist availability",
                format!(
                    "{} specialists / {} residents",
                    metrics.specialist_count, metrics.population
                ),
                specialist_score(metrics.specialist_count, metrics.population),
                w.specialist_availability,
            ),
            SubScore::new(
                "Transportation",
                if metrics.has_public_transportation {
                    "public transit available".to_string()
                } else {
                    "no public transit".to_string()
                },
                transportation_score(metrics.has_public_transportation),
                w.transportation,
            ),
        ];

        let total: f64 = breakdown.iter().map(|s| s.contribution).sum();
        let score = clamp_unit(total);
        let classification = self.classify_region(score);

        tracing::debug!(
            facility = breakdown[0].value,
            distance = breakdown[1].value,
            specialist = breakdown[2].value,
            transportation = breakdown[3].value,
            total,
            score,
            %classification,
            "desert score"
        );

        DesertAssessment {
            score,
            classification,
            breakdown,
        }
    }
}
