use serde::Serialize;
use std::cmp::Ordering;

use super::classification::{DesertClassification, FeasibilityClassification};
use super::config::ScoringConfig;
use super::desert::HealthcareDesertScorer;
use super::telehealth::TelehealthFeasibilityScorer;
use crate::region::types::RegionRecord;

#[derive(Debug, Clone, Serialize)]
pub struct SubScore {
    pub label: String,        // e.g. "Facility density", "Speed"
    pub detail: String,       // e.g. "2 facilities / 6000 residents"
    pub value: f64,           // Normalized sub-score
    pub weight: f64,
    pub contribution: f64,    // value * weight
}

impl SubScore {
    pub fn new(label: &str, detail: String, value: f64, weight: f64) -> Self {
        Self {
            label: label.to_string(),
            detail,
            value,
            weight,
            contribution: value * weight,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DesertAssessment {
    pub score: f64,
    pub classification: DesertClassification,
    pub breakdown: Vec<SubScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TelehealthAssessment {
    pub score: f64,
    pub viable: bool,
    pub classification: FeasibilityClassification,
    pub breakdown: Vec<SubScore>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegionAssessment {
    pub name: String,
    pub desert: DesertAssessment,
    pub telehealth: TelehealthAssessment,
}

/// Both scorers, built once from the effective configuration.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    pub desert: HealthcareDesertScorer,
    pub telehealth: TelehealthFeasibilityScorer,
}

impl Assessor {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            desert: HealthcareDesertScorer::new(config.desert_weights),
            telehealth: TelehealthFeasibilityScorer::new(config.speed),
        }
    }

    pub fn assess_region(&self, record: &RegionRecord) -> RegionAssessment {
        let _span = tracing::debug_span!("region", name = %record.name).entered();
        RegionAssessment {
            name: record.name.clone(),
            desert: self.desert.assess(&record.region_metrics()),
            telehealth: self.telehealth.assess(&record.connectivity_metrics()),
        }
    }

    /// Assess every record, worst-served regions first.
    pub fn assess_all(&self, records: &[RegionRecord]) -> Vec<RegionAssessment> {
        let mut assessments: Vec<_> = records.iter().map(|r| self.assess_region(r)).collect();
        rank_assessments(&mut assessments);
        assessments
    }
}

/// Sort by desert score descending, then feasibility ascending (regions
/// with the fewest remote options first), then name.
pub fn rank_assessments(assessments: &mut [RegionAssessment]) {
    assessments.sort_by(|a, b| {
        let desert_cmp = b
            .desert
            .score
            .partial_cmp(&a.desert.score)
            .unwrap_or(Ordering::Equal);
        if desert_cmp != Ordering::Equal {
            return desert_cmp;
        }
        let feasibility_cmp = a
            .telehealth
            .score
            .partial_cmp(&b.telehealth.score)
            .unwrap_or(Ordering::Equal);
        if feasibility_cmp != Ordering::Equal {
            return feasibility_cmp;
        }
        a.name.cmp(&b.name)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoreWeights, SpeedThresholds};

    fn record(name: &str, facilities: u64, distance: f64, download: f64) -> RegionRecord {
        RegionRecord {
            name: name.to_string(),
            facility_count: Some(facilities),
            population: Some(2000),
            avg_distance: Some(distance),
            specialists: Some(0),
            has_transportation: Some(false),
            download_speed: Some(download),
            upload_speed: Some(1.0),
            internet_coverage: Some(80.0),
            reliability: Some(0.8),
        }
    }

    #[test]
    fn test_sub_score_contribution() {
        let s = SubScore::new("Distance to clinic", "25 mi".to_string(), 0.5, 0.3);
        assert!((s.contribution - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_assess_region_scores_both() {
        let assessor = Assessor::default();
        let result = assessor.assess_region(&record("Nome", 0, 75.0, 25.0));
        assert_eq!(result.name, "Nome");
        assert_eq!(result.desert.classification, DesertClassification::Severe);
        assert_eq!(result.desert.breakdown.len(), 4);
        assert_eq!(result.telehealth.breakdown.len(), 3);
        assert!(result.telehealth.viable);
    }

    #[test]
    fn test_assessor_uses_config() {
        let config = ScoringConfig {
            desert_weights: ScoreWeights {
                facility_density: 0.0,
                distance_to_clinic: 1.0,
                specialist_availability: 0.0,
                transportation: 0.0,
            },
            speed: SpeedThresholds {
                min_download_mbps: 50.0,
                min_upload_mbps: 0.5,
            },
        };
        let assessor = Assessor::new(&config);
        let result = assessor.assess_region(&record("Kotzebue", 0, 25.0, 25.0));
        assert_eq!(result.desert.score, 0.5);
        // 25 Mbps is under the configured 50 Mbps minimum
        assert_eq!(result.telehealth.breakdown[0].value, 0.0);
    }

    #[test]
    fn test_assess_all_ranks_worst_first() {
        let assessor = Assessor::default();
        let records = vec![
            record("Anchorage", 10, 2.0, 100.0),
            record("Utqiagvik", 0, 300.0, 2.0),
            record("Bethel", 1, 30.0, 10.0),
        ];
        let ranked = assessor.assess_all(&records);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Utqiagvik", "Bethel", "Anchorage"]);
    }

    #[test]
    fn test_ties_break_on_feasibility_then_name() {
        let assessor = Assessor::default();
        let records = vec![
            record("Beta", 0, 75.0, 25.0),
            record("Gamma", 0, 75.0, 1.0),
            record("Alpha", 0, 75.0, 25.0),
        ];
        let ranked = assessor.assess_all(&records);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Alpha", "Beta"]);
    }
}
