use tenet::region::{ConnectivityMetrics, RegionMetrics, RegionRecord};
use tenet::scoring::{
    Assessor, DesertClassification, FeasibilityClassification, HealthcareDesertScorer,
    TelehealthFeasibilityScorer,
};

fn region(
    facility_count: u64,
    population: u64,
    avg_distance: f64,
    specialist_count: u64,
    has_public_transportation: bool,
) -> RegionMetrics {
    RegionMetrics {
        facility_count,
        population,
        avg_distance,
        specialist_count,
        has_public_transportation,
    }
}

fn connectivity(
    download: f64,
    upload: f64,
    coverage: f64,
    reliability: f64,
) -> ConnectivityMetrics {
    ConnectivityMetrics {
        download_speed_mbps: download,
        upload_speed_mbps: upload,
        internet_coverage_pct: coverage,
        reliability,
    }
}

#[test]
fn severe_desert_region() {
    let scorer = HealthcareDesertScorer::default();
    let score = scorer.calculate_desert_score(&region(0, 5000, 75.0, 0, false));
    assert!(score > 0.7);
    assert_eq!(scorer.classify_region(score).label(), "Severe Healthcare Desert");
}

#[test]
fn adequate_access_region() {
    let scorer = HealthcareDesertScorer::default();
    let score = scorer.calculate_desert_score(&region(5, 5000, 5.0, 3, true));
    assert!(score < 0.3);
    assert_eq!(scorer.classify_region(score).label(), "Adequate Healthcare Access");
}

#[test]
fn highly_feasible_region() {
    let scorer = TelehealthFeasibilityScorer::default();
    let score = scorer.calculate_feasibility_score(&connectivity(25.0, 10.0, 95.0, 0.9));
    assert!(score > 0.8);
    assert!(scorer.is_telehealth_viable(score));
    assert_eq!(scorer.classify_feasibility(score).label(), "Highly Feasible");
}

#[test]
fn not_feasible_region() {
    let scorer = TelehealthFeasibilityScorer::default();
    let score = scorer.calculate_feasibility_score(&connectivity(0.5, 0.2, 20.0, 0.3));
    assert!(score < 0.4);
    assert!(!scorer.is_telehealth_viable(score));
    assert_eq!(scorer.classify_feasibility(score).label(), "Not Feasible");
}

#[test]
fn classification_boundaries() {
    assert_eq!(DesertClassification::from_score(0.75), DesertClassification::Severe);
    assert_eq!(DesertClassification::from_score(0.55), DesertClassification::Moderate);
    assert_eq!(DesertClassification::from_score(0.35), DesertClassification::Limited);
    assert_eq!(DesertClassification::from_score(0.1), DesertClassification::Adequate);

    assert_eq!(
        FeasibilityClassification::from_score(0.85),
        FeasibilityClassification::HighlyFeasible
    );
    assert_eq!(FeasibilityClassification::from_score(0.65), FeasibilityClassification::Feasible);
    assert_eq!(
        FeasibilityClassification::from_score(0.45),
        FeasibilityClassification::MarginallyFeasible
    );
    assert_eq!(FeasibilityClassification::from_score(0.2), FeasibilityClassification::NotFeasible);
}

#[test]
fn sparse_record_scores_as_worst_case() {
    // Only a name: no facilities, no transit, no connectivity
    let result = Assessor::default().assess_region(&RegionRecord::new("Unknown"));
    // facility 1.0*0.3 + distance 0 + specialist 1.0*0.2 + transport 1.0*0.2
    assert!((result.desert.score - 0.7).abs() < 1e-12);
    assert_eq!(result.telehealth.score, 0.0);
    assert_eq!(result.telehealth.classification, FeasibilityClassification::NotFeasible);
}

#[test]
fn scores_stay_in_unit_range() {
    let desert = HealthcareDesertScorer::default();
    let telehealth = TelehealthFeasibilityScorer::default();

    for distance in [0.0, 12.5, 50.0, 400.0] {
        for population in [0, 1, 250, 100_000] {
            for facilities in [0, 1, 40] {
                let metrics = region(facilities, population, distance, facilities, false);
                let score = desert.calculate_desert_score(&metrics);
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }

    for download in [0.0, 1.5, 10.0, 1000.0] {
        for upload in [0.0, 0.5, 3.0, 100.0] {
            for coverage in [0.0, 50.0, 100.0] {
                let score = telehealth
                    .calculate_feasibility_score(&connectivity(download, upload, coverage, 1.0));
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}
