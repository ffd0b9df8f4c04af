use super::config::ScoringConfig;

/// Allowed drift from 1.0 in the desert weight total.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let w = &config.desert_weights;
    let weights = [
        ("facility_density", w.facility_density),
        ("distance_to_clinic", w.distance_to_clinic),
        ("specialist_availability", w.specialist_availability),
        ("transportation", w.transportation),
    ];

    let mut weights_ok = true;
    for (name, value) in weights {
        if !value.is_finite() || value < 0.0 {
            weights_ok = false;
            errors.push(format!(
                "scoring.desert_weights.{}: must be a non-negative number, got {}",
                name, value
            ));
        }
    }

    // Only meaningful once each weight is sane
    if weights_ok && (w.total() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        errors.push(format!(
            "scoring.desert_weights: weights must sum to 1.0, got {}",
            w.total()
        ));
    }

    let speeds = [
        ("min_download_mbps", config.speed.min_download_mbps),
        ("min_upload_mbps", config.speed.min_upload_mbps),
    ];
    for (name, value) in speeds {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!(
                "scoring.speed.{}: must be a non-negative number, got {}",
                name, value
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoreWeights, SpeedThresholds};

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            desert_weights: ScoreWeights {
                facility_density: 0.5,
                distance_to_clinic: 0.5,
                specialist_availability: 0.5,
                transportation: 0.5,
            },
            speed: SpeedThresholds::default(),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sum to 1.0"));
    }

    #[test]
    fn test_negative_weight() {
        let config = ScoringConfig {
            desert_weights: ScoreWeights {
                facility_density: -0.2,
                distance_to_clinic: 0.6,
                specialist_availability: 0.3,
                transportation: 0.3,
            },
            speed: SpeedThresholds::default(),
        };
        let errors = validate_scoring(&config).unwrap_err();
        // Sum check is skipped when a weight is already invalid
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.desert_weights.facility_density"));
    }

    #[test]
    fn test_non_finite_speed() {
        let config = ScoringConfig {
            desert_weights: ScoreWeights::default(),
            speed: SpeedThresholds {
                min_download_mbps: f64::NAN,
                min_upload_mbps: 0.5,
            },
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.speed.min_download_mbps"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            desert_weights: ScoreWeights {
                transportation: -1.0, // Error 1
                ..ScoreWeights::default()
            },
            speed: SpeedThresholds {
                min_download_mbps: -1.0, // Error 2
                min_upload_mbps: -0.5,   // Error 3
            },
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
