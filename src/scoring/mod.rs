pub mod classification;
pub mod config;
pub mod desert;
pub mod engine;
pub mod normalize;
pub mod telehealth;
pub mod validation;

pub use classification::{DesertClassification, FeasibilityClassification};
pub use config::*;
pub use desert::HealthcareDesertScorer;
pub use engine::{
    rank_assessments, Assessor, DesertAssessment, RegionAssessment, SubScore,
    TelehealthAssessment,
};
pub use telehealth::{is_telehealth_viable, TelehealthFeasibilityScorer};
pub use validation::validate_scoring;
