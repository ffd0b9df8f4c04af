use serde::{Deserialize, Serialize};
use std::fmt;

/// Healthcare desert severity, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DesertClassification {
    #[serde(rename = "Severe Healthcare Desert")]
    Severe,
    #[serde(rename = "Moderate Healthcare Desert")]
    Moderate,
    #[serde(rename = "Limited Healthcare Access")]
    Limited,
    #[serde(rename = "Adequate Healthcare Access")]
    Adequate,
}

impl DesertClassification {
    /// Lower bound (inclusive) for each bucket, checked top-down.
    const BOUNDARIES: [(f64, Self); 3] = [
        (0.7, Self::Severe),
        (0.5, Self::Moderate),
        (0.3, Self::Limited),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::BOUNDARIES
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, class)| *class)
            .unwrap_or(Self::Adequate)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Severe => "Severe Healthcare Desert",
            Self::Moderate => "Moderate Healthcare Desert",
            Self::Limited => "Limited Healthcare Access",
            Self::Adequate => "Adequate Healthcare Access",
        }
    }
}

impl fmt::Display for DesertClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Telehealth feasibility, most feasible first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeasibilityClassification {
    #[serde(rename = "Highly Feasible")]
    HighlyFeasible,
    #[serde(rename = "Feasible")]
    Feasible,
    #[serde(rename = "Marginally Feasible")]
    MarginallyFeasible,
    #[serde(rename = "Not Feasible")]
    NotFeasible,
}

impl FeasibilityClassification {
    const BOUNDARIES: [(f64, Self); 3] = [
        (0.8, Self::HighlyFeasible),
        (0.6, Self::Feasible),
        (0.4, Self::MarginallyFeasible),
    ];

    pub fn from_score(score: f64) -> Self {
        Self::BOUNDARIES
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, class)| *class)
            .unwrap_or(Self::NotFeasible)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyFeasible => "Highly Feasible",
            Self::Feasible => "Feasible",
            Self::MarginallyFeasible => "Marginally Feasible",
            Self::NotFeasible => "Not Feasible",
        }
    }
}

impl fmt::Display for FeasibilityClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
