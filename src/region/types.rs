use serde::{Deserialize, Serialize};

/// Healthcare access inputs for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub facility_count: u64,
    pub population: u64,        // 0 scores as a maximal desert
    pub avg_distance: f64,      // Miles to the nearest clinic, precomputed
    pub specialist_count: u64,
    pub has_public_transportation: bool,
}

/// Broadband inputs for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectivityMetrics {
    pub download_speed_mbps: f64,
    pub upload_speed_mbps: f64,
    pub internet_coverage_pct: f64, // 0-100
    pub reliability: f64,           // 0-1
}

/// A region as it appears in a region file.
///
/// Every metric is optional. Absent healthcare fields fall back to the most
/// desert-like value (no facilities, no specialists, no transit) except
/// population, which defaults to 1. Absent connectivity fields fall back to 0.
/// Unknown keys are rejected so a misspelt metric never scores as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialists: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_transportation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet_coverage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reliability: Option<f64>,
}

impl RegionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Healthcare metrics with missing fields defaulted
    pub fn region_metrics(&self) -> RegionMetrics {
        RegionMetrics {
            facility_count: self.facility_count.unwrap_or(0),
            population: self.population.unwrap_or(1),
            avg_distance: self.avg_distance.unwrap_or(0.0),
            specialist_count: self.specialists.unwrap_or(0),
            has_public_transportation: self.has_transportation.unwrap_or(false),
        }
    }

    /// Connectivity metrics with missing fields defaulted
    pub fn connectivity_metrics(&self) -> ConnectivityMetrics {
        ConnectivityMetrics {
            download_speed_mbps: self.download_speed.unwrap_or(0.0),
            upload_speed_mbps: self.upload_speed.unwrap_or(0.0),
            internet_coverage_pct: self.internet_coverage.unwrap_or(0.0),
            reliability: self.reliability.unwrap_or(0.0),
        }
    }
}

/// Top-level shape of a region file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionFile {
    #[serde(default)]
    pub regions: Vec<RegionRecord>,
}
