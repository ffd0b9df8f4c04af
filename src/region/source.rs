use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::{RegionFile, RegionRecord};

/// Somewhere region records come from.
pub trait RegionSource {
    /// Read every record the source currently holds.
    fn collect(&mut self) -> Result<Vec<RegionRecord>>;

    /// Check one record, returning every problem found.
    fn validate(&self, record: &RegionRecord) -> Result<(), Vec<String>>;

    /// When `collect` last succeeded.
    fn last_updated(&self) -> Option<DateTime<Utc>>;
}

/// Region records stored in a YAML or JSON file.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
#[derive(Debug, Clone)]
pub struct FileRegionSource {
    path: PathBuf,
    last_updated: Option<DateTime<Utc>>,
}

impl FileRegionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            last_updated: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_json(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
    }
}

impl RegionSource for FileRegionSource {
    fn collect(&mut self) -> Result<Vec<RegionRecord>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read region file at {}", self.path.display()))?;

        let file: RegionFile = if self.is_json() {
            serde_json::from_str(&content).with_context(|| {
                format!("Failed to parse region file: invalid JSON in {}", self.path.display())
            })?
        } else {
            serde_saphyr::from_str(&content).with_context(|| {
                format!("Failed to parse region file: invalid YAML in {}", self.path.display())
            })?
        };

        self.last_updated = Some(Utc::now());
        tracing::debug!(
            path = %self.path.display(),
            count = file.regions.len(),
            "collected region records"
        );
        Ok(file.regions)
    }

    fn validate(&self, record: &RegionRecord) -> Result<(), Vec<String>> {
        validate_record(record)
    }

    fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }
}

/// Reject values the scorers would silently mis-score.
pub fn validate_record(record: &RegionRecord) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if record.name.trim().is_empty() {
        errors.push("name: must not be empty".to_string());
    }

    let non_negative = [
        ("avg_distance", record.avg_distance),
        ("download_speed", record.download_speed),
        ("upload_speed", record.upload_speed),
    ];
    for (field, value) in non_negative {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                errors.push(format!("{}: must be a non-negative number, got {}", field, v));
            }
        }
    }

    if let Some(v) = record.internet_coverage {
        if !(0.0..=100.0).contains(&v) {
            errors.push(format!("internet_coverage: must be between 0 and 100, got {}", v));
        }
    }

    if let Some(v) = record.reliability {
        if !(0.0..=1.0).contains(&v) {
            errors.push(format!("reliability: must be between 0 and 1, got {}", v));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Split records into valid ones and prefixed error messages for the rest.
pub fn partition_valid<S: RegionSource + ?Sized>(
    source: &S,
    records: Vec<RegionRecord>,
) -> (Vec<RegionRecord>, Vec<String>) {
    let mut valid = Vec::with_capacity(records.len());
    let mut errors = Vec::new();

    for (i, record) in records.into_iter().enumerate() {
        match source.validate(&record) {
            Ok(()) => valid.push(record),
            Err(problems) => {
                for problem in problems {
                    errors.push(format!("regions[{}].{}", i, problem));
                }
            }
        }
    }

    (valid, errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// Per-process scratch path so concurrent test runs don't collide
    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("tenet_test_{}_{}", std::process::id(), name))
    }

    fn valid_record() -> RegionRecord {
        RegionRecord {
            name: "Bethel".to_string(),
            facility_count: Some(2),
            population: Some(6000),
            avg_distance: Some(40.0),
            specialists: Some(1),
            has_transportation: Some(false),
            download_speed: Some(3.0),
            upload_speed: Some(1.0),
            internet_coverage: Some(60.0),
            reliability: Some(0.7),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_record() {
        assert!(validate_record(&valid_record()).is_ok());
        assert!(validate_record(&RegionRecord::new("Sparse")).is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let record = RegionRecord {
            name: " ".to_string(),
            avg_distance: Some(-1.0),
            internet_coverage: Some(140.0),
            reliability: Some(1.5),
            download_speed: Some(f64::INFINITY),
            ..valid_record()
        };
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.starts_with("name")));
        assert!(errors.iter().any(|e| e.starts_with("avg_distance")));
        assert!(errors.iter().any(|e| e.starts_with("internet_coverage")));
        assert!(errors.iter().any(|e| e.starts_with("reliability")));
        assert!(errors.iter().any(|e| e.starts_with("download_speed")));
    }

    #[test]
    fn test_partition_prefixes_record_index() {
        let source = FileRegionSource::new("unused.yaml");
        let bad = RegionRecord {
            reliability: Some(2.0),
            ..valid_record()
        };
        let (valid, errors) = partition_valid(&source, vec![valid_record(), bad]);
        assert_eq!(valid.len(), 1);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("regions[1].reliability"));
    }

    #[test]
    fn test_collect_yaml_file() {
        let path = temp_path("regions.yaml");
        let yaml = r#"
regions:
  - name: Bethel
    facility_count: 2
    population: 6000
    avg_distance: 40
  - name: Nome
    download_speed: 25
    upload_speed: 10
"#;
        fs::write(&path, yaml).unwrap();

        let mut source = FileRegionSource::new(&path);
        assert!(source.last_updated().is_none());
        let records = source.collect().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Bethel");
        assert_eq!(records[0].population, Some(6000));
        assert_eq!(records[1].download_speed, Some(25.0));
        assert!(source.last_updated().is_some());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_collect_json_file() {
        let path = temp_path("regions.json");
        let json =
            r#"{"regions": [{"name": "Kotzebue", "specialists": 0, "has_transportation": true}]}"#;
        fs::write(&path, json).unwrap();

        let mut source = FileRegionSource::new(&path);
        let records = source.collect().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].has_transportation, Some(true));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_collect_missing_file_errors() {
        let path = temp_path("regions_missing.yaml");
        let _ = fs::remove_file(&path);

        let mut source = FileRegionSource::new(&path);
        let err = source.collect().unwrap_err();
        assert!(err.to_string().contains("Failed to read region file"));
        assert!(source.last_updated().is_none());
    }

    #[test]
    fn test_collect_invalid_yaml_errors() {
        let path = temp_path("regions_invalid.yaml");
        fs::write(&path, "regions: [ { name: Bad, population: lots } ]").unwrap();

        let mut source = FileRegionSource::new(&path);
        let err = source.collect().unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_collect_rejects_misspelt_metric() {
        let path = temp_path("regions_typo.yaml");
        let yaml = r#"
regions:
  - name: X
    facilites: 9
    population: 1000
    has_transportation: true
"#;
        fs::write(&path, yaml).unwrap();

        let mut source = FileRegionSource::new(&path);
        let err = source.collect().unwrap_err();
        assert!(err.to_string().contains("invalid YAML"));
        assert!(format!("{:#}", err).contains("facilites"));
        assert!(source.last_updated().is_none());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_collect_json_rejects_misspelt_metric() {
        let path = temp_path("regions_typo.json");
        fs::write(&path, r#"{"regions": [{"name": "X", "reliabilty": 0.9}]}"#).unwrap();

        let mut source = FileRegionSource::new(&path);
        let err = source.collect().unwrap_err();
        assert!(format!("{:#}", err).contains("reliabilty"));

        let _ = fs::remove_file(&path);
    }
}
