use anyhow::{bail, Context, Result};
use glob::{MatchOptions, Pattern};

use super::source::{partition_valid, RegionSource};
use super::types::RegionRecord;

const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Keep only records whose name matches a glob pattern (case-insensitive).
pub fn filter_by_name(records: Vec<RegionRecord>, pattern: &str) -> Result<Vec<RegionRecord>> {
    let pattern = Pattern::new(pattern)
        .with_context(|| format!("Invalid region pattern '{}'", pattern))?;

    Ok(records
        .into_iter()
        .filter(|r| pattern.matches_with(&r.name, NAME_MATCH))
        .collect())
}

/// Narrow collected records to the ones worth assessing.
///
/// Applies the optional name pattern, then the source's validation. Returns
/// the surviving records with the problems of every skipped one. Fails when
/// nothing survives, naming the step that emptied the list.
pub fn select_regions<S: RegionSource + ?Sized>(
    source: &S,
    records: Vec<RegionRecord>,
    pattern: Option<&str>,
) -> Result<(Vec<RegionRecord>, Vec<String>)> {
    if records.is_empty() {
        bail!("No regions in file");
    }

    let records = match pattern {
        Some(p) => {
            let kept = filter_by_name(records, p)?;
            if kept.is_empty() {
                bail!("No regions match '{}'", p);
            }
            kept
        }
        None => records,
    };

    let total = records.len();
    let (valid, errors) = partition_valid(source, records);
    if valid.is_empty() {
        bail!("No valid regions ({} skipped): {}", total, errors.join("; "));
    }
    Ok((valid, errors))
}
