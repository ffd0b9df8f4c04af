use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{
    DesertAssessment, DesertClassification, FeasibilityClassification, RegionAssessment,
    SubScore, TelehealthAssessment,
};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Scores are shown with two decimals ("0.73")
pub fn format_score(score: f64) -> String {
    format!("{:.2}", score)
}

fn paint_desert(class: DesertClassification, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match class {
        DesertClassification::Severe => text.red().bold().to_string(),
        DesertClassification::Moderate => text.red().to_string(),
        DesertClassification::Limited => text.yellow().to_string(),
        DesertClassification::Adequate => text.green().to_string(),
    }
}

fn paint_feasibility(class: FeasibilityClassification, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match class {
        FeasibilityClassification::HighlyFeasible => text.green().bold().to_string(),
        FeasibilityClassification::Feasible => text.green().to_string(),
        FeasibilityClassification::MarginallyFeasible => text.yellow().to_string(),
        FeasibilityClassification::NotFeasible => text.red().to_string(),
    }
}

fn format_sub_scores(breakdown: &[SubScore], use_colors: bool) -> String {
    breakdown
        .iter()
        .map(|s| {
            let label = format!("{:<24}", s.label);
            let line = format!(
                "    {} {:>6} x {:.2} = {:>6}  ({})",
                label,
                format_score(s.value),
                s.weight,
                format_score(s.contribution),
                s.detail
            );
            if use_colors {
                line.dimmed().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single desert assessment; `verbose` adds the sub-score breakdown
pub fn format_desert(result: &DesertAssessment, verbose: bool, use_colors: bool) -> String {
    let headline = format!(
        "Desert score: {}  {}",
        format_score(result.score),
        paint_desert(result.classification, result.classification.label(), use_colors)
    );
    if verbose {
        format!("{}\n{}", headline, format_sub_scores(&result.breakdown, use_colors))
    } else {
        headline
    }
}

/// Format a single telehealth assessment; `verbose` adds the sub-score breakdown
pub fn format_telehealth(result: &TelehealthAssessment, verbose: bool, use_colors: bool) -> String {
    let viable = if result.viable { "viable" } else { "not viable" };
    let headline = format!(
        "Feasibility score: {}  {} ({})",
        format_score(result.score),
        paint_feasibility(result.classification, result.classification.label(), use_colors),
        viable
    );
    if verbose {
        format!("{}\n{}", headline, format_sub_scores(&result.breakdown, use_colors))
    } else {
        headline
    }
}

/// Multi-line detail for one region (verbose table mode)
pub fn format_region_detail(region: &RegionAssessment, use_colors: bool) -> String {
    let name = if use_colors {
        region.name.bold().to_string()
    } else {
        region.name.clone()
    };
    format!(
        "{}\n  {}\n  {}",
        name,
        format_desert(&region.desert, true, use_colors).replace('\n', "\n  "),
        format_telehealth(&region.telehealth, true, use_colors).replace('\n', "\n  ")
    )
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a region name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

// Widest labels: "Adequate Healthcare Access" and "Marginally Feasible"
const DESERT_LABEL_WIDTH: usize = 26;
const FEASIBILITY_LABEL_WIDTH: usize = 19;

/// Format assessed regions as a ranked table.
/// Columns: index, desert score + class, feasibility score + class, viability, name.
/// No headers.
pub fn format_assessment_table(regions: &[RegionAssessment], use_colors: bool) -> String {
    if regions.is_empty() {
        return "No regions to assess.".to_string();
    }

    let term_width = get_terminal_width();
    let separator = "  ";
    // index(3) + space + score(4) + space + label + sep
    //   + score(4) + space + label + sep + flag(1) + sep
    let fixed_width = 3
        + 1
        + 4
        + 1
        + DESERT_LABEL_WIDTH
        + separator.len()
        + 4
        + 1
        + FEASIBILITY_LABEL_WIDTH
        + separator.len()
        + 1
        + separator.len();

    regions
        .iter()
        .enumerate()
        .map(|(idx, region)| {
            let index_str = format!("{:>2}.", idx + 1);

            let desert_label = format!(
                "{:<width$}",
                region.desert.classification.label(),
                width = DESERT_LABEL_WIDTH
            );
            let feasibility_label = format!(
                "{:<width$}",
                region.telehealth.classification.label(),
                width = FEASIBILITY_LABEL_WIDTH
            );
            let viable_flag = if region.telehealth.viable { "+" } else { "-" };

            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_name(&region.name, width - fixed_width)
                }
                Some(_) => truncate_name(&region.name, 20),
                None => region.name.clone(),
            };

            let index_str = if use_colors {
                index_str.dimmed().to_string()
            } else {
                index_str
            };

            format!(
                "{} {} {}{}{} {}{}{}{}{}",
                index_str,
                format_score(region.desert.score),
                paint_desert(region.desert.classification, &desert_label, use_colors),
                separator,
                format_score(region.telehealth.score),
                paint_feasibility(region.telehealth.classification, &feasibility_label, use_colors),
                separator,
                viable_flag,
                separator,
                name
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format assessed regions as tab-separated values for scripting
/// Columns: name, desert score, desert class, feasibility score, feasibility class, viable
pub fn format_tsv(regions: &[RegionAssessment]) -> String {
    regions
        .iter()
        .map(|r| {
            format!(
                "{}\t{:.4}\t{}\t{:.4}\t{}\t{}",
                r.name,
                r.desert.score,
                r.desert.classification,
                r.telehealth.score,
                r.telehealth.classification,
                r.telehealth.viable
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Pretty-printed JSON of any assessment value
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize assessment as JSON")
}
