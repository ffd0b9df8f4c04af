pub mod formatter;

pub use formatter::{
    format_assessment_table, format_desert, format_json, format_region_detail, format_score,
    format_telehealth, format_tsv, should_use_colors,
};
