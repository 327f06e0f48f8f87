pub mod formatter;

pub use formatter::{
    format_breakdown, format_json, format_row_summary, format_text, format_totals, format_tsv,
    should_color_stderr, should_use_colors, sort_totals, OutputFormat, SortOrder,
};
