use std::io::IsTerminal;

use anyhow::{Context, Result};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::matrix::ParsedTable;
use crate::scoring::{OptionBreakdown, OptionTotal};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "<option>: <total>" per line
    #[default]
    Text,
    /// Tab-separated option and total, no header
    Tsv,
    /// JSON array of {option, total}
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Column order of the table
    #[default]
    Table,
    /// Highest total first, ties in column order
    Score,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Check if stderr is a TTY (verbose diagnostics go there)
pub fn should_color_stderr() -> bool {
    std::io::stderr().is_terminal()
}

/// Reorder totals in place. The sort is stable so ties keep column order.
pub fn sort_totals(totals: &mut [OptionTotal], order: SortOrder) {
    if order == SortOrder::Score {
        totals.sort_by(|a, b| b.total.cmp(&a.total));
    }
}

/// Render totals in the requested format.
pub fn format_totals(totals: &[OptionTotal], format: OutputFormat, use_colors: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format_text(totals, use_colors)),
        OutputFormat::Tsv => Ok(format_tsv(totals)),
        OutputFormat::Json => format_json(totals),
    }
}

/// Format: "{option}: {total}", one option per line
pub fn format_text(totals: &[OptionTotal], use_colors: bool) -> String {
    totals
        .iter()
        .map(|t| {
            if use_colors {
                format!("{}: {}", t.option.cyan(), t.total.bold())
            } else {
                format!("{}: {}", t.option, t.total)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_tsv(totals: &[OptionTotal]) -> String {
    totals
        .iter()
        .map(|t| format!("{}\t{}", t.option, t.total))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_json(totals: &[OptionTotal]) -> Result<String> {
    serde_json::to_string_pretty(totals).context("Failed to serialize totals as JSON")
}

/// Multi-line per-criterion breakdown (for verbose mode)
pub fn format_breakdown(breakdown: &[OptionBreakdown], use_colors: bool) -> String {
    breakdown
        .iter()
        .map(|option| {
            let header = if use_colors {
                format!("{} (total {})", option.option.bold(), option.total)
            } else {
                format!("{} (total {})", option.option, option.total)
            };

            let lines = option.contributions.iter().map(|c| {
                let value = match c.product {
                    Some(p) => format!("{} x {} = {}", show(c.score), show(c.weight), p),
                    None => format!("{} x {} -> dropped", show(c.score), show(c.weight)),
                };
                if use_colors && c.product.is_none() {
                    format!("  {}: {}", c.criterion, value.red())
                } else {
                    format!("  {}: {}", c.criterion, value)
                }
            });

            std::iter::once(header)
                .chain(lines)
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One-line account of how many rows were used, skipped and malformed.
pub fn format_row_summary(parsed: &ParsedTable) -> String {
    format!(
        "{} criteria scored, {} lines skipped, {} malformed cells",
        parsed.criteria.len(),
        parsed.skipped.len(),
        parsed.failures.len()
    )
}

fn show(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "?".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{parse_table, MatrixConfig};
    use crate::scoring::{calculate_breakdown, Contribution};

    fn sample_totals() -> Vec<OptionTotal> {
        vec![
            OptionTotal { option: "OPA/Gatekeeper".to_string(), total: 104 },
            OptionTotal { option: "Kyverno".to_string(), total: 100 },
            OptionTotal { option: "Kubewarden".to_string(), total: 118 },
            OptionTotal { option: "JsPolicy".to_string(), total: 105 },
        ]
    }

    #[test]
    fn test_format_text() {
        let result = format_text(&sample_totals(), false);
        assert_eq!(
            result,
            "OPA/Gatekeeper: 104\nKyverno: 100\nKubewarden: 118\nJsPolicy: 105"
        );
    }

    #[test]
    fn test_format_text_empty() {
        assert_eq!(format_text(&[], false), "");
    }

    #[test]
    fn test_format_tsv() {
        let result = format_tsv(&sample_totals()[..2]);
        assert_eq!(result, "OPA/Gatekeeper\t104\nKyverno\t100");
    }

    #[test]
    fn test_format_json() {
        let result = format_json(&sample_totals()[..1]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&result).unwrap();
        assert_eq!(value[0]["option"], "OPA/Gatekeeper");
        assert_eq!(value[0]["total"], 104);
    }

    #[test]
    fn test_format_totals_dispatch() {
        let totals = sample_totals();
        assert_eq!(
            format_totals(&totals, OutputFormat::Text, false).unwrap(),
            format_text(&totals, false)
        );
        assert_eq!(
            format_totals(&totals, OutputFormat::Tsv, false).unwrap(),
            format_tsv(&totals)
        );
    }

    #[test]
    fn test_sort_by_score_descending() {
        let mut totals = sample_totals();
        sort_totals(&mut totals, SortOrder::Score);
        let names: Vec<&str> = totals.iter().map(|t| t.option.as_str()).collect();
        assert_eq!(names, vec!["Kubewarden", "JsPolicy", "OPA/Gatekeeper", "Kyverno"]);
    }

    #[test]
    fn test_sort_ties_keep_table_order() {
        let mut totals = vec![
            OptionTotal { option: "A".to_string(), total: 5 },
            OptionTotal { option: "B".to_string(), total: 7 },
            OptionTotal { option: "C".to_string(), total: 5 },
        ];
        sort_totals(&mut totals, SortOrder::Score);
        let names: Vec<&str> = totals.iter().map(|t| t.option.as_str()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_sort_table_order_untouched() {
        let mut totals = sample_totals();
        sort_totals(&mut totals, SortOrder::Table);
        assert_eq!(totals, sample_totals());
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = vec![OptionBreakdown {
            option: "Kyverno".to_string(),
            contributions: vec![
                Contribution {
                    criterion: "Scalability".to_string(),
                    score: Some(2),
                    weight: Some(3),
                    product: Some(6),
                },
                Contribution {
                    criterion: "Cost".to_string(),
                    score: None,
                    weight: Some(1),
                    product: None,
                },
            ],
            total: 6,
        }];
        let result = format_breakdown(&breakdown, false);
        assert_eq!(
            result,
            "Kyverno (total 6)\n  Scalability: 2 x 3 = 6\n  Cost: ? x 1 -> dropped"
        );
    }

    #[test]
    fn test_format_breakdown_colored() {
        let breakdown = vec![OptionBreakdown {
            option: "Kyverno".to_string(),
            contributions: vec![Contribution {
                criterion: "Cost".to_string(),
                score: None,
                weight: Some(1),
                product: None,
            }],
            total: 0,
        }];
        let plain = format_breakdown(&breakdown, false);
        let colored = format_breakdown(&breakdown, true);
        assert!(!plain.contains('\x1b'));
        assert!(colored.contains("\x1b["));
        assert!(colored.contains("Kyverno"));
        assert!(colored.contains("? x 1 -> dropped"));
    }

    #[test]
    fn test_format_row_summary() {
        let text = "\nh\ns\n| Row | 1 | x | 3 | 4 | 5 |\n| Short | 1 |\n";
        let parsed = parse_table(text, &MatrixConfig::default());
        assert_eq!(
            format_row_summary(&parsed),
            "1 criteria scored, 1 lines skipped, 1 malformed cells"
        );
        assert!(calculate_breakdown(&parsed).is_ok());
    }

    #[test]
    fn test_output_format_from_yaml() {
        let format: OutputFormat = serde_saphyr::from_str("json").unwrap();
        assert_eq!(format, OutputFormat::Json);
        let order: SortOrder = serde_saphyr::from_str("score").unwrap();
        assert_eq!(order, SortOrder::Score);
    }
}
