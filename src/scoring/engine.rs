use serde::Serialize;
use thiserror::Error;

use crate::matrix::{OptionScores, ParsedTable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("option '{option}' has {scores} scores but there are {weights} weights")]
    LengthMismatch {
        option: String,
        scores: usize,
        weights: usize,
    },

    #[error("total for option '{option}' overflows a 64-bit integer")]
    Overflow { option: String },
}

/// Weighted total for one option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionTotal {
    pub option: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub criterion: String, // e.g. "Scalability"
    pub score: Option<i64>,
    pub weight: Option<i64>,
    pub product: Option<i64>, // None when either cell was dropped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionBreakdown {
    pub option: String,
    pub contributions: Vec<Contribution>,
    pub total: i64,
}

/// Sum `score * weight` per option, in option order.
///
/// Slots left empty by a malformed cell contribute nothing. Fails fast when
/// an option's score count differs from the weight count.
pub fn calculate_totals(
    scores: &[OptionScores],
    weights: &[Option<i64>],
) -> Result<Vec<OptionTotal>, ScoringError> {
    scores
        .iter()
        .map(|option| {
            check_lengths(option, weights)?;
            let total = option
                .scores
                .iter()
                .zip(weights)
                .filter_map(|(score, weight)| product(*score, *weight))
                .try_fold(0i64, |acc, p| p.and_then(|p| acc.checked_add(p)))
                .ok_or_else(|| ScoringError::Overflow {
                    option: option.name.clone(),
                })?;
            Ok(OptionTotal {
                option: option.name.clone(),
                total,
            })
        })
        .collect()
}

/// Per-criterion contributions for every option, for verbose output.
pub fn calculate_breakdown(parsed: &ParsedTable) -> Result<Vec<OptionBreakdown>, ScoringError> {
    let totals = calculate_totals(&parsed.scores, &parsed.weights)?;

    Ok(parsed
        .scores
        .iter()
        .zip(totals)
        .map(|(option, total)| {
            let contributions = option
                .scores
                .iter()
                .zip(&parsed.weights)
                .enumerate()
                .map(|(i, (score, weight))| Contribution {
                    criterion: parsed.criteria.get(i).cloned().unwrap_or_default(),
                    score: *score,
                    weight: *weight,
                    product: product(*score, *weight).flatten(),
                })
                .collect();
            OptionBreakdown {
                option: option.name.clone(),
                contributions,
                total: total.total,
            }
        })
        .collect())
}

fn check_lengths(option: &OptionScores, weights: &[Option<i64>]) -> Result<(), ScoringError> {
    if option.scores.len() != weights.len() {
        return Err(ScoringError::LengthMismatch {
            option: option.name.clone(),
            scores: option.scores.len(),
            weights: weights.len(),
        });
    }
    Ok(())
}

/// Outer None: a cell was dropped. Inner None: the multiplication overflowed.
fn product(score: Option<i64>, weight: Option<i64>) -> Option<Option<i64>> {
    match (score, weight) {
        (Some(s), Some(w)) => Some(s.checked_mul(w)),
        _ => None,
    }
}
