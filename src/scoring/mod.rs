pub mod engine;

pub use engine::{
    calculate_breakdown, calculate_totals, Contribution, OptionBreakdown, OptionTotal,
    ScoringError,
};
