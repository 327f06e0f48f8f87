pub mod config;
pub mod parser;
pub mod table;
pub mod validation;

pub use config::*;
pub use parser::{parse_table, OptionScores, ParsedTable, ScoreTable, TableError, WeightVector};
pub use table::EMBEDDED_TABLE;
pub use validation::validate_matrix;
