use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::matrix::MatrixConfig;
use crate::output::{OutputFormat, SortOrder};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Markdown table to score instead of the embedded one.
    /// A relative path is resolved against the config file's directory.
    #[serde(default)]
    pub table: Option<PathBuf>,

    #[serde(default)]
    pub matrix: Option<MatrixConfig>,

    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub sort: Option<SortOrder>,
}
