use serde::{Deserialize, Serialize};

/// Column order of the options in the embedded table.
pub const DEFAULT_OPTIONS: [&str; 4] = ["OPA/Gatekeeper", "Kyverno", "Kubewarden", "JsPolicy"];

/// Lines skipped before data rows: blank line, column headers, separator.
pub const DEFAULT_HEADER_ROWS: usize = 3;

/// Layout of the decision table.
///
/// Each data row holds a label cell, one score cell per option (in the order
/// listed here) and a trailing weight cell.
///
/// Example YAML:
/// ```yaml
/// matrix:
///   header_rows: 3
///   options: [OPA/Gatekeeper, Kyverno, Kubewarden, JsPolicy]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    /// Number of leading lines skipped without inspection (default: 3)
    #[serde(default)]
    pub header_rows: Option<usize>,

    /// Option names in column order (default: the four policy engines)
    #[serde(default)]
    pub options: Option<Vec<String>>,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            header_rows: Some(DEFAULT_HEADER_ROWS),
            options: Some(DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect()),
        }
    }
}

impl MatrixConfig {
    pub fn header_rows(&self) -> usize {
        self.header_rows.unwrap_or(DEFAULT_HEADER_ROWS)
    }

    pub fn option_names(&self) -> Vec<String> {
        match &self.options {
            Some(options) => options.clone(),
            None => DEFAULT_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Cells a data row must split into: label, one per option, weight.
    pub fn expected_cells(&self) -> usize {
        self.option_names().len() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matrix_config() {
        let config = MatrixConfig::default();
        assert_eq!(config.header_rows(), 3);
        assert_eq!(
            config.option_names(),
            vec!["OPA/Gatekeeper", "Kyverno", "Kubewarden", "JsPolicy"]
        );
        assert_eq!(config.expected_cells(), 6);
    }

    #[test]
    fn test_empty_matrix_config_falls_back() {
        let config: MatrixConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.header_rows.is_none());
        assert!(config.options.is_none());
        assert_eq!(config.header_rows(), 3);
        assert_eq!(config.expected_cells(), 6);
    }

    #[test]
    fn test_custom_options_parse() {
        let yaml = r#"
header_rows: 2
options:
  - Alpha
  - Beta
"#;
        let config: MatrixConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.header_rows(), 2);
        assert_eq!(config.option_names(), vec!["Alpha", "Beta"]);
        assert_eq!(config.expected_cells(), 4);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "columns: 4";
        let result: Result<MatrixConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_matrix_config_serde_roundtrip() {
        let config = MatrixConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: MatrixConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }
}
