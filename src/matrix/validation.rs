use std::collections::HashSet;

use super::config::MatrixConfig;

/// Validate the table layout at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_matrix(config: &MatrixConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(ref options) = config.options {
        if options.is_empty() {
            errors.push("matrix.options: must list at least one option".to_string());
        }

        let mut seen = HashSet::new();
        for (i, name) in options.iter().enumerate() {
            if name.trim().is_empty() {
                errors.push(format!("matrix.options[{}]: name must not be blank", i));
            } else if !seen.insert(name.trim()) {
                errors.push(format!("matrix.options[{}]: duplicate option '{}'", i, name));
            }
            if name.contains('|') {
                errors.push(format!(
                    "matrix.options[{}]: '{}' must not contain the column delimiter '|'",
                    i, name
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
