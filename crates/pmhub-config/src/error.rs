//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("Invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}


#[cfg(test)]
mod tests {
    use super::ConfigError;

    #[test]
    fn invalid_value_names_field_and_reason() {
        let err = ConfigError::InvalidValue {
            field: "content.timeout_secs".into(),
            reason: "must be greater than zero".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'content.timeout_secs': must be greater than zero"
        );
        // Exhaustive: every variant is produced by loading or validation.
        match err {
            ConfigError::Figment(_) | ConfigError::InvalidValue { .. } => {}
        }
    }
}
