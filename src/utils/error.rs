use crate::domain::fiscal_code::FiscalCodeViolation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonError {
    #[error("Invalid fiscal code '{code}': {reason}")]
    InvalidArgument {
        code: String,
        reason: FiscalCodeViolation,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PersonError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PersonError::InvalidArgument { .. })
    }

    /// Short message meant for end users rather than logs.
    pub fn user_friendly_message(&self) -> String {
        match self {
            PersonError::InvalidArgument { .. } => "Codice fiscale non valido.".to_string(),
            PersonError::IoError(e) => format!("Cannot read configuration file: {}", e),
            PersonError::ConfigError { message } => format!("Configuration error: {}", message),
            PersonError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, PersonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = PersonError::InvalidArgument {
            code: "BCD123".to_string(),
            reason: FiscalCodeViolation::WrongLength { len: 6 },
        };

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Invalid fiscal code 'BCD123': expected 16 characters, got 6"
        );
        assert_eq!(err.user_friendly_message(), "Codice fiscale non valido.");
    }

    #[test]
    fn test_config_errors_are_not_invalid_argument() {
        let err = PersonError::ConfigError {
            message: "boom".to_string(),
        };
        assert!(!err.is_invalid_argument());
    }
}
