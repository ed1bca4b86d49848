use crate::utils::error::{PersonError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional settings file for the `person-cf` binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub logging: Option<LoggingConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: Option<bool>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print names uppercased in CLI output. The stored names are untouched.
    pub uppercase_names: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PersonError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PersonError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    pub fn log_filter(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.filter.as_deref())
    }

    pub fn uppercase_names(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.uppercase_names)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(filter) = self.log_filter() {
            if let Err(e) = tracing_subscriber::EnvFilter::try_new(filter) {
                return Err(PersonError::InvalidConfigValueError {
                    field: "logging.filter".to_string(),
                    value: filter.to_string(),
                    reason: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[logging]
verbose = true
filter = "person_cf=trace"

[display]
uppercase_names = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.verbose());
        assert_eq!(config.log_filter(), Some("person_cf=trace"));
        assert!(config.uppercase_names());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.verbose());
        assert!(config.log_filter().is_none());
        assert!(!config.uppercase_names());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PERSON_CF_TEST_FILTER", "person_cf=warn");

        let toml_content = r#"
[logging]
filter = "${PERSON_CF_TEST_FILTER}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_filter(), Some("person_cf=warn"));

        std::env::remove_var("PERSON_CF_TEST_FILTER");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[logging\nverbose = ").unwrap_err();
        assert!(matches!(err, PersonError::ConfigError { .. }));
    }

    #[test]
    fn test_invalid_filter_fails_validation() {
        let toml_content = r#"
[logging]
filter = "person_cf=notalevel"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nuppercase_names = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert!(config.uppercase_names());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/person.toml").unwrap_err();
        assert!(matches!(err, PersonError::IoError(_)));
    }
}
