pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use domain::fiscal_code::{check_fiscal_code, is_valid_fiscal_code, FiscalCodeViolation};
pub use domain::person::Person;
pub use utils::error::{PersonError, Result};
