//! Person domain model.
//!
//! # Invariants
//! - `fiscal_code` passed [`check_fiscal_code`] when the person was built.
//! - `fiscal_code` is stored uppercased and never changes afterwards.

use crate::domain::fiscal_code::check_fiscal_code;
use crate::utils::error::{PersonError, Result};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    first_name: String,
    last_name: String,
    fiscal_code: String,
}

impl Person {
    /// Builds a person after checking the fiscal code format.
    ///
    /// Names are stored as given; the code is stored uppercased.
    ///
    /// # Errors
    /// Returns [`PersonError::InvalidArgument`] when `code` fails the check.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        code: &str,
    ) -> Result<Self> {
        if let Err(reason) = check_fiscal_code(code) {
            tracing::warn!("Rejected fiscal code: {}", reason);
            return Err(PersonError::InvalidArgument {
                code: code.to_string(),
                reason,
            });
        }

        let person = Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            fiscal_code: code.to_uppercase(),
        };
        tracing::debug!("Person created");
        Ok(person)
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn fiscal_code(&self) -> &str {
        &self.fiscal_code
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    /// Whether both people share the same first name, ignoring case.
    pub fn is_same_first_name(&self, other: &Person) -> bool {
        self.first_name.to_lowercase() == other.first_name.to_lowercase()
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NOME:{} COGNOME:{} CF:{}",
            self.first_name, self.last_name, self.fiscal_code
        )
    }
}
