use crate::domain::model::Gender;
use crate::utils::error::{Result, RosterError};
use crate::utils::validation::{validate_age, validate_ordered_bounds, Validate};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaFile {
    #[serde(default)]
    pub criteria: CriteriaSection,
}

/// The `[criteria]` table. Every key is optional; missing keys fall back to
/// the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CriteriaSection {
    pub gender: Option<Gender>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
}

impl CriteriaFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RosterError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for CriteriaFile {
    fn validate(&self) -> Result<()> {
        let section = &self.criteria;
        if let Some(min_age) = section.min_age {
            validate_age("criteria.min_age", min_age)?;
        }
        if let Some(max_age) = section.max_age {
            validate_age("criteria.max_age", max_age)?;
        }
        if let (Some(min_age), Some(max_age)) = (section.min_age, section.max_age) {
            validate_ordered_bounds("criteria.min_age..criteria.max_age", min_age, max_age)?;
        }
        Ok(())
    }
}
