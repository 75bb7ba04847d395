use crate::config::criteria_file::CriteriaFile;
use crate::domain::criteria::{
    AgeGenderCriteria, DEFAULT_GENDER, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE,
};
use crate::domain::model::Gender;
use crate::utils::error::Result;
use crate::utils::validation::{validate_age, validate_ordered_bounds, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "roster-filter")]
#[command(about = "Filter a fixed roster of people with a predicate and print the matches")]
pub struct CliConfig {
    /// Gender to match (male or female) [default: MALE]
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Youngest matching age, inclusive [default: 18]
    #[arg(long)]
    pub min_age: Option<u32>,

    /// Oldest matching age, inclusive [default: 25]
    #[arg(long)]
    pub max_age: Option<u32>,

    /// TOML file with a [criteria] table; flags given here take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges command-line flags over the optional config file and the
    /// built-in defaults, then validates the result. File values replaced by
    /// a flag are never checked.
    pub fn criteria(&self) -> Result<AgeGenderCriteria> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading criteria from {}", path.display());
                CriteriaFile::from_file(path)?
            }
            None => CriteriaFile::default(),
        };

        let gender = self
            .gender
            .or(file.criteria.gender)
            .unwrap_or(DEFAULT_GENDER);
        let min_age = self
            .min_age
            .or(file.criteria.min_age)
            .unwrap_or(DEFAULT_MIN_AGE);
        let max_age = self
            .max_age
            .or(file.criteria.max_age)
            .unwrap_or(DEFAULT_MAX_AGE);

        validate_age("min_age", min_age)?;
        validate_age("max_age", max_age)?;
        validate_ordered_bounds("min_age..max_age", min_age, max_age)?;

        Ok(AgeGenderCriteria::new(gender, min_age, max_age))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        self.criteria().map(|_| ())
    }
}
