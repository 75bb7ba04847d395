pub mod criteria_file;

#[cfg(feature = "cli")]
pub mod cli;

pub use criteria_file::{CriteriaFile, CriteriaSection};

#[cfg(feature = "cli")]
pub use cli::CliConfig;
