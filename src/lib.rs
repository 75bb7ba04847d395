pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    demo::{run_demo, sample_roster, DemoSummary},
    filter::{matching_persons, print_persons},
};
pub use domain::{
    criteria::AgeGenderCriteria,
    model::{Gender, Person},
    ports::CheckPerson,
};
pub use utils::error::{Result, RosterError};
