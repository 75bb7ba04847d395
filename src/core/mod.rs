pub mod demo;
pub mod filter;

pub use crate::domain::criteria::AgeGenderCriteria;
pub use crate::domain::model::{Gender, Person};
pub use crate::domain::ports::CheckPerson;
pub use crate::utils::error::Result;
