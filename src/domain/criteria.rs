use crate::domain::model::{Gender, Person};
use crate::domain::ports::CheckPerson;
use std::ops::RangeInclusive;

pub const DEFAULT_GENDER: Gender = Gender::Male;
pub const DEFAULT_MIN_AGE: u32 = 18;
pub const DEFAULT_MAX_AGE: u32 = 25;

/// Matches people of one gender whose age falls in an inclusive range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeGenderCriteria {
    gender: Gender,
    ages: RangeInclusive<u32>,
}

impl AgeGenderCriteria {
    /// An inverted range (`min_age > max_age`) is accepted and matches nobody.
    pub fn new(gender: Gender, min_age: u32, max_age: u32) -> Self {
        Self {
            gender,
            ages: min_age..=max_age,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn min_age(&self) -> u32 {
        *self.ages.start()
    }

    pub fn max_age(&self) -> u32 {
        *self.ages.end()
    }

    /// The same decision as [`CheckPerson::test`], as a free-standing closure
    /// that owns copies of the criteria values.
    pub fn to_predicate(&self) -> impl Fn(&Person) -> bool {
        let gender = self.gender;
        let ages = self.ages.clone();
        move |p: &Person| p.gender() == gender && ages.contains(&p.age())
    }
}

impl Default for AgeGenderCriteria {
    fn default() -> Self {
        Self::new(DEFAULT_GENDER, DEFAULT_MIN_AGE, DEFAULT_MAX_AGE)
    }
}

impl CheckPerson for AgeGenderCriteria {
    fn test(&self, person: &Person) -> bool {
        person.gender() == self.gender && self.ages.contains(&person.age())
    }
}
