use crate::core::filter::print_persons;
use crate::core::{AgeGenderCriteria, Gender, Person, Result};
use std::io::Write;

pub const CHECK_PERSON_HEADER: &str = "Using CheckPerson Functional Interface:";
pub const PREDICATE_HEADER: &str = "Using Predicate<Person> Functional Interface:";

/// The fixed five-person roster used by the demo.
pub fn sample_roster() -> Vec<Person> {
    vec![
        Person::new("Alice", 22, Gender::Female),
        Person::new("Bob", 19, Gender::Male),
        Person::new("Charlie", 25, Gender::Male),
        Person::new("David", 30, Gender::Male),
        Person::new("Eve", 18, Gender::Female),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoSummary {
    pub roster_size: usize,
    pub check_person_matches: usize,
    pub predicate_matches: usize,
}

/// Runs the same filter twice: once with `criteria` as a named `CheckPerson`
/// value, once with an equivalent plain closure.
pub fn run_demo<W: Write + ?Sized>(
    out: &mut W,
    roster: &[Person],
    criteria: &AgeGenderCriteria,
) -> Result<DemoSummary> {
    tracing::info!(
        "Filtering {} people for {} aged {}..={}",
        roster.len(),
        criteria.gender(),
        criteria.min_age(),
        criteria.max_age()
    );

    writeln!(out, "{}", CHECK_PERSON_HEADER)?;
    let check_person_matches = print_persons(&mut *out, roster, criteria)?;

    writeln!(out)?;
    writeln!(out, "{}", PREDICATE_HEADER)?;
    let predicate = criteria.to_predicate();
    let predicate_matches = print_persons(&mut *out, roster, &predicate)?;

    out.flush()?;

    if check_person_matches != predicate_matches {
        tracing::warn!(
            "Predicate shapes disagree: {} vs {} matches",
            check_person_matches,
            predicate_matches
        );
    }

    Ok(DemoSummary {
        roster_size: roster.len(),
        check_person_matches,
        predicate_matches,
    })
}
