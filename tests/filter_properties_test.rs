use anyhow::Result;
use roster_filter::{
    matching_persons, print_persons, sample_roster, AgeGenderCriteria, CheckPerson, Gender,
    Person,
};

fn render(roster: &[Person], tester: &dyn CheckPerson) -> Result<String> {
    let mut out = Vec::new();
    print_persons(&mut out, roster, tester)?;
    Ok(String::from_utf8(out)?)
}

fn larger_roster() -> Vec<Person> {
    let mut roster = sample_roster();
    roster.extend([
        Person::new("Frank", 17, Gender::Male),
        Person::new("Grace", 25, Gender::Female),
        Person::new("Heidi", 26, Gender::Male),
        Person::new("Ivan", 18, Gender::Male),
    ]);
    roster
}

/// Output must be exactly the matching subset, in roster order
#[test]
fn test_output_is_ordered_matching_subset() -> Result<()> {
    let roster = larger_roster();
    let predicates: Vec<Box<dyn Fn(&Person) -> bool>> = vec![
        Box::new(|p: &Person| p.age() % 2 == 0),
        Box::new(|p: &Person| p.gender() == Gender::Female),
        Box::new(|p: &Person| p.name().len() > 4),
        Box::new(|p: &Person| p.age() >= 25),
    ];

    for predicate in &predicates {
        let tester = |p: &Person| predicate(p);
        let expected: String = roster
            .iter()
            .filter(|p| predicate(*p))
            .map(|p| format!("{}\n", p))
            .collect();

        assert_eq!(render(&roster, &tester)?, expected);
    }
    Ok(())
}

#[test]
fn test_empty_roster_prints_nothing() -> Result<()> {
    assert!(render(&[], &AgeGenderCriteria::default())?.is_empty());
    assert!(render(&[], &|_: &Person| true)?.is_empty());
    Ok(())
}

#[test]
fn test_always_true_reproduces_roster() -> Result<()> {
    let roster = larger_roster();
    let expected: String = roster.iter().map(|p| format!("{}\n", p)).collect();

    assert_eq!(render(&roster, &|_: &Person| true)?, expected);
    Ok(())
}

#[test]
fn test_always_false_prints_nothing() -> Result<()> {
    assert!(render(&larger_roster(), &|_: &Person| false)?.is_empty());
    Ok(())
}

#[test]
fn test_sample_roster_matches_bob_and_charlie() -> Result<()> {
    let roster = sample_roster();
    let output = render(&roster, &AgeGenderCriteria::default())?;

    assert_eq!(output, "Bob (MALE, 19 years)\nCharlie (MALE, 25 years)\n");
    // David is too old, Alice and Eve are the wrong gender
    assert!(!output.contains("David"));
    assert!(!output.contains("Alice"));
    assert!(!output.contains("Eve"));
    Ok(())
}

#[test]
fn test_named_criteria_and_closure_agree() -> Result<()> {
    let roster = larger_roster();
    let criteria = AgeGenderCriteria::default();
    let closure = |p: &Person| p.gender() == Gender::Male && p.age() >= 18 && p.age() <= 25;

    assert_eq!(render(&roster, &criteria)?, render(&roster, &closure)?);
    assert_eq!(
        render(&roster, &criteria)?,
        render(&roster, &criteria.to_predicate())?
    );
    Ok(())
}

#[test]
fn test_filtering_leaves_roster_untouched() {
    let roster = sample_roster();
    let before = roster.clone();

    let count = matching_persons(&roster, &AgeGenderCriteria::default()).count();

    assert_eq!(count, 2);
    assert_eq!(roster, before);
}
