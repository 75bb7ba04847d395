use crate::core::{CheckPerson, Person, Result};
use std::io::Write;

/// People from `roster` accepted by `tester`, in roster order.
pub fn matching_persons<'a, P>(
    roster: &'a [Person],
    tester: &'a P,
) -> impl Iterator<Item = &'a Person> + 'a
where
    P: CheckPerson + ?Sized,
{
    roster.iter().filter(move |person| tester.test(person))
}

/// Writes one line per matching person to `out` and returns how many were written.
///
/// Non-matching entries are skipped without output. The only failure is an
/// I/O error from `out`.
pub fn print_persons<W, P>(out: &mut W, roster: &[Person], tester: &P) -> Result<usize>
where
    W: Write + ?Sized,
    P: CheckPerson + ?Sized,
{
    let mut printed = 0;
    for person in matching_persons(roster, tester) {
        writeln!(out, "{}", person)?;
        tracing::debug!("Matched {}", person.name());
        printed += 1;
    }

    tracing::debug!("{} of {} people matched", printed, roster.len());
    Ok(printed)
}
