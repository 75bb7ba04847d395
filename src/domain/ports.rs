use crate::domain::model::Person;

/// A yes/no decision over a single [`Person`].
///
/// Implemented directly by named criteria types, and by every
/// `Fn(&Person) -> bool` through the blanket impl below, so filtering code
/// only ever needs to be written against this trait.
pub trait CheckPerson {
    fn test(&self, person: &Person) -> bool;
}

impl<F> CheckPerson for F
where
    F: Fn(&Person) -> bool,
{
    fn test(&self, person: &Person) -> bool {
        (self)(person)
    }
}
