//! Sorted collection of people.

use kinline_calendar::NaiveDate;

use crate::person::Person;

/// People sorted ascending by birth date, ties in input order.
///
/// Only [`normalize`](crate::normalize) builds a `Roster`, so the ordering
/// always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    /// Sorts `people` by birth date (stable) and wraps them.
    pub(crate) fn from_unsorted(mut people: Vec<Person>) -> Self {
        people.sort_by_key(Person::birth_date);
        Self { people }
    }

    /// Returns the people in timeline order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the person at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Person> {
        self.people.get(index)
    }

    /// Returns the number of people.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns `true` when the roster has no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterates over the people in timeline order.
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// Returns every fractional year position, in timeline order.
    pub fn year_positions(&self) -> Vec<f64> {
        self.people.iter().map(Person::year_position).collect()
    }

    /// Returns every birth date, in timeline order.
    pub fn birth_dates(&self) -> Vec<NaiveDate> {
        self.people.iter().map(Person::birth_date).collect()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Person;
    type IntoIter = std::slice::Iter<'a, Person>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn sorts_by_birth_date_keeping_ties_stable() {
        let roster = Roster::from_unsorted(vec![
            Person::new("a", "A", ymd(1992, 1, 1), None),
            Person::new("b", "B", ymd(1990, 5, 1), None),
            Person::new("c", "C", ymd(1990, 5, 1), None),
        ]);
        let ids: Vec<&str> = roster.iter().map(Person::id).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn accessors() {
        let roster = Roster::from_unsorted(vec![Person::new("a", "A", ymd(2000, 1, 1), None)]);
        assert_eq!(roster.len(), 1);
        assert!(!roster.is_empty());
        assert_eq!(roster.get(0).map(Person::name), Some("A"));
        assert!(roster.get(1).is_none());
        assert_eq!(roster.year_positions(), vec![2000.0]);
        assert_eq!(roster.birth_dates(), vec![ymd(2000, 1, 1)]);
    }

    #[test]
    fn default_is_empty() {
        assert!(Roster::default().is_empty());
    }
}
