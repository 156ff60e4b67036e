//! A single normalized roster entry.

use kinline_calendar::{NaiveDate, year_position};

/// A person with a validated birth date.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    id: String,
    name: String,
    birth_date: NaiveDate,
    photo: Option<String>,
    year_position: f64,
}

impl Person {
    /// Creates a person, deriving the fractional year position from
    /// `birth_date`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        photo: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth_date,
            photo,
            year_position: year_position(birth_date),
        }
    }

    /// Returns the identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Returns the photo URL, if any.
    pub fn photo(&self) -> Option<&str> {
        self.photo.as_deref()
    }

    /// Returns the birth date as a fractional year.
    pub fn year_position(&self) -> f64 {
        self.year_position
    }

    /// Returns up to two uppercase initials for an avatar placeholder.
    ///
    /// Uses the first letter of the first and last words of the name, or
    /// `"?"` when the name has no words.
    pub fn initials(&self) -> String {
        let words: Vec<&str> = self.name.split_whitespace().collect();
        let Some(first) = words.first().and_then(|w| w.chars().next()) else {
            return "?".to_string();
        };
        let mut initials = String::from(first);
        if words.len() > 1
            && let Some(last) = words.last().and_then(|w| w.chars().next())
        {
            initials.push(last);
        }
        initials.to_uppercase()
    }
}
