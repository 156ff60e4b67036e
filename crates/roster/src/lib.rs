//! # kinline-roster
//!
//! Turns the family JSON data source into a validated, sorted [`Roster`].
//! Loading is all-or-nothing: one bad record rejects the whole input, so a
//! caller never renders a partial timeline.

mod error;
mod normalize;
mod person;
mod reader;
mod roster;

pub use error::RosterError;
pub use normalize::{DEFAULT_NAME, normalize};
pub use person::Person;
pub use reader::{parse_roster, read_roster};
pub use roster::Roster;
