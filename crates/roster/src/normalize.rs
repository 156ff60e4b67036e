//! Raw JSON records to a sorted [`Roster`].

use serde_json::Value;
use tracing::debug;

use kinline_calendar::parse_birth_date;

use crate::error::RosterError;
use crate::person::Person;
use crate::roster::Roster;

/// Name given to records without one.
pub const DEFAULT_NAME: &str = "Unnamed";

/// Text reported for a record with no `birthdate` at all.
const MISSING: &str = "<missing>";

/// Validates raw roster JSON and returns the people sorted by birth date.
///
/// The input must be an array. Each element is read as a record with
/// optional `id`, `name` and `photo` fields and a required `birthdate`
/// string (`-` or `/` separated). Missing optional fields get defaults: the
/// record index as id, [`DEFAULT_NAME`] as name, no photo.
///
/// # Errors
///
/// - [`RosterError::Schema`] if `data` is not an array.
/// - [`RosterError::InvalidBirthdate`] for the first record whose
///   `birthdate` is missing or not a valid date. No roster is produced.
#[tracing::instrument(skip(data))]
pub fn normalize(data: &Value) -> Result<Roster, RosterError> {
    let records = data.as_array().ok_or(RosterError::Schema {
        found: json_type(data),
    })?;

    let people = records
        .iter()
        .enumerate()
        .map(|(index, record)| normalize_record(index, record))
        .collect::<Result<Vec<_>, _>>()?;

    let roster = Roster::from_unsorted(people);
    debug!(n_people = roster.len(), "roster normalized");
    Ok(roster)
}

fn normalize_record(index: usize, record: &Value) -> Result<Person, RosterError> {
    let birth_date = match record.get("birthdate") {
        Some(Value::String(raw)) => parse_birth_date(raw).map_err(|_| {
            RosterError::InvalidBirthdate {
                index,
                raw: raw.clone(),
            }
        })?,
        None | Some(Value::Null) => {
            return Err(RosterError::InvalidBirthdate {
                index,
                raw: MISSING.to_string(),
            });
        }
        Some(other) => {
            return Err(RosterError::InvalidBirthdate {
                index,
                raw: other.to_string(),
            });
        }
    };

    let id = text_field(record, "id").unwrap_or_else(|| index.to_string());
    let name = text_field(record, "name").unwrap_or_else(|| DEFAULT_NAME.to_string());
    let photo = record
        .get("photo")
        .filter(|v| is_truthy(v))
        .map(value_text);

    Ok(Person::new(id, name, birth_date, photo))
}

/// Returns the field as text, or `None` when it is absent or `null`.
fn text_field(record: &Value, key: &str) -> Option<String> {
    match record.get(key) {
        None | Some(Value::Null) => None,
        Some(v) => Some(value_text(v)),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON values a photo field treats as "present".
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
