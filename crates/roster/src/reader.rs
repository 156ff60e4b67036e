//! Loading a roster from JSON text or a file.

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::RosterError;
use crate::normalize::normalize;
use crate::roster::Roster;

/// Parses roster JSON text and normalizes it.
///
/// # Errors
///
/// Returns [`RosterError::Json`] for malformed JSON, and any error of
/// [`normalize`] otherwise.
pub fn parse_roster(text: &str) -> Result<Roster, RosterError> {
    let data: Value = serde_json::from_str(text)?;
    normalize(&data)
}

/// Reads a roster JSON file from disk and normalizes it.
///
/// The file is read fresh on every call; nothing is cached between loads.
///
/// # Errors
///
/// Returns [`RosterError::FileNotFound`] when `path` does not exist,
/// [`RosterError::Io`] for other read failures, and any error of
/// [`parse_roster`] otherwise.
pub fn read_roster(path: &Path) -> Result<Roster, RosterError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RosterError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => RosterError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;
    let roster = parse_roster(&text)?;
    info!(path = %path.display(), n_people = roster.len(), "roster loaded");
    Ok(roster)
}
