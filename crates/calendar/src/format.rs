//! Date formatting for banner and card text.

use chrono::NaiveDate;

/// Formats a date as `YYYY-MM-DD`.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Formats a date for a timeline card, e.g. `"May 01, 1990 · 1990"`.
///
/// The birth year is repeated after the separator so the year stays legible
/// when a renderer truncates the first part.
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y · %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(987, 3, 4).unwrap();
        assert_eq!(format_iso(date), "0987-03-04");
    }

    #[test]
    fn card_date() {
        let date = NaiveDate::from_ymd_opt(1990, 5, 1).unwrap();
        assert_eq!(format_card_date(date), "May 01, 1990 · 1990");
    }
}
