//! Shared input validation and date helpers.
//!
//! # Responsibility
//! - Centralize the text and date rules stores apply before a write.
//! - Keep date parsing/formatting consistent with the `dd.MM.yyyy` form
//!   used at the presentation boundary.
//!
//! # Invariants
//! - Every helper is pure; "today" is always supplied by the caller.
//! - Validation never panics on malformed input.

use once_cell::sync::Lazy;
use regex::Regex;
use time::format_description::BorrowedFormatItem;
use time::macros::{date, format_description};
use time::Date;

/// Letters in any script plus spaces, at least two characters.
static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{L} ]{2,}$").expect("valid name regex"));

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day].[month].[year]");

/// Earliest date accepted for birth dates.
pub const DATE_FLOOR: Date = date!(1900 - 01 - 01);

/// Returns whether `value` is an acceptable person name: at least two
/// characters, letters and spaces only.
pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value.trim())
}

/// Returns whether `value` lies inside the accepted `[DATE_FLOOR, today]`
/// window.
pub fn is_plausible_date(value: Date, today: Date) -> bool {
    value >= DATE_FLOOR && value <= today
}

/// Parses a `dd.MM.yyyy` date. Returns `None` when the text does not parse.
pub fn parse_date(input: &str) -> Option<Date> {
    Date::parse(input.trim(), DATE_FORMAT).ok()
}

/// Formats a date as `dd.MM.yyyy`.
pub fn format_date(value: Date) -> String {
    value
        .format(DATE_FORMAT)
        .unwrap_or_else(|_| value.to_string())
}
