//! Article field validation
//!
//! Titles are the identity key of an article and the source of its section
//! label, so they are checked here before anything reaches the index.
//! Edited timestamps arrive from seed data as ISO-8601 strings.

use crate::{Result, SimplepediaError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Compute the section label for a title
///
/// The label is the first character of the title, uppercased. A character
/// whose uppercase form is several characters (`ß` becomes `SS`) yields the
/// whole uppercase string.
///
/// # Examples
///
/// ```
/// use simplepedia::validation::section_label;
///
/// assert_eq!(section_label("dalek").unwrap(), "D");
/// assert_eq!(section_label("Éclair").unwrap(), "É");
/// assert!(section_label("").is_err());
/// ```
pub fn section_label(title: &str) -> Result<String> {
    let first = title.chars().next().ok_or_else(|| {
        SimplepediaError::InvalidArticle("title must not be empty".to_string())
    })?;
    Ok(first.to_uppercase().collect())
}

/// Validates an article title before it is admitted to the store
///
/// Rejects empty titles and titles made only of whitespace.
///
/// # Examples
///
/// ```
/// use simplepedia::validation::validate_title;
///
/// assert!(validate_title("Alpha Centauri").is_ok());
/// assert!(validate_title("").is_err());
/// assert!(validate_title("   ").is_err());
/// ```
pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(SimplepediaError::InvalidArticle(
            "title must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Parses an ISO-8601 edited timestamp into UTC
///
/// Accepted forms:
/// - RFC 3339 with offset: `2016-12-10T14:54:40.000Z`, `2017-05-08T02:00:00+02:00`
/// - Date-time without offset, read as UTC: `2017-05-08T00:00:00`
/// - Bare date, midnight UTC: `2017-05-08`
///
/// # Examples
///
/// ```
/// use simplepedia::validation::parse_edited;
/// use chrono::{Datelike, Timelike};
///
/// let edited = parse_edited("2016-12-10T14:54:40.000Z").unwrap();
/// assert_eq!(edited.year(), 2016);
/// assert_eq!(edited.hour(), 14);
///
/// let edited = parse_edited("2017-05-08").unwrap();
/// assert_eq!(edited.day(), 8);
/// assert_eq!(edited.hour(), 0);
/// ```
pub fn parse_edited(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(SimplepediaError::InvalidTimestamp(format!(
        "{} (expected ISO-8601 date or date-time)",
        value
    )))
}
