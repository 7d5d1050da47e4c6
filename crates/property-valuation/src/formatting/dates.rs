use chrono::{DateTime, Datelike, NaiveDate};

use super::numerals::to_arabic_numerals;
use super::FormatError;

/// Gregorian month names as used in Arabic-language listings.
const MONTH_NAMES: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

fn month_name(date: &impl Datelike) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// `15 مارس 2024` with Arabic-Indic digits.
pub fn format_date(date: NaiveDate) -> String {
    let text = format!("{} {} {}", date.day(), month_name(&date), date.year());
    to_arabic_numerals(&text)
}

/// `مارس 2024` with Arabic-Indic digits.
pub fn format_month_year(date: NaiveDate) -> String {
    let text = format!("{} {}", month_name(&date), date.year());
    to_arabic_numerals(&text)
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp; the calendar date of the timestamp's
/// own offset is used.
pub fn parse_display_date(raw: &str) -> Result<NaiveDate, FormatError> {
    let trimmed = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| FormatError::InvalidDate {
            value: raw.to_string(),
        })
}

pub fn format_date_str(raw: &str) -> Result<String, FormatError> {
    parse_display_date(raw).map(format_date)
}

pub fn format_month_year_str(raw: &str) -> Result<String, FormatError> {
    parse_display_date(raw).map(format_month_year)
}
