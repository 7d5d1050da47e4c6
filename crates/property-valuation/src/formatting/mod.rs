//! Arabic-localized display formatting for valuation figures.
//!
//! All functions are pure: the same input always renders to the same string, so every
//! surface that shows a valuation (HTTP clients, CLI output, exports) agrees on rounding,
//! missing-value handling, and magnitude thresholds.

pub mod dates;
pub mod indicators;
pub mod numbers;
pub mod numerals;

pub use dates::{
    format_date, format_date_str, format_month_year, format_month_year_str, parse_display_date,
};
pub use indicators::{
    color_for, format_yoy_change, ColorCategory, ColorToken, TrendIcon, YearOverYearChange,
};
pub use numbers::{
    format_confidence, format_currency, format_currency_in, format_days, format_number,
    format_percentage, format_price_per_meter, format_price_range, format_rent_per_meter,
    format_transaction_count, format_volume_billions, DEFAULT_CURRENCY, DEFAULT_PERCENT_DECIMALS,
    PLACEHOLDER,
};
pub use numerals::to_arabic_numerals;

/// Input the formatters cannot render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("'{value}' is not a valid date (expected YYYY-MM-DD or RFC 3339)")]
    InvalidDate { value: String },
}
