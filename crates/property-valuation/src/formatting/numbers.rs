//! Number, currency, percentage, and magnitude rendering.
//!
//! Every renderer groups with `,`, uses `.` as the decimal point, and rounds half away
//! from zero before the optional Arabic-Indic digit substitution.

use super::numerals::localize_digits;

/// Shown in place of a missing or non-finite value.
pub const PLACEHOLDER: &str = "-";
pub const DEFAULT_CURRENCY: &str = "ريال";
pub const PRICE_PER_METER_UNIT: &str = "ريال/م²";
pub const RENT_PER_METER_UNIT: &str = "ريال/م²/شهر";
pub const DAY_UNIT: &str = "يوم";
pub const THOUSAND_SUFFIX: &str = "ألف";
pub const MILLION_SUFFIX: &str = "مليون";
pub const BILLION_SUFFIX: &str = "مليار";
pub const DEFAULT_PERCENT_DECIMALS: usize = 1;

const MAX_FRACTION_DIGITS: usize = 3;
const PERCENT_SUFFIX: &str = "٪";

/// Round half away from zero at `places` decimals; negative zero collapses to zero.
pub(crate) fn round_half_away(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    let scaled = (value * factor).round() / factor;
    let rounded = if scaled.is_finite() { scaled } else { value };
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Fixed-point rendering with exactly `places` decimals.
pub(crate) fn to_fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, round_half_away(value, places))
}

fn group_thousands(value: f64) -> String {
    let text = to_fixed(value, MAX_FRACTION_DIGITS);
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(sign.len() + integer.len() * 4 / 3 + 4);
    grouped.push_str(sign);
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Thousands-grouped rendering, or [`PLACEHOLDER`] when the value is absent.
pub fn format_number(value: impl Into<Option<f64>>, use_arabic: bool) -> String {
    match value.into() {
        Some(value) if value.is_finite() => localize_digits(group_thousands(value), use_arabic),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_currency(amount: impl Into<Option<f64>>, use_arabic: bool) -> String {
    format_currency_in(amount, DEFAULT_CURRENCY, use_arabic)
}

/// The currency label is appended verbatim.
pub fn format_currency_in(
    amount: impl Into<Option<f64>>,
    currency: &str,
    use_arabic: bool,
) -> String {
    format!("{} {}", format_number(amount, use_arabic), currency)
}

/// Render a fraction (`0.05`) as a percentage (`5.0 ٪`) with `decimals` places.
///
/// The suffix is a literal; `use_arabic` only selects the digits.
pub fn format_percentage(
    value: impl Into<Option<f64>>,
    decimals: usize,
    use_arabic: bool,
) -> String {
    match value.into() {
        Some(value) if value.is_finite() => {
            let text = to_fixed(value * 100.0, decimals);
            format!("{} {}", localize_digits(text, use_arabic), PERCENT_SUFFIX)
        }
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn format_price_per_meter(price: impl Into<Option<f64>>, use_arabic: bool) -> String {
    format!("{} {}", format_number(price, use_arabic), PRICE_PER_METER_UNIT)
}

pub fn format_rent_per_meter(rent: impl Into<Option<f64>>, use_arabic: bool) -> String {
    format!("{} {}", format_number(rent, use_arabic), RENT_PER_METER_UNIT)
}

/// The unit word does not change with the count.
pub fn format_days(days: i64, use_arabic: bool) -> String {
    format!("{} {}", format_number(days as f64, use_arabic), DAY_UNIT)
}

pub fn format_confidence(confidence: impl Into<Option<f64>>, use_arabic: bool) -> String {
    format_percentage(confidence, 0, use_arabic)
}

/// Bounds are rendered as given; `min > max` is not rejected.
pub fn format_price_range(
    min: impl Into<Option<f64>>,
    max: impl Into<Option<f64>>,
    use_arabic: bool,
) -> String {
    format!(
        "{} - {} {}",
        format_number(min, use_arabic),
        format_number(max, use_arabic),
        DEFAULT_CURRENCY
    )
}

/// Abbreviate large counts: `1,000,000` and up in millions, `1,000` and up in thousands.
pub fn format_transaction_count(count: u64, use_arabic: bool) -> String {
    let value = count as f64;
    let text = if count >= 1_000_000 {
        format!("{} {}", to_fixed(value / 1_000_000.0, 1), MILLION_SUFFIX)
    } else if count >= 1_000 {
        format!("{} {}", to_fixed(value / 1_000.0, 1), THOUSAND_SUFFIX)
    } else {
        return format_number(value, use_arabic);
    };
    localize_digits(text, use_arabic)
}

/// `volume` is already expressed in billions.
pub fn format_volume_billions(volume: impl Into<Option<f64>>, use_arabic: bool) -> String {
    format!(
        "{} {} {}",
        format_number(volume, use_arabic),
        BILLION_SUFFIX,
        DEFAULT_CURRENCY
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_numbers_render_placeholder() {
        assert_eq!(format_number(None, true), "-");
        assert_eq!(format_number(None, false), "-");
        assert_eq!(format_number(f64::NAN, true), "-");
        assert_eq!(format_number(f64::INFINITY, false), "-");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1_234_567.0, false), "1,234,567");
        assert_eq!(format_number(1_234_567.0, true), "١,٢٣٤,٥٦٧");
        assert_eq!(format_number(999.0, false), "999");
        assert_eq!(format_number(1000.0, false), "1,000");
        assert_eq!(format_number(0.0, false), "0");
        assert_eq!(format_number(-2_500_000.0, false), "-2,500,000");
    }

    #[test]
    fn keeps_up_to_three_fraction_digits() {
        assert_eq!(format_number(1234.5, false), "1,234.5");
        assert_eq!(format_number(0.12345, false), "0.123");
        assert_eq!(format_number(2.0006, false), "2.001");
        assert_eq!(format_number(-0.0004, false), "0");
    }

    #[test]
    fn formatting_is_repeatable() {
        let first = format_number(750_000.25, true);
        let second = format_number(750_000.25, true);
        assert_eq!(first, second);
    }

    #[test]
    fn currency_appends_label() {
        assert_eq!(format_currency(750_000.0, false), "750,000 ريال");
        assert_eq!(format_currency(750_000.0, true), "٧٥٠,٠٠٠ ريال");
        assert_eq!(format_currency_in(10.0, "USD", false), "10 USD");
        assert_eq!(format_currency(None, true), "- ريال");
    }

    #[test]
    fn percentage_scales_and_rounds_half_away_from_zero() {
        assert_eq!(format_percentage(0.05, DEFAULT_PERCENT_DECIMALS, false), "5.0 ٪");
        assert_eq!(format_percentage(0.05, DEFAULT_PERCENT_DECIMALS, true), "٥.٠ ٪");
        assert_eq!(format_percentage(0.125, 0, false), "13 ٪");
        assert_eq!(format_percentage(-0.125, 0, false), "-13 ٪");
        assert_eq!(format_percentage(0.0125, 1, false), "1.3 ٪");
        assert_eq!(format_percentage(-0.0001, 1, false), "0.0 ٪");
        assert_eq!(format_percentage(None, 1, true), "-");
    }

    #[test]
    fn confidence_has_no_decimals() {
        assert_eq!(format_confidence(0.82, false), "82 ٪");
        assert_eq!(format_confidence(0.82, true), "٨٢ ٪");
    }

    #[test]
    fn per_meter_units() {
        assert_eq!(format_price_per_meter(5000.0, false), "5,000 ريال/م²");
        assert_eq!(format_rent_per_meter(45.5, true), "٤٥.٥ ريال/م²/شهر");
        assert_eq!(format_price_per_meter(None, false), "- ريال/م²");
    }

    #[test]
    fn day_suffix_is_fixed() {
        assert_eq!(format_days(1, false), "1 يوم");
        assert_eq!(format_days(45, true), "٤٥ يوم");
        assert_eq!(format_days(1200, false), "1,200 يوم");
    }

    #[test]
    fn price_range_does_not_reorder_bounds() {
        assert_eq!(
            format_price_range(700_000.0, 800_000.0, false),
            "700,000 - 800,000 ريال"
        );
        assert_eq!(
            format_price_range(900.0, 100.0, true),
            "٩٠٠ - ١٠٠ ريال"
        );
    }

    #[test]
    fn transaction_count_brackets_are_inclusive_at_lower_bound() {
        assert_eq!(format_transaction_count(999, false), "999");
        assert_eq!(format_transaction_count(1_000, false), "1.0 ألف");
        assert_eq!(format_transaction_count(1_250, false), "1.3 ألف");
        assert_eq!(format_transaction_count(999_999, false), "1000.0 ألف");
        assert_eq!(format_transaction_count(1_000_000, false), "1.0 مليون");
        assert_eq!(format_transaction_count(2_450_000, true), "٢.٥ مليون");
        assert_eq!(format_transaction_count(0, true), "٠");
    }

    #[test]
    fn transaction_count_midpoint_rounds_up() {
        assert_eq!(format_transaction_count(1_450, false), "1.5 ألف");
        assert_eq!(format_transaction_count(1_450, true), "١.٥ ألف");
    }

    #[test]
    fn volume_is_not_rescaled() {
        assert_eq!(format_volume_billions(12.5, false), "12.5 مليار ريال");
        assert_eq!(format_volume_billions(1500.0, true), "١,٥٠٠ مليار ريال");
    }
}
