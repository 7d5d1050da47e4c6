/// Arabic-Indic digits indexed by their ASCII value.
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replace every ASCII digit with its Arabic-Indic counterpart.
///
/// Everything else (separators, signs, letters) is copied through untouched.
pub fn to_arabic_numerals(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            '0'..='9' => ARABIC_INDIC_DIGITS[(ch as u8 - b'0') as usize],
            _ => ch,
        })
        .collect()
}

/// Apply [`to_arabic_numerals`] only when the Arabic numeral convention is selected.
pub(crate) fn localize_digits(input: String, use_arabic: bool) -> String {
    if use_arabic {
        to_arabic_numerals(&input)
    } else {
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_each_digit() {
        assert_eq!(to_arabic_numerals("0123456789"), "٠١٢٣٤٥٦٧٨٩");
    }

    #[test]
    fn leaves_non_digits_alone() {
        assert_eq!(to_arabic_numerals("1,234.5 ريال"), "١,٢٣٤.٥ ريال");
        assert_eq!(to_arabic_numerals("-"), "-");
        assert_eq!(to_arabic_numerals(""), "");
    }

    #[test]
    fn already_arabic_digits_are_unchanged() {
        assert_eq!(to_arabic_numerals("٤٢"), "٤٢");
    }
}
