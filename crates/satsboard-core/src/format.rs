//! Number formatting for display layers

use serde::{Deserialize, Serialize};

const GROUP_SEPARATOR: char = ',';

/// Scale words for successive powers of one thousand
const MAGNITUDE_WORDS: [&str; 5] = ["thousand", "million", "billion", "trillion", "quadrillion"];

/// 2^52
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Display style accepted by [`format_number`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// `1234567.5` → `1,234,567.5`
    #[default]
    FullNumberWithCommas,
    /// `1234567.5` → `1.23 million`
    NumberAndWord,
}

/// Formats `n` in the requested style.
pub fn format_number(n: f64, style: NumberFormat) -> String {
    match style {
        NumberFormat::FullNumberWithCommas => format_grouped_digits(n),
        NumberFormat::NumberAndWord => format_magnitude_word(n),
    }
}

/// Groups the integer part in threes; the fractional part is left as is.
pub fn format_grouped_digits(n: f64) -> String {
    let rendered = n.to_string();
    match rendered.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&rendered),
    }
}

/// Renders `n` scaled down to a scale word, e.g. `1.23 million`.
///
/// Stops at quadrillion; anything larger stays in quadrillions.
pub fn format_magnitude_word(n: f64) -> String {
    let mut value = n;
    let mut divisions = 0;

    while value >= 1000.0 && divisions < MAGNITUDE_WORDS.len() {
        value /= 1000.0;
        divisions += 1;
    }

    let rounded = round_to_decimal_places(value, 2);
    if divisions == 0 {
        rounded.to_string()
    } else {
        format!("{} {}", rounded, MAGNITUDE_WORDS[divisions - 1])
    }
}

/// Groups an integer's digits in threes without going through `f64`.
pub fn format_grouped_integer(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Rounds half away from zero at `digits` decimal places.
///
/// Negative `digits` round left of the decimal point: `-2` rounds to the
/// nearest hundred. The shift to the rounding digit happens on the decimal
/// representation, so `1.005` rounds to `1.01` even though its binary value
/// sits just below the half.
pub fn round_to_decimal_places(n: f64, digits: i32) -> f64 {
    if !n.is_finite() {
        return n;
    }

    let shift = i64::from(digits);
    let shifted = match shift_decimal_point(n, shift) {
        Some(shifted) => shifted,
        None => return n,
    };
    // Past 2^52 every f64 is already an integer at this precision.
    if !shifted.is_finite() || shifted.abs() >= INTEGRAL_THRESHOLD {
        return n;
    }

    shift_decimal_point(shifted.round(), -shift).unwrap_or(n)
}

/// `n × 10^exponent`, exact in decimal then rounded once to the nearest f64
fn shift_decimal_point(n: f64, exponent: i64) -> Option<f64> {
    format!("{}e{}", n, exponent).parse().ok()
}

/// `1 block`, `2 blocks`, `0 blocks`.
pub fn pluralize_if_not_one(count: u64, label: &str) -> String {
    format!("{} {}", count, plural_label(count, label))
}

/// Like [`pluralize_if_not_one`] with the count grouped: `210,000 blocks`.
pub fn pluralize_grouped_if_not_one(count: u64, label: &str) -> String {
    format!("{} {}", format_grouped_integer(count), plural_label(count, label))
}

fn plural_label(count: u64, label: &str) -> String {
    if count == 1 {
        label.to_string()
    } else {
        format!("{}s", label)
    }
}

/// Inserts separators into a plain integer string such as `-1234567`.
pub(crate) fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    format!("{}{}", sign, grouped)
}
