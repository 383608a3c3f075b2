//! Conversions between entry text and `f64`.
//!
//! Entries are kept as text so in-progress input such as `"5."` survives.
//! Parsing uses the longest numeric prefix of the text, and formatting
//! produces the shortest text that reads back as the same value.

/// Parse the leading numeric prefix of `text`.
///
/// Returns `None` when the text has no numeric prefix at all.
///
/// # Example
///
/// ```rust
/// use tally::core::parse_number;
///
/// assert_eq!(parse_number("5."), Some(5.0));
/// assert_eq!(parse_number("-2.5"), Some(-2.5));
/// assert_eq!(parse_number("1e+21"), Some(1e21));
/// assert_eq!(parse_number("Erro"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (sign, rest) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let len = numeric_prefix_len(rest);
    if len == 0 {
        return None;
    }
    rest[..len].parse::<f64>().ok().map(|value| sign * value)
}

/// True when the whole of `text` is a number: an optional minus sign
/// followed by `Infinity` or `digits[.digits][e[+-]digits]`.
pub(crate) fn is_numeric(text: &str) -> bool {
    let rest = text.strip_prefix('-').unwrap_or(text);
    rest == "Infinity" || (!rest.is_empty() && numeric_prefix_len(rest) == rest.len())
}

/// True when `text` is something a user could have typed: an optional minus
/// sign, then digits with at most one decimal point. Exponent forms and
/// infinities are results, never in-progress entries.
pub(crate) fn is_plain_decimal(text: &str) -> bool {
    let rest = text.strip_prefix('-').unwrap_or(text);
    rest.bytes().any(|b| b.is_ascii_digit())
        && rest.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && rest.matches('.').count() <= 1
}

/// Length in bytes of the `digits[.digits][e[+-]digits]` prefix of `s`.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = digits(0);
    let mut end = int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(end + 1);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start += 1;
        }
        let exp_digits = digits(exp_start);
        if exp_digits > 0 {
            end = exp_start + exp_digits;
        }
    }

    end
}

/// Format a result for display.
///
/// Integral values print without a fraction, negative zero prints as `"0"`,
/// and very large or very small magnitudes switch to exponent notation with
/// an explicit sign (`"1e+21"`, `"1e-7"`).
///
/// # Example
///
/// ```rust
/// use tally::core::format_number;
///
/// assert_eq!(format_number(8.0), "8");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// assert_eq!(format_number(-0.0), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{value:e}");
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => formatted,
        }
    } else {
        value.to_string()
    }
}
