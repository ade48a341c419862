//! Text helpers shared by comment extraction, the short-code gate and
//! issue-number parsing.
//!
//! Comment text arrives from a web form, so trimming and string-to-number
//! conversion follow the rules a browser or Node runtime applies: U+FEFF
//! counts as whitespace, and numbers may be written in decimal, exponent,
//! `0x`/`0o`/`0b` or `Infinity` form.

/// Trim leading and trailing whitespace, including U+FEFF.
///
/// # Examples
///
/// ```
/// use reviewbot_core::trim_text;
///
/// assert_eq!(trim_text("\u{feff}  let x = 1;\n"), "let x = 1;");
/// ```
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Coerce text to a number using dynamic-language string-to-number rules.
///
/// Returns `None` where such a coercion yields NaN. Blank text is zero.
///
/// # Examples
///
/// ```
/// use reviewbot_core::coerce_to_number;
///
/// assert_eq!(coerce_to_number(" 4.2e1 "), Some(42.0));
/// assert_eq!(coerce_to_number("0x10"), Some(16.0));
/// assert_eq!(coerce_to_number("const x = 1;"), None);
/// ```
pub fn coerce_to_number(text: &str) -> Option<f64> {
    let text = trim_text(text);
    if text.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let lower = text.get(..2).map(str::to_ascii_lowercase);
        if lower.as_deref() == Some(prefix) {
            return parse_radix(&text[2..], radix);
        }
    }

    let (negative, unsigned) = match text.as_bytes()[0] {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // Rust's float grammar also accepts "inf" and "nan"; restrict to decimal syntax first.
    let decimal = unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal || unsigned.starts_with(['+', '-']) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    })
}
