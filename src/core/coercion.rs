use crate::domain::model::InputValue;
use regex::Regex;
use std::sync::OnceLock;

fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("decimal pattern is valid")
    })
}

/// Whitespace and line terminators as skipped by `String.prototype.trim`
/// and `Number()`. Unlike `char::is_whitespace` this includes U+FEFF and
/// excludes U+0085.
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{000B}' | '\u{000C}' | '\r'
            | ' ' | '\u{00A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

pub fn js_trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

/// Standard numeric coercion. Text that does not spell a number yields NaN.
pub fn to_number(value: &InputValue) -> f64 {
    match value {
        InputValue::Number(n) => *n,
        InputValue::Text(s) => parse_numeric_text(s),
        InputValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        InputValue::Null => 0.0,
        InputValue::Undefined | InputValue::Object => f64::NAN,
    }
}

fn parse_numeric_text(text: &str) -> f64 {
    let s = js_trim(text);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // 0x / 0o / 0b 前綴不接受正負號
    if let Some(radix) = radix_of(s) {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return parse_radix_digits(digits, radix);
    }

    if !decimal_pattern().is_match(s) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn radix_of(s: &str) -> Option<u32> {
    let prefix = s.get(..2)?;
    match prefix {
        "0x" | "0X" => Some(16),
        "0o" | "0O" => Some(8),
        "0b" | "0B" => Some(2),
        _ => None,
    }
}

// Accumulates in f64 so that long hex strings lose precision instead of
// overflowing.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * f64::from(radix) + f64::from(d),
            None => return f64::NAN,
        }
    }
    acc
}

/// Finite with no fractional part.
pub fn is_integer(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> f64 {
        to_number(&InputValue::from(s))
    }

    #[test]
    fn test_decimal_text() {
        assert_eq!(text("6"), 6.0);
        assert_eq!(text("  10\n"), 10.0);
        assert_eq!(text("-4"), -4.0);
        assert_eq!(text("+4"), 4.0);
        assert_eq!(text("10.1"), 10.1);
        assert_eq!(text(".5"), 0.5);
        assert_eq!(text("5."), 5.0);
        assert_eq!(text("1e3"), 1000.0);
    }

    #[test]
    fn test_non_numeric_text_is_nan() {
        assert!(text("foo").is_nan());
        assert!(text("6abc").is_nan());
        assert!(text("inf").is_nan());
        assert!(text("NaN").is_nan());
        assert!(text("1_000").is_nan());
        assert!(text("-0x10").is_nan());
        assert!(text("0x").is_nan());
    }

    #[test]
    fn test_prefixed_text() {
        assert_eq!(text("0x1F"), 31.0);
        assert_eq!(text("0o17"), 15.0);
        assert_eq!(text("0b101"), 5.0);
        assert!(text("0b102").is_nan());
    }

    #[test]
    fn test_special_text() {
        assert_eq!(text(""), 0.0);
        assert_eq!(text("Infinity"), f64::INFINITY);
        assert_eq!(text("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_non_text_values() {
        assert_eq!(to_number(&InputValue::Number(6.5)), 6.5);
        assert_eq!(to_number(&InputValue::Bool(true)), 1.0);
        assert_eq!(to_number(&InputValue::Null), 0.0);
        assert!(to_number(&InputValue::Undefined).is_nan());
        assert!(to_number(&InputValue::Object).is_nan());
    }

    #[test]
    fn test_js_whitespace_set() {
        assert!(is_js_whitespace('\u{FEFF}'));
        assert!(is_js_whitespace('\u{00A0}'));
        assert!(is_js_whitespace('\u{2007}'));
        assert!(is_js_whitespace('\u{2028}'));
        assert!(is_js_whitespace('\u{000B}'));
        assert!(!is_js_whitespace('\u{0085}'));
        assert!(!is_js_whitespace('\u{200B}'));
        assert!(!is_js_whitespace('a'));
    }

    #[test]
    fn test_text_trimmed_with_js_whitespace() {
        assert_eq!(text("\u{FEFF}6\u{FEFF}"), 6.0);
        assert_eq!(text("\u{3000}10\u{2029}"), 10.0);
        assert!(text("\u{85}6").is_nan());
        assert!(text("6\u{85}").is_nan());
        assert_eq!(text("\u{FEFF}"), 0.0);
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(6.0));
        assert!(is_integer(-3.0));
        assert!(!is_integer(10.1));
        assert!(!is_integer(f64::INFINITY));
        assert!(!is_integer(f64::NAN));
    }
}
