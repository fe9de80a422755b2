/// Coerce typed text into an integer the way a browser `parseInt` does.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// decimal digits; anything after it is ignored. Text without leading digits
/// yields `0`, never the field's previous value. Out-of-range values saturate.
pub fn parse_int_or_zero(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return 0;
    }

    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).unwrap_or(if negative { i32::MIN } else { i32::MAX })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_int_or_zero("0"), 0);
        assert_eq!(parse_int_or_zero("12"), 12);
        assert_eq!(parse_int_or_zero("-7"), -7);
        assert_eq!(parse_int_or_zero("+5"), 5);
    }

    #[test]
    fn non_numeric_is_zero() {
        assert_eq!(parse_int_or_zero(""), 0);
        assert_eq!(parse_int_or_zero("abc"), 0);
        assert_eq!(parse_int_or_zero("-"), 0);
        assert_eq!(parse_int_or_zero("   "), 0);
        assert_eq!(parse_int_or_zero("x12"), 0);
    }

    #[test]
    fn leading_prefix_wins() {
        assert_eq!(parse_int_or_zero("12abc"), 12);
        assert_eq!(parse_int_or_zero("3.9"), 3);
        assert_eq!(parse_int_or_zero("  42  "), 42);
        assert_eq!(parse_int_or_zero("-8 arrows"), -8);
    }

    #[test]
    fn saturates_out_of_range() {
        assert_eq!(parse_int_or_zero("99999999999999999999"), i32::MAX);
        assert_eq!(parse_int_or_zero("-99999999999999999999"), i32::MIN);
    }
}
