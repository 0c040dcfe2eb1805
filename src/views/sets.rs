/// Rows shown for a prescription that has no usable set count.
pub const DEFAULT_SET_COUNT: usize = 3;

/// Number of set rows for a prescription such as `"4x6-8"`.
///
/// The count is the integer leading the text before the first `x`. Without
/// an `x`, or when that integer is missing or zero, the default applies.
pub fn parse_set_count(pattern: &str) -> usize {
    let Some((head, _)) = pattern.split_once('x') else {
        return DEFAULT_SET_COUNT;
    };

    let digits: String = head
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    match digits.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_SET_COUNT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_count() {
        assert_eq!(parse_set_count("4x6-8"), 4);
        assert_eq!(parse_set_count("5x5"), 5);
        assert_eq!(parse_set_count("12x10-12"), 12);
        assert_eq!(parse_set_count(" 2 x 10"), 2);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(parse_set_count("10"), DEFAULT_SET_COUNT);
        assert_eq!(parse_set_count(""), DEFAULT_SET_COUNT);
        assert_eq!(parse_set_count("x10"), DEFAULT_SET_COUNT);
        assert_eq!(parse_set_count("abcx10"), DEFAULT_SET_COUNT);
        assert_eq!(parse_set_count("0x10"), DEFAULT_SET_COUNT);
    }
}
