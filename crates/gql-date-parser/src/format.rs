//! Invariant date/time formatting
//!
//! Output uses ASCII digits and fixed separators only.

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Format a UTC date-time as `YYYY-MM-DDTHH:MM:SS[.f]Z`
///
/// The fraction keeps only significant digits and is omitted when zero.
pub fn format_utc_datetime(
    (year, month, day): (i32, u32, u32),
    (hour, minute, second): (u32, u32, u32),
    nanosecond: u32,
) -> String {
    format!(
        "{}T{:02}:{:02}:{:02}{}Z",
        format_date(year, month, day),
        hour,
        minute,
        second,
        fraction(nanosecond)
    )
}

/// `.f` with trailing zeros trimmed, empty for a whole second
pub fn fraction(nanosecond: u32) -> String {
    if nanosecond == 0 {
        return String::new();
    }
    let digits = format!("{:09}", nanosecond);
    format!(".{}", digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_pads() {
        assert_eq!(format_date(2000, 1, 2), "2000-01-02");
        assert_eq!(format_date(33, 12, 31), "0033-12-31");
    }

    #[test]
    fn test_fraction() {
        assert_eq!(fraction(0), "");
        assert_eq!(fraction(500_000_000), ".5");
        assert_eq!(fraction(1), ".000000001");
    }

    #[test]
    fn test_fraction_trimming() {
        assert_eq!(
            format_utc_datetime((2015, 12, 1), (14, 15, 7), 123_000_000),
            "2015-12-01T14:15:07.123Z"
        );
        assert_eq!(
            format_utc_datetime((2015, 12, 1), (14, 15, 7), 123_456_700),
            "2015-12-01T14:15:07.1234567Z"
        );
        assert_eq!(
            format_utc_datetime((2015, 12, 1), (0, 0, 0), 0),
            "2015-12-01T00:00:00Z"
        );
    }
}
