//! Text to instant normalization shared by every parse path

use crate::error::{CoercionError, CoercionResult};
use crate::instant::{Instant, YEAR_RANGE};
use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use gql_date_parser::{Component, DateTimeLiteral, parse_date_literal};
use log::{debug, trace};

/// Largest accepted UTC offset, in minutes
pub const MAX_OFFSET_MINUTES: i16 = 14 * 60;

/// Parse Date text and normalize it to UTC
///
/// Text without a UTC offset is read at `unqualified`. Nothing here consults
/// the host locale or time zone.
pub fn text_to_instant(text: &str, unqualified: FixedOffset) -> CoercionResult<Instant> {
    let literal = parse_date_literal(text).map_err(|e| {
        debug!("Date text {:?} rejected at offset {}: {}", text, e.offset, e);
        CoercionError::grammar(text, &e)
    })?;

    let instant = literal_to_instant(text, &literal, unqualified).inspect_err(|e| {
        debug!("Date text {:?} rejected: {}", text, e);
    })?;

    trace!("Date text {:?} normalized to {}", text, instant);
    Ok(instant)
}

fn literal_to_instant(
    text: &str,
    literal: &DateTimeLiteral,
    unqualified: FixedOffset,
) -> CoercionResult<Instant> {
    let out_of_range = |component: Component| {
        CoercionError::out_of_range(text, component, literal.span_of(component))
    };

    if !YEAR_RANGE.contains(&i32::from(literal.year)) {
        return Err(out_of_range(Component::Year));
    }
    if !(1..=12).contains(&literal.month) {
        return Err(out_of_range(Component::Month));
    }
    let date = NaiveDate::from_ymd_opt(
        i32::from(literal.year),
        u32::from(literal.month),
        u32::from(literal.day),
    )
    .ok_or_else(|| out_of_range(Component::Day))?;

    let time = match &literal.time {
        None => NaiveTime::MIN,
        Some(t) => {
            if t.hour > 23 {
                return Err(out_of_range(Component::Hour));
            }
            if t.minute > 59 {
                return Err(out_of_range(Component::Minute));
            }
            // leap seconds are not representable in a Date value
            if t.second > 59 {
                return Err(out_of_range(Component::Second));
            }
            NaiveTime::from_hms_nano_opt(
                u32::from(t.hour),
                u32::from(t.minute),
                u32::from(t.second),
                t.nanosecond,
            )
            .ok_or_else(|| out_of_range(Component::Second))?
        }
    };

    let offset = match literal.timezone_offset {
        None => unqualified,
        Some(minutes) if minutes.abs() > MAX_OFFSET_MINUTES => {
            return Err(out_of_range(Component::Offset));
        }
        Some(minutes) => FixedOffset::east_opt(i32::from(minutes) * 60)
            .ok_or_else(|| out_of_range(Component::Offset))?,
    };

    // a fixed offset never yields an ambiguous or missing local time
    let local = offset
        .from_local_datetime(&date.and_time(time))
        .single()
        .ok_or_else(|| out_of_range(Component::Offset))?;

    // the offset may carry the instant out of the representable years
    Instant::from_utc(local.with_timezone(&Utc))
        .ok_or_else(|| out_of_range(Component::Offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Offset, Timelike};
    use gql_date_diagnostics::{GQLD0001, GQLD0002, Span};
    use gql_date_parser::TimeOfDay;

    fn utc(text: &str) -> CoercionResult<Instant> {
        text_to_instant(text, Utc.fix())
    }

    #[test]
    fn test_date_only_is_midnight() {
        let instant = utc("2018-07-24").unwrap();
        assert_eq!(instant.to_iso8601(), "2018-07-24T00:00:00Z");
    }

    #[test]
    fn test_offset_is_applied() {
        let instant = utc("2015-11-21T19:59:32.987+0200").unwrap();
        assert_eq!(instant.to_iso8601(), "2015-11-21T17:59:32.987Z");
        assert_eq!(instant.as_datetime().nanosecond(), 987_000_000);
    }

    #[test]
    fn test_unqualified_offset_is_used() {
        let east = FixedOffset::east_opt(-5 * 3600).unwrap();
        let instant = text_to_instant("2015-12-01T10:00", east).unwrap();
        assert_eq!(instant.to_iso8601(), "2015-12-01T15:00:00Z");

        // explicit offsets win
        let instant = text_to_instant("2015-12-01T10:00Z", east).unwrap();
        assert_eq!(instant.to_iso8601(), "2015-12-01T10:00:00Z");
    }

    #[test]
    fn test_range_failures_name_the_component() {
        let err = utc("2012-12-32").unwrap_err();
        assert_eq!(err.code(), GQLD0002);
        assert_eq!(err.span(), Some(Span::new(8, 10)));

        let err = utc("2012-13-01").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(5, 7)));

        let err = utc("0000-01-01").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(0, 4)));

        let err = utc("2015-12-01T24:00").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(11, 13)));

        let err = utc("2015-12-01T23:59:60Z").unwrap_err();
        assert_eq!(err.span(), Some(Span::new(17, 19)));

        let err = utc("2015-12-01T10:00+15:00").unwrap_err();
        assert_eq!(err.span(), Some(Span::point(16)));
    }

    #[test]
    fn test_extreme_offsets() {
        assert!(utc("2015-12-01T10:00+14:00").is_ok());
        assert!(utc("2015-12-01T10:00-14:00").is_ok());
        assert_eq!(
            utc("0001-01-01T00:00-01:00").unwrap().to_iso8601(),
            "0001-01-01T01:00:00Z"
        );
    }

    #[test]
    fn test_offset_leaving_year_range() {
        let err = utc("0001-01-01T00:00+01:00").unwrap_err();
        assert_eq!(err.code(), GQLD0002);
        assert_eq!(err.span(), Some(Span::point(16)));

        let err = utc("9999-12-31T23:30-00:45").unwrap_err();
        assert_eq!(err.code(), GQLD0002);

        // an unqualified offset counts too
        let east = FixedOffset::east_opt(3600).unwrap();
        let err = text_to_instant("0001-01-01", east).unwrap_err();
        assert_eq!(err.code(), GQLD0002);
        assert_eq!(err.span(), None);
    }

    #[test]
    fn test_time_read_from_borrowed_literal() {
        let literal = DateTimeLiteral::date(2015, 12, 1)
            .with_time(TimeOfDay::new(14, 15, 7).with_nanosecond(123_000_000));
        let instant = literal_to_instant("", &literal, Utc.fix()).unwrap();
        assert_eq!(instant.to_iso8601(), "2015-12-01T14:15:07.123Z");
        // the literal is still usable afterwards
        assert_eq!(literal.time.map(|t| t.hour), Some(14));

        let literal = DateTimeLiteral::date(2015, 12, 1).with_time(TimeOfDay::new(14, 60, 0));
        let err = literal_to_instant("", &literal, Utc.fix()).unwrap_err();
        assert_eq!(err.span(), Some(Span::new(14, 16)));
    }

    #[test]
    fn test_grammar_failure_code() {
        assert_eq!(utc("Dec 32 2012").unwrap_err().code(), GQLD0001);
    }
}
