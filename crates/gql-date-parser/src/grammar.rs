//! Winnow parsers for the date/time grammar

use crate::{DateTimeLiteral, GrammarError, TimeOfDay};
use winnow::combinator::{alt, cut_err, eof, opt, preceded};
use winnow::error::{ContextError, ErrMode, ParseError, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::stream::{AsChar, Offset};
use winnow::token::{one_of, take_while};

type Input<'a> = &'a str;
type PResult<O> = ModalResult<O>;
type Error = ErrMode<ContextError>;

/// Parse a complete date or date-time literal
///
/// The whole input must match; surrounding whitespace is rejected.
pub fn parse_date_literal(source: &str) -> Result<DateTimeLiteral, GrammarError> {
    date_time_literal
        .parse(source)
        .map_err(|e| grammar_error(source, &e))
}

fn grammar_error(source: &str, err: &ParseError<Input<'_>, ContextError>) -> GrammarError {
    let offset = err.offset();
    let expected = err
        .inner()
        .context()
        .filter_map(|ctx| match ctx {
            StrContext::Expected(value) => Some(value.to_string()),
            _ => None,
        })
        .collect();
    GrammarError {
        offset,
        expected,
        found: source.get(offset..).and_then(|rest| rest.chars().next()),
    }
}

fn date_time_literal(input: &mut Input<'_>) -> PResult<DateTimeLiteral> {
    let start = *input;
    let (year, month, day) = calendar_date(input)?;
    let mut literal = DateTimeLiteral::date(year, month, day);

    if opt(date_time_separator).parse_next(input)?.is_some() {
        literal.time = Some(cut_err(time_of_day).parse_next(input)?);

        let offset_start = input.offset_from(&start);
        if let Some(offset) = opt(utc_offset).parse_next(input)? {
            literal.timezone_offset = Some(offset);
            literal.offset_start = Some(offset_start);
        }
    }

    end_of_input(input)?;
    Ok(literal)
}

/// `YYYY-MM-DD`
fn calendar_date(input: &mut Input<'_>) -> PResult<(u16, u8, u8)> {
    let year = four_digit_year(input)?;
    punct('-').parse_next(input)?;
    let month = two_digits("2-digit month").parse_next(input)?;
    punct('-').parse_next(input)?;
    let day = two_digits("2-digit day").parse_next(input)?;
    Ok((year, month, day))
}

fn four_digit_year(input: &mut Input<'_>) -> PResult<u16> {
    take_while(4, AsChar::is_dec_digit)
        .map(|s: &str| ascii_value(s) as u16)
        .context(expected("4-digit year"))
        .parse_next(input)
}

fn date_time_separator(input: &mut Input<'_>) -> PResult<char> {
    one_of(['T', 't', ' ']).parse_next(input)
}

/// `hh:mm[:ss[.fffffffff]]`
fn time_of_day(input: &mut Input<'_>) -> PResult<TimeOfDay> {
    let hour = two_digits("2-digit hour").parse_next(input)?;
    punct(':').parse_next(input)?;
    let minute = two_digits("2-digit minute").parse_next(input)?;

    let seconds = opt(preceded(
        ':',
        cut_err((
            two_digits("2-digit second"),
            opt(preceded('.', cut_err(fraction))),
        )),
    ))
    .parse_next(input)?;

    let (second, nanosecond) = match seconds {
        Some((second, fraction)) => (second, fraction.unwrap_or(0)),
        None => (0, 0),
    };
    Ok(TimeOfDay::new(hour, minute, second).with_nanosecond(nanosecond))
}

/// 1 to 9 fraction digits, scaled to nanoseconds
fn fraction(input: &mut Input<'_>) -> PResult<u32> {
    take_while(1..=9, AsChar::is_dec_digit)
        .map(|s: &str| ascii_value(s) * 10u32.pow(9 - s.len() as u32))
        .context(expected("fraction digits"))
        .parse_next(input)
}

/// `Z` or `±hh[[:]mm]`, in minutes east of UTC
fn utc_offset(input: &mut Input<'_>) -> PResult<i16> {
    alt((one_of(['Z', 'z']).value(0i16), signed_offset))
        .context(expected("UTC offset"))
        .parse_next(input)
}

fn signed_offset(input: &mut Input<'_>) -> PResult<i16> {
    let sign = offset_sign(input)?;
    let hours = cut_err(two_digits("2-digit offset hours")).parse_next(input)?;
    let minutes = opt(alt((
        preceded(':', cut_err(offset_minutes)),
        offset_minutes,
    )))
    .parse_next(input)?;

    let total = i16::from(hours) * 60 + i16::from(minutes.unwrap_or(0));
    Ok(if sign == '-' { -total } else { total })
}

fn offset_minutes(input: &mut Input<'_>) -> PResult<u8> {
    take_while(2, AsChar::is_dec_digit)
        .map(|s: &str| ascii_value(s) as u8)
        .verify(|minutes: &u8| *minutes < 60)
        .context(expected("offset minutes 00-59"))
        .parse_next(input)
}

fn offset_sign(input: &mut Input<'_>) -> PResult<char> {
    one_of(['+', '-']).parse_next(input)
}

fn end_of_input(input: &mut Input<'_>) -> PResult<()> {
    eof.void().context(expected("end of input")).parse_next(input)
}

fn two_digits<'a>(label: &'static str) -> impl Parser<Input<'a>, u8, Error> {
    take_while(2, AsChar::is_dec_digit)
        .map(|s: &str| ascii_value(s) as u8)
        .context(expected(label))
}

fn punct<'a>(c: char) -> impl Parser<Input<'a>, char, Error> {
    c.context(StrContext::Expected(StrContextValue::CharLiteral(c)))
}

fn expected(label: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(label))
}

/// Value of a run of ASCII digits; callers bound the length
fn ascii_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_value() {
        assert_eq!(ascii_value("0042"), 42);
        assert_eq!(ascii_value("999999999"), 999_999_999);
    }

    #[test]
    fn test_fraction_scaling() {
        let mut input = "5";
        assert_eq!(fraction(&mut input).unwrap(), 500_000_000);
        let mut input = "1234567";
        assert_eq!(fraction(&mut input).unwrap(), 123_456_700);
    }

    #[test]
    fn test_signed_offset_forms() {
        for text in ["+02:00", "+0200", "+02"] {
            let mut input = text;
            assert_eq!(utc_offset(&mut input).unwrap(), 120, "{text}");
            assert!(input.is_empty());
        }
        let mut input = "-05:30";
        assert_eq!(utc_offset(&mut input).unwrap(), -330);
    }
}
