//! `YYYY-MM-DD` decomposition and digit sums.
//!
//! Dates are taken positionally: a 4-digit year, a 2-digit month and a
//! 2-digit day. No calendar validation is done beyond that shape.

use crate::error::NumerologyError;

/// The three integer components of a `YYYY-MM-DD` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

fn parse_segment(
    date: &str,
    segment: &str,
    label: &str,
    width: usize,
) -> Result<u32, NumerologyError> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumerologyError::date_format(
            date,
            format!("{} segment '{}' is not a number", label, segment),
        ));
    }
    if segment.len() != width {
        return Err(NumerologyError::date_format(
            date,
            format!("{} segment '{}' must have {} digits", label, segment, width),
        ));
    }
    segment
        .parse()
        .map_err(|e| NumerologyError::date_format(date, format!("{} segment: {}", label, e)))
}

/// Split a `YYYY-MM-DD` string into year, month and day.
pub fn extract_date_parts(date: &str) -> Result<DateParts, NumerologyError> {
    let segments: Vec<&str> = date.trim().split('-').collect();
    if segments.len() != 3 {
        return Err(NumerologyError::date_format(
            date,
            format!(
                "expected YYYY-MM-DD with 3 segments, found {}",
                segments.len()
            ),
        ));
    }
    Ok(DateParts {
        year: parse_segment(date, segments[0], "year", 4)?,
        month: parse_segment(date, segments[1], "month", 2)?,
        day: parse_segment(date, segments[2], "day", 2)?,
    })
}

/// Sum of every decimal digit in the date, separators ignored.
pub fn sum_date_digits(date: &str) -> Result<u32, NumerologyError> {
    extract_date_parts(date)?;
    Ok(date
        .trim()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .sum())
}
