//! Personal year, month and day for a target date.

use crate::error::NumerologyError;
use crate::meanings::{MeaningFamily, Meanings};
use crate::normalize::{extract_date_parts, sum_date_digits};
use crate::reduce::reduce_to_single_digit;
use crate::types::{NumerologyResult, NumerologyType};

/// Personal year, month and day, each reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalCycle {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

/// Chain the three cycle numbers for `birth_date` evaluated at `target_date`.
pub fn personal_cycle(
    birth_date: &str,
    target_date: &str,
) -> Result<PersonalCycle, NumerologyError> {
    let birth = extract_date_parts(birth_date)?;
    let target = extract_date_parts(target_date)?;
    let year = reduce_to_single_digit(birth.month + birth.day + sum_date_digits(target_date)?);
    let month = reduce_to_single_digit(year + target.month);
    let day = reduce_to_single_digit(month + target.day);
    Ok(PersonalCycle { year, month, day })
}

/// Personal cycles result; `number` is the personal year.
pub fn personal_cycles(
    birth_date: &str,
    target_date: &str,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyResult, NumerologyError> {
    let cycle = personal_cycle(birth_date, target_date)?;
    tracing::trace!(?cycle, target_date, "computed personal cycle");

    let mut result = NumerologyResult::new(
        NumerologyType::PersonalCycles,
        cycle.year,
        meanings.describe(MeaningFamily::PersonalYear, cycle.year, locale),
    );
    result.personal_year = Some(cycle.year);
    result.personal_month = Some(cycle.month);
    result.personal_day = Some(cycle.day);
    Ok(result)
}
