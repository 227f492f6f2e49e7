//! Pinnacles and challenges: four life-stage numbers each, built from the
//! raw month, day and year of the birth date.

use crate::error::NumerologyError;
use crate::meanings::{MeaningFamily, Meanings};
use crate::normalize::extract_date_parts;
use crate::reduce::{absolute_difference, reduce_to_single_digit};
use crate::types::{NumerologyResult, NumerologyType, PeriodNumber, LIFE_PERIODS};

/// `number` of a pinnacles & challenges result. Not a numerology number.
pub const NO_MAIN_NUMBER: u32 = 0;

fn periods(
    numbers: [u32; 4],
    family: MeaningFamily,
    meanings: &Meanings,
    locale: &str,
) -> Vec<PeriodNumber> {
    LIFE_PERIODS
        .iter()
        .zip(numbers)
        .map(|(period, number)| PeriodNumber {
            period: period.to_string(),
            number,
            description: meanings.describe(family, number, locale),
        })
        .collect()
}

/// The four pinnacle numbers, oldest period first.
pub fn pinnacle_numbers(month: u32, day: u32, year: u32) -> [u32; 4] {
    let first = reduce_to_single_digit(month + day);
    let second = reduce_to_single_digit(day + year);
    let third = reduce_to_single_digit(first + second);
    let fourth = reduce_to_single_digit(month + year);
    [first, second, third, fourth]
}

/// The four challenge numbers, oldest period first.
pub fn challenge_numbers(month: u32, day: u32, year: u32) -> [u32; 4] {
    let first = reduce_to_single_digit(absolute_difference(month, day));
    let second = reduce_to_single_digit(absolute_difference(day, year));
    let third = reduce_to_single_digit(absolute_difference(first, second));
    let fourth = reduce_to_single_digit(absolute_difference(month, year));
    [first, second, third, fourth]
}

/// Pinnacles and challenges for a birth date.
///
/// The top-level `number` is [`NO_MAIN_NUMBER`] and the description is the
/// pinnacle family fallback; the per-period entries carry the real numbers.
pub fn pinnacles_challenges(
    birth_date: &str,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyResult, NumerologyError> {
    let parts = extract_date_parts(birth_date)?;
    let pinnacles = pinnacle_numbers(parts.month, parts.day, parts.year);
    let challenges = challenge_numbers(parts.month, parts.day, parts.year);
    tracing::trace!(?pinnacles, ?challenges, "computed pinnacles and challenges");

    let mut result = NumerologyResult::new(
        NumerologyType::PinnaclesChallenges,
        NO_MAIN_NUMBER,
        meanings.fallback(MeaningFamily::Pinnacle, locale).to_string(),
    );
    result.pinnacles = Some(periods(pinnacles, MeaningFamily::Pinnacle, meanings, locale));
    result.challenges = Some(periods(challenges, MeaningFamily::Challenge, meanings, locale));
    Ok(result)
}
