//! Single-number calculators: life path, expression, soul urge,
//! personality, birthday number and maturity.

use crate::error::NumerologyError;
use crate::meanings::{MeaningFamily, Meanings};
use crate::normalize::{
    extract_date_parts, sum_consonant_values, sum_date_digits, sum_name_values, sum_vowel_values,
};
use crate::reduce::{birthday_number as reduce_birthday, reduce_to_single_digit};
use crate::types::{NumerologyResult, NumerologyType};

fn single(
    numerology_type: NumerologyType,
    family: MeaningFamily,
    number: u32,
    meanings: &Meanings,
    locale: &str,
) -> NumerologyResult {
    tracing::trace!(%numerology_type, number, "computed");
    NumerologyResult::new(
        numerology_type,
        number,
        meanings.describe(family, number, locale),
    )
}

/// Digit sum of the whole birth date, reduced.
pub fn life_path(
    birth_date: &str,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyResult, NumerologyError> {
    let number = reduce_to_single_digit(sum_date_digits(birth_date)?);
    Ok(single(
        NumerologyType::LifePath,
        MeaningFamily::LifePath,
        number,
        meanings,
        locale,
    ))
}

/// Letter values of the full name, reduced.
pub fn expression(full_name: &str, meanings: &Meanings, locale: &str) -> NumerologyResult {
    single(
        NumerologyType::ExpressionDestiny,
        MeaningFamily::Expression,
        reduce_to_single_digit(sum_name_values(full_name)),
        meanings,
        locale,
    )
}

/// Vowel letter values of the full name, reduced.
pub fn soul_urge(full_name: &str, meanings: &Meanings, locale: &str) -> NumerologyResult {
    single(
        NumerologyType::SoulUrge,
        MeaningFamily::SoulUrge,
        reduce_to_single_digit(sum_vowel_values(full_name)),
        meanings,
        locale,
    )
}

/// Consonant letter values of the full name, reduced.
pub fn personality(full_name: &str, meanings: &Meanings, locale: &str) -> NumerologyResult {
    single(
        NumerologyType::Personality,
        MeaningFamily::Personality,
        reduce_to_single_digit(sum_consonant_values(full_name)),
        meanings,
        locale,
    )
}

/// Day of month of the birth date, reduced. Month and year are ignored.
pub fn birthday_number(
    birth_date: &str,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyResult, NumerologyError> {
    let parts = extract_date_parts(birth_date)?;
    Ok(single(
        NumerologyType::BirthdayNumber,
        MeaningFamily::Birthday,
        reduce_birthday(parts.day),
        meanings,
        locale,
    ))
}

/// Life path plus expression, reduced. Takes the two computed results.
pub fn maturity(
    life_path: &NumerologyResult,
    expression: &NumerologyResult,
    meanings: &Meanings,
    locale: &str,
) -> NumerologyResult {
    single(
        NumerologyType::Maturity,
        MeaningFamily::Maturity,
        reduce_to_single_digit(life_path.number + expression.number),
        meanings,
        locale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meanings() -> Meanings {
        Meanings::builtin().unwrap()
    }

    #[test]
    fn life_path_of_1990_05_15_is_3() {
        let r = life_path("1990-05-15", &meanings(), "en").unwrap();
        assert_eq!(r.number, 3);
        assert!(!r.is_master_number);
        assert_eq!(r.numerology_type, NumerologyType::LifePath);
        assert_eq!(r.description, "A path of creativity, self-expression and joy.");
    }

    #[test]
    fn life_path_can_be_a_master_number() {
        // 1+9+9+2+0+9+0+8 = 38 -> 11
        let r = life_path("1992-09-08", &meanings(), "en").unwrap();
        assert_eq!(r.number, 11);
        assert!(r.is_master_number);
    }

    #[test]
    fn life_path_rejects_malformed_date() {
        assert!(life_path("15/05/1990", &meanings(), "en").is_err());
    }

    #[test]
    fn expression_of_ana_is_7() {
        let r = expression("Ana", &meanings(), "en");
        assert_eq!(r.number, 7);
        assert_eq!(r.numerology_type, NumerologyType::ExpressionDestiny);
    }

    #[test]
    fn soul_urge_and_personality_split_the_name() {
        // JOHN: vowels O=6; consonants J=1 H=8 N=5 -> 14 -> 5
        let m = meanings();
        assert_eq!(soul_urge("John", &m, "en").number, 6);
        assert_eq!(personality("John", &m, "en").number, 5);
    }

    #[test]
    fn empty_name_yields_zero_with_fallback_text() {
        let m = meanings();
        let r = expression("1234", &m, "en");
        assert_eq!(r.number, 0);
        assert_eq!(r.description, m.fallback(MeaningFamily::Expression, "en"));
    }

    #[test]
    fn birthday_number_preserves_master_day() {
        let r = birthday_number("1990-05-29", &meanings(), "en").unwrap();
        assert_eq!(r.number, 11);
        assert!(r.is_master_number);
    }

    #[test]
    fn birthday_number_out_of_range_day_is_zero() {
        let r = birthday_number("1990-05-45", &meanings(), "en").unwrap();
        assert_eq!(r.number, 0);
    }

    #[test]
    fn maturity_combines_two_results() {
        let m = meanings();
        let lp = NumerologyResult::new(NumerologyType::LifePath, 3, String::new());
        let ex = NumerologyResult::new(NumerologyType::ExpressionDestiny, 7, String::new());
        let r = maturity(&lp, &ex, &m, "en");
        assert_eq!(r.number, 1);
        assert_eq!(r.numerology_type, NumerologyType::Maturity);
    }

    #[test]
    fn maturity_can_land_on_master_number() {
        let m = meanings();
        let lp = NumerologyResult::new(NumerologyType::LifePath, 11, String::new());
        let ex = NumerologyResult::new(NumerologyType::ExpressionDestiny, 11, String::new());
        assert_eq!(maturity(&lp, &ex, &m, "en").number, 22);
    }
}
