//! Dispatcher: validate per-type required input, then run one calculator.

use crate::calc;
use crate::error::NumerologyError;
use crate::meanings::Meanings;
use crate::types::{NumerologyInput, NumerologyRequest, NumerologyResult, NumerologyType};

fn required<T: Clone>(
    value: &Option<T>,
    numerology_type: NumerologyType,
    field: &'static str,
) -> Result<T, NumerologyError> {
    value.clone().ok_or(NumerologyError::MissingField {
        numerology_type,
        field,
    })
}

impl NumerologyInput {
    /// Convert the loose input bag into the typed request for `numerology_type`.
    ///
    /// Fields are checked in the order `fullName`, `birthDate`, `targetDate`,
    /// `personA`, `personB`; the first absent one is reported.
    pub fn require(
        &self,
        numerology_type: NumerologyType,
    ) -> Result<NumerologyRequest, NumerologyError> {
        let t = numerology_type;
        let request = match t {
            NumerologyType::LifePath => NumerologyRequest::LifePath {
                birth_date: required(&self.birth_date, t, "birthDate")?,
            },
            NumerologyType::ExpressionDestiny => NumerologyRequest::ExpressionDestiny {
                full_name: required(&self.full_name, t, "fullName")?,
            },
            NumerologyType::SoulUrge => NumerologyRequest::SoulUrge {
                full_name: required(&self.full_name, t, "fullName")?,
            },
            NumerologyType::Personality => NumerologyRequest::Personality {
                full_name: required(&self.full_name, t, "fullName")?,
            },
            NumerologyType::BirthdayNumber => NumerologyRequest::BirthdayNumber {
                birth_date: required(&self.birth_date, t, "birthDate")?,
            },
            NumerologyType::Maturity => NumerologyRequest::Maturity {
                full_name: required(&self.full_name, t, "fullName")?,
                birth_date: required(&self.birth_date, t, "birthDate")?,
            },
            NumerologyType::PinnaclesChallenges => NumerologyRequest::PinnaclesChallenges {
                birth_date: required(&self.birth_date, t, "birthDate")?,
            },
            NumerologyType::PersonalCycles => NumerologyRequest::PersonalCycles {
                birth_date: required(&self.birth_date, t, "birthDate")?,
                target_date: required(&self.target_date, t, "targetDate")?,
            },
            NumerologyType::Compatibility => NumerologyRequest::Compatibility {
                person_a: required(&self.person_a, t, "personA")?,
                person_b: required(&self.person_b, t, "personB")?,
            },
        };
        Ok(request)
    }
}

/// Run the calculator for a fully-specified request.
///
/// Only date format errors can occur here; every field is already present.
pub fn evaluate(
    request: &NumerologyRequest,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyResult, NumerologyError> {
    tracing::debug!(numerology_type = %request.numerology_type(), locale, "evaluating");
    match request {
        NumerologyRequest::LifePath { birth_date } => calc::life_path(birth_date, meanings, locale),
        NumerologyRequest::ExpressionDestiny { full_name } => {
            Ok(calc::expression(full_name, meanings, locale))
        }
        NumerologyRequest::SoulUrge { full_name } => {
            Ok(calc::soul_urge(full_name, meanings, locale))
        }
        NumerologyRequest::Personality { full_name } => {
            Ok(calc::personality(full_name, meanings, locale))
        }
        NumerologyRequest::BirthdayNumber { birth_date } => {
            calc::birthday_number(birth_date, meanings, locale)
        }
        NumerologyRequest::Maturity {
            full_name,
            birth_date,
        } => {
            let life_path = calc::life_path(birth_date, meanings, locale)?;
            let expression = calc::expression(full_name, meanings, locale);
            Ok(calc::maturity(&life_path, &expression, meanings, locale))
        }
        NumerologyRequest::PinnaclesChallenges { birth_date } => {
            calc::pinnacles_challenges(birth_date, meanings, locale)
        }
        NumerologyRequest::PersonalCycles {
            birth_date,
            target_date,
        } => calc::personal_cycles(birth_date, target_date, meanings, locale),
        NumerologyRequest::Compatibility { person_a, person_b } => {
            calc::compatibility(person_a, person_b, meanings, locale)
        }
    }
}

/// Validate `input` for `numerology_type` and run exactly one calculator.
///
/// Fails with [`NumerologyError::MissingField`] before any calculation when
/// a required field is absent.
pub fn calculate_numerology(
    numerology_type: NumerologyType,
    input: &NumerologyInput,
    locale: &str,
    meanings: &Meanings,
) -> Result<NumerologyResult, NumerologyError> {
    let request = input.require(numerology_type)?;
    evaluate(&request, meanings, locale)
}
