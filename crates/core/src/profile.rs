//! Full numerology profile for one person.

use serde::{Deserialize, Serialize};

use crate::calc;
use crate::error::NumerologyError;
use crate::meanings::Meanings;
use crate::types::{NumerologyResult, Person};

/// The six personal numbers computed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub full_name: String,
    pub birth_date: String,
    pub life_path: NumerologyResult,
    pub expression: NumerologyResult,
    pub soul_urge: NumerologyResult,
    pub personality: NumerologyResult,
    pub birthday: NumerologyResult,
    pub maturity: NumerologyResult,
}

impl NumerologyProfile {
    /// Results in display order.
    pub fn results(&self) -> [&NumerologyResult; 6] {
        [
            &self.life_path,
            &self.expression,
            &self.soul_urge,
            &self.personality,
            &self.birthday,
            &self.maturity,
        ]
    }
}

/// Compute the profile. Maturity reuses the life path and expression results.
pub fn profile(
    person: &Person,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyProfile, NumerologyError> {
    tracing::debug!(locale, "computing profile");
    let life_path = calc::life_path(&person.birth_date, meanings, locale)?;
    let expression = calc::expression(&person.full_name, meanings, locale);
    let maturity = calc::maturity(&life_path, &expression, meanings, locale);
    Ok(NumerologyProfile {
        full_name: person.full_name.clone(),
        birth_date: person.birth_date.clone(),
        soul_urge: calc::soul_urge(&person.full_name, meanings, locale),
        personality: calc::personality(&person.full_name, meanings, locale),
        birthday: calc::birthday_number(&person.birth_date, meanings, locale)?,
        life_path,
        expression,
        maturity,
    })
}
