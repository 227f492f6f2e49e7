//! Shared engine types: operation selector, inputs and the result shape.
//!
//! JSON field names follow the camelCase wire form used by callers
//! (`fullName`, `birthDate`, `isMasterNumber`, ...).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;
use crate::reduce::is_master_number;

// ──────────────────────────────────────────────
// Operation selector
// ──────────────────────────────────────────────

/// The nine supported numerology operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumerologyType {
    LifePath,
    ExpressionDestiny,
    SoulUrge,
    Personality,
    BirthdayNumber,
    Maturity,
    PinnaclesChallenges,
    PersonalCycles,
    Compatibility,
}

impl NumerologyType {
    pub const ALL: [NumerologyType; 9] = [
        NumerologyType::LifePath,
        NumerologyType::ExpressionDestiny,
        NumerologyType::SoulUrge,
        NumerologyType::Personality,
        NumerologyType::BirthdayNumber,
        NumerologyType::Maturity,
        NumerologyType::PinnaclesChallenges,
        NumerologyType::PersonalCycles,
        NumerologyType::Compatibility,
    ];

    /// Kebab-case wire name, e.g. `"life-path"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            NumerologyType::LifePath => "life-path",
            NumerologyType::ExpressionDestiny => "expression-destiny",
            NumerologyType::SoulUrge => "soul-urge",
            NumerologyType::Personality => "personality",
            NumerologyType::BirthdayNumber => "birthday-number",
            NumerologyType::Maturity => "maturity",
            NumerologyType::PinnaclesChallenges => "pinnacles-challenges",
            NumerologyType::PersonalCycles => "personal-cycles",
            NumerologyType::Compatibility => "compatibility",
        }
    }

    /// Input fields (camelCase) that must be present for this operation.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            NumerologyType::LifePath
            | NumerologyType::BirthdayNumber
            | NumerologyType::PinnaclesChallenges => &["birthDate"],
            NumerologyType::ExpressionDestiny
            | NumerologyType::SoulUrge
            | NumerologyType::Personality => &["fullName"],
            NumerologyType::Maturity => &["fullName", "birthDate"],
            NumerologyType::PersonalCycles => &["birthDate", "targetDate"],
            NumerologyType::Compatibility => &["personA", "personB"],
        }
    }
}

impl fmt::Display for NumerologyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumerologyType {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumerologyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| NumerologyError::UnknownType {
                name: s.to_string(),
            })
    }
}

// ──────────────────────────────────────────────
// Inputs
// ──────────────────────────────────────────────

/// One person's data, as used by compatibility and profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub full_name: String,
    pub birth_date: String,
}

impl Person {
    pub fn new(full_name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Person {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
        }
    }
}

/// Loosely-typed input bag. Which fields are mandatory depends on the
/// [`NumerologyType`]; see [`NumerologyInput::require`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_a: Option<Person>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_b: Option<Person>,
}

/// A fully-specified calculation: one variant per operation, each carrying
/// exactly the fields that operation needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum NumerologyRequest {
    LifePath { birth_date: String },
    ExpressionDestiny { full_name: String },
    SoulUrge { full_name: String },
    Personality { full_name: String },
    BirthdayNumber { birth_date: String },
    Maturity { full_name: String, birth_date: String },
    PinnaclesChallenges { birth_date: String },
    PersonalCycles { birth_date: String, target_date: String },
    Compatibility { person_a: Person, person_b: Person },
}

impl NumerologyRequest {
    pub fn numerology_type(&self) -> NumerologyType {
        match self {
            NumerologyRequest::LifePath { .. } => NumerologyType::LifePath,
            NumerologyRequest::ExpressionDestiny { .. } => NumerologyType::ExpressionDestiny,
            NumerologyRequest::SoulUrge { .. } => NumerologyType::SoulUrge,
            NumerologyRequest::Personality { .. } => NumerologyType::Personality,
            NumerologyRequest::BirthdayNumber { .. } => NumerologyType::BirthdayNumber,
            NumerologyRequest::Maturity { .. } => NumerologyType::Maturity,
            NumerologyRequest::PinnaclesChallenges { .. } => NumerologyType::PinnaclesChallenges,
            NumerologyRequest::PersonalCycles { .. } => NumerologyType::PersonalCycles,
            NumerologyRequest::Compatibility { .. } => NumerologyType::Compatibility,
        }
    }
}

// ──────────────────────────────────────────────
// Result
// ──────────────────────────────────────────────

/// Life-stage labels for the four pinnacle/challenge periods, oldest first.
pub const LIFE_PERIODS: [&str; 4] = ["0–27", "28–36", "37–45", "46+"];

/// One pinnacle or challenge entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodNumber {
    pub period: String,
    pub number: u32,
    pub description: String,
}

/// The sole output shape of every operation.
///
/// `number` is a single digit or master number, except for
/// `pinnacles-challenges` where it is the sentinel `0`; use
/// [`NumerologyResult::main_number`] to tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyResult {
    pub number: u32,
    pub is_master_number: bool,
    pub description: String,
    #[serde(rename = "type")]
    pub numerology_type: NumerologyType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pinnacles: Option<Vec<PeriodNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<PeriodNumber>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_score: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatibility_notes: Option<Vec<String>>,
}

impl NumerologyResult {
    /// A plain single-number result; `is_master_number` is derived from `number`.
    pub fn new(numerology_type: NumerologyType, number: u32, description: String) -> Self {
        NumerologyResult {
            number,
            is_master_number: is_master_number(number),
            description,
            numerology_type,
            pinnacles: None,
            challenges: None,
            personal_year: None,
            personal_month: None,
            personal_day: None,
            compatibility_score: None,
            compatibility_notes: None,
        }
    }

    /// The meaningful main number, or `None` for pinnacles & challenges.
    pub fn main_number(&self) -> Option<u32> {
        match self.numerology_type {
            NumerologyType::PinnaclesChallenges => None,
            _ => Some(self.number),
        }
    }
}
