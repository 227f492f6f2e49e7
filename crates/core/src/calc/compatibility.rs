//! Compatibility between two people.
//!
//! Life path, expression, soul urge and personality are computed for each
//! person and compared pairwise. Each pair contributes 25 when equal, 20
//! when one apart and 10 otherwise, so the score lies in `40..=100`.

use crate::error::NumerologyError;
use crate::meanings::{Aspect, MeaningFamily, Meanings, NoteKind};
use crate::normalize::{sum_consonant_values, sum_date_digits, sum_name_values, sum_vowel_values};
use crate::reduce::{absolute_difference, reduce_to_single_digit};
use crate::types::{NumerologyResult, NumerologyType, Person};

pub const SAME_POINTS: u32 = 25;
pub const CLOSE_POINTS: u32 = 20;
pub const DIFFERENT_POINTS: u32 = 10;

/// The four sub-numbers compared between two people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreNumbers {
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

impl CoreNumbers {
    pub fn of(person: &Person) -> Result<CoreNumbers, NumerologyError> {
        Ok(CoreNumbers {
            life_path: reduce_to_single_digit(sum_date_digits(&person.birth_date)?),
            expression: reduce_to_single_digit(sum_name_values(&person.full_name)),
            soul_urge: reduce_to_single_digit(sum_vowel_values(&person.full_name)),
            personality: reduce_to_single_digit(sum_consonant_values(&person.full_name)),
        })
    }

    fn get(&self, aspect: Aspect) -> u32 {
        match aspect {
            Aspect::LifePath => self.life_path,
            Aspect::Expression => self.expression,
            Aspect::SoulUrge => self.soul_urge,
            Aspect::Personality => self.personality,
        }
    }
}

/// Classify one pair of sub-numbers.
pub fn pair_kind(a: u32, b: u32) -> NoteKind {
    if a == b {
        NoteKind::Same
    } else if absolute_difference(a, b) <= 1 {
        NoteKind::Close
    } else {
        NoteKind::Different
    }
}

pub fn pair_points(kind: NoteKind) -> u32 {
    match kind {
        NoteKind::Same => SAME_POINTS,
        NoteKind::Close => CLOSE_POINTS,
        NoteKind::Different => DIFFERENT_POINTS,
    }
}

/// Compatibility result: `number` is the reduced score, notes follow the
/// order life path, expression, soul urge, personality.
pub fn compatibility(
    person_a: &Person,
    person_b: &Person,
    meanings: &Meanings,
    locale: &str,
) -> Result<NumerologyResult, NumerologyError> {
    let a = CoreNumbers::of(person_a)?;
    let b = CoreNumbers::of(person_b)?;

    let mut score = 0;
    let mut notes = Vec::with_capacity(Aspect::ALL.len());
    for aspect in Aspect::ALL {
        let (x, y) = (a.get(aspect), b.get(aspect));
        let kind = pair_kind(x, y);
        score += pair_points(kind);
        notes.push(meanings.note(kind, aspect, x, y, locale));
    }
    let number = reduce_to_single_digit(score);
    tracing::trace!(?a, ?b, score, number, "computed compatibility");

    let mut result = NumerologyResult::new(
        NumerologyType::Compatibility,
        number,
        meanings.describe(MeaningFamily::Compatibility, number, locale),
    );
    result.compatibility_score = Some(score);
    result.compatibility_notes = Some(notes);
    Ok(result)
}
