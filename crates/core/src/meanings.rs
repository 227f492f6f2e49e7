//! Meanings lookup: narrative text per operation family and number.
//!
//! The tables live in a JSON resource embedded at build time. Callers parse
//! it once with [`Meanings::builtin`] (or load a replacement with
//! [`Meanings::from_json_str`]) and pass `&Meanings` to every calculation.
//!
//! Lookup is "index or default": a locale entry when present, else the
//! locale's fallback sentence, else the default locale's fallback. Loading
//! rejects any resource whose default locale cannot answer every lookup.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::NumerologyError;

static BUILTIN_MEANINGS: &str = include_str!("../data/meanings.json");

/// Operation families that carry narrative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MeaningFamily {
    LifePath,
    Expression,
    SoulUrge,
    Personality,
    Birthday,
    Maturity,
    Pinnacle,
    Challenge,
    PersonalYear,
    Compatibility,
}

impl MeaningFamily {
    pub const ALL: [MeaningFamily; 10] = [
        MeaningFamily::LifePath,
        MeaningFamily::Expression,
        MeaningFamily::SoulUrge,
        MeaningFamily::Personality,
        MeaningFamily::Birthday,
        MeaningFamily::Maturity,
        MeaningFamily::Pinnacle,
        MeaningFamily::Challenge,
        MeaningFamily::PersonalYear,
        MeaningFamily::Compatibility,
    ];
}

/// The four sub-numbers compared by compatibility, in note order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aspect {
    LifePath,
    Expression,
    SoulUrge,
    Personality,
}

impl Aspect {
    pub const ALL: [Aspect; 4] = [
        Aspect::LifePath,
        Aspect::Expression,
        Aspect::SoulUrge,
        Aspect::Personality,
    ];
}

/// Which of the three compatibility note templates applies to a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteKind {
    Same,
    Close,
    Different,
}

/// The three compatibility note templates for one locale.
///
/// Templates may use `{aspect}`, `{a}` and `{b}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteTemplates {
    pub same: String,
    pub close: String,
    pub different: String,
}

impl NoteTemplates {
    fn template(&self, kind: NoteKind) -> &str {
        match kind {
            NoteKind::Same => &self.same,
            NoteKind::Close => &self.close,
            NoteKind::Different => &self.different,
        }
    }
}

type LocaleMap<T> = BTreeMap<String, T>;

fn primary_subtag(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or(locale)
        .to_ascii_lowercase()
}

/// Immutable, validated meanings tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meanings {
    default_locale: String,
    fallbacks: LocaleMap<BTreeMap<MeaningFamily, String>>,
    aspects: LocaleMap<BTreeMap<Aspect, String>>,
    notes: LocaleMap<NoteTemplates>,
    #[serde(default)]
    meanings: LocaleMap<BTreeMap<MeaningFamily, BTreeMap<u32, String>>>,
}

impl Meanings {
    /// Parse the resource compiled into the crate.
    pub fn builtin() -> Result<Meanings, NumerologyError> {
        Meanings::from_json_str(BUILTIN_MEANINGS)
    }

    /// Parse and validate a meanings resource from JSON text.
    pub fn from_json_str(json: &str) -> Result<Meanings, NumerologyError> {
        let meanings: Meanings =
            serde_json::from_str(json).map_err(|e| NumerologyError::InvalidMeanings {
                message: e.to_string(),
            })?;
        meanings.validate()?;
        Ok(meanings)
    }

    fn validate(&self) -> Result<(), NumerologyError> {
        let default = &self.default_locale;
        let invalid = |message: String| NumerologyError::InvalidMeanings { message };

        let fallbacks = self
            .fallbacks
            .get(default)
            .ok_or_else(|| invalid(format!("no fallbacks for default locale '{}'", default)))?;
        for family in MeaningFamily::ALL {
            if fallbacks.get(&family).map_or(true, |s| s.trim().is_empty()) {
                return Err(invalid(format!(
                    "default locale '{}' has no fallback for {:?}",
                    default, family
                )));
            }
        }

        let aspects = self
            .aspects
            .get(default)
            .ok_or_else(|| invalid(format!("no aspect names for default locale '{}'", default)))?;
        for aspect in Aspect::ALL {
            if aspects.get(&aspect).map_or(true, |s| s.trim().is_empty()) {
                return Err(invalid(format!(
                    "default locale '{}' has no name for aspect {:?}",
                    default, aspect
                )));
            }
        }

        if !self.notes.contains_key(default) {
            return Err(invalid(format!(
                "no compatibility notes for default locale '{}'",
                default
            )));
        }
        Ok(())
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Locales that carry at least a fallback sentence set.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.fallbacks.keys().map(String::as_str)
    }

    /// Pick the locale's entry, trying the exact tag, then its primary
    /// subtag (`en-US` -> `en`), then the default locale.
    fn localized<'a, T>(
        &'a self,
        table: &'a LocaleMap<T>,
        locale: &str,
        pick: impl Fn(&'a T) -> Option<&'a str>,
    ) -> Option<&'a str> {
        let primary = primary_subtag(locale);
        let tags = [locale, primary.as_str(), self.default_locale.as_str()];
        let found = tags
            .into_iter()
            .filter_map(|tag| table.get(tag))
            .filter_map(&pick)
            .find(|s| !s.trim().is_empty());
        found
    }

    /// The locale fallback sentence for a family. Never empty.
    pub fn fallback(&self, family: MeaningFamily, locale: &str) -> &str {
        self.localized(&self.fallbacks, locale, |m| {
            m.get(&family).map(String::as_str)
        })
        // validate() guarantees the default locale answers
        .unwrap_or_default()
    }

    /// Narrative text for `number` in `family`, or the locale fallback.
    pub fn describe(&self, family: MeaningFamily, number: u32, locale: &str) -> String {
        let primary = primary_subtag(locale);
        let entry = [locale, primary.as_str()]
            .into_iter()
            .filter_map(|tag| self.meanings.get(tag))
            .filter_map(|families| families.get(&family))
            .filter_map(|numbers| numbers.get(&number))
            .find(|s| !s.trim().is_empty());
        match entry {
            Some(text) => text.clone(),
            None => {
                tracing::trace!(?family, number, locale, "meaning lookup miss, using fallback");
                self.fallback(family, locale).to_string()
            }
        }
    }

    /// Display name of a compared aspect.
    pub fn aspect_name(&self, aspect: Aspect, locale: &str) -> &str {
        self.localized(&self.aspects, locale, |m| m.get(&aspect).map(String::as_str))
            .unwrap_or_default()
    }

    /// Render one compatibility note.
    pub fn note(&self, kind: NoteKind, aspect: Aspect, a: u32, b: u32, locale: &str) -> String {
        let template = self
            .localized(&self.notes, locale, |t| Some(t.template(kind)))
            .unwrap_or_default();
        template
            .replace("{aspect}", self.aspect_name(aspect, locale))
            .replace("{a}", &a.to_string())
            .replace("{b}", &b.to_string())
    }

    /// The resource as JSON, for serving or exporting.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
