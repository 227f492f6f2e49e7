//! numen-core: Pythagorean numerology engine.
//!
//! A deterministic pipeline from a person's name and birth date (and, for
//! compatibility, a second person) to single-digit or master-number results.
//! Three layers, leaves first:
//!
//! - [`normalize`] and [`reduce`] -- name folding, letter values, date
//!   decomposition and digital-root reduction with master-number preservation
//! - [`calc`] -- one pure calculator per operation, plus the dispatcher
//!   [`calculate_numerology()`] and the typed entry point [`evaluate()`]
//! - [`meanings`] -- narrative text lookup with per-locale fallbacks
//!
//! Nothing here performs I/O or keeps state between calls; the meanings
//! table is built once by the caller and passed by reference.
//!
//! ```
//! use numen_core::{calculate_numerology, Meanings, NumerologyInput, NumerologyType};
//!
//! let meanings = Meanings::builtin().unwrap();
//! let input = NumerologyInput {
//!     birth_date: Some("1990-05-15".into()),
//!     ..Default::default()
//! };
//! let result = calculate_numerology(NumerologyType::LifePath, &input, "en", &meanings).unwrap();
//! assert_eq!(result.number, 3);
//! ```

/// Locale used when a caller does not pick one.
pub const DEFAULT_LOCALE: &str = "tr";

pub mod calc;
pub mod dispatch;
pub mod error;
pub mod meanings;
pub mod normalize;
pub mod profile;
pub mod reduce;
pub mod types;

// ── Convenience re-exports ───────────────────────────────────────────

pub use dispatch::{calculate_numerology, evaluate};
pub use error::NumerologyError;
pub use meanings::{Aspect, MeaningFamily, Meanings, NoteKind};
pub use profile::{profile, NumerologyProfile};
pub use reduce::{is_master_number, reduce_to_single_digit, MASTER_NUMBERS};
pub use types::{
    NumerologyInput, NumerologyRequest, NumerologyResult, NumerologyType, PeriodNumber, Person,
    LIFE_PERIODS,
};
