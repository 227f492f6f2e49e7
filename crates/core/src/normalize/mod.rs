//! Normalizer: pure string and date primitives used by every calculator.

pub mod date;
pub mod name;

pub use date::{extract_date_parts, sum_date_digits, DateParts};
pub use name::{
    is_vowel, letter_value, normalize_name, sum_consonant_values, sum_name_values,
    sum_vowel_values, VOWELS,
};
