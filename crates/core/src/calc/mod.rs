//! Calculators: one pure function per numerology operation.
//!
//! Each takes already-validated input plus the meanings table and a locale,
//! and returns a fresh [`NumerologyResult`](crate::types::NumerologyResult).
//! The locale only selects narrative text, never the arithmetic.

pub mod compatibility;
pub mod core_numbers;
pub mod cycles;
pub mod pinnacles;

pub use compatibility::{compatibility, CoreNumbers};
pub use core_numbers::{
    birthday_number, expression, life_path, maturity, personality, soul_urge,
};
pub use cycles::{personal_cycle, personal_cycles, PersonalCycle};
pub use pinnacles::{pinnacles_challenges, NO_MAIN_NUMBER};
