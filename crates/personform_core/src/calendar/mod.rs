//! Calendar projections derived from a stored birth date.
//!
//! # Responsibility
//! - Compute whole-year ages against an explicit reference date.
//! - Map dates onto western and Chinese zodiac signs.
//!
//! # Invariants
//! - Every function here is pure; "today" is always an explicit parameter or
//!   a thin `local_today()` wrapper the caller opted into.

pub mod age;
pub mod zodiac;
