//! Person domain record.
//!
//! # Responsibility
//! - Store identity, name, email and birth-date fields behind validating
//!   constructors and setters.
//! - Project derived calendar properties (zodiac signs, adult status,
//!   birthday flag) from the stored birth date.
//!
//! # Invariants
//! - `uuid` is stable and never nil.
//! - `email` always satisfies the email-format predicate.
//! - `birth_date` implied a whole-year age in `[0, 135]` against the
//!   reference date that validated it.
//! - Rejected setters leave prior stored values unchanged.

use crate::calendar::age::{age_in_years, local_today};
use crate::calendar::zodiac::{ChineseZodiac, ZodiacSign};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Oldest whole-year age a stored birth date may imply.
const MAX_AGE_YEARS: u32 = 135;
/// Adults are strictly older than this whole-year age.
const ADULT_AGE_YEARS: u32 = 18;

/// Stable identifier for every person record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type PersonId = Uuid;

/// Returns whether `value` looks like a plausible email address.
///
/// Format-level check only; deliverability is out of scope.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Validation errors raised by person constructors and setters.
///
/// Never caught inside core; the presentation layer surfaces them as
/// user-facing field feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonValidationError {
    /// Caller-provided id was the nil UUID.
    NilId,
    /// Value failed the email-format predicate.
    InvalidEmail(String),
    /// Birth date lies after the reference date.
    BirthDateInFuture(NaiveDate),
    /// Birth date implies an implausibly high age.
    AgeOutOfRange { date: NaiveDate, age: u32 },
}

impl Display for PersonValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "person id must not be nil"),
            Self::InvalidEmail(value) => write!(f, "email format is invalid: `{value}`"),
            Self::BirthDateInFuture(date) => write!(f, "birth date is in the future: {date}"),
            Self::AgeOutOfRange { date, age } => {
                write!(f, "birth date {date} implies implausible age {age}")
            }
        }
    }
}

impl Error for PersonValidationError {}

/// Canonical validated person record.
///
/// `first_name`/`last_name` are freely mutable presentation text; `email`
/// and `birth_date` only change through validating setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    uuid: PersonId,
    pub first_name: String,
    pub last_name: String,
    email: String,
    birth_date: NaiveDate,
}

/// Plain wire shape for person import/export.
///
/// Deserialization of [`Person`] runs through this shape and re-validates,
/// so invalid records cannot enter through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub uuid: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_date: NaiveDate,
}

impl From<Person> for PersonRecord {
    fn from(value: Person) -> Self {
        Self {
            uuid: value.uuid,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            birth_date: value.birth_date,
        }
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = PersonValidationError;

    fn try_from(value: PersonRecord) -> Result<Self, Self::Error> {
        Self::with_id(
            value.uuid,
            value.first_name,
            value.last_name,
            value.email,
            value.birth_date,
        )
    }
}

impl Person {
    /// Creates a record with a generated stable id, validated against the
    /// host's current local date.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<Self, PersonValidationError> {
        Self::new_as_of(first_name, last_name, email, birth_date, local_today())
    }

    /// Creates a record with a generated stable id, validated against an
    /// explicit reference date.
    pub fn new_as_of(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, PersonValidationError> {
        Self::with_id_as_of(
            Uuid::new_v4(),
            first_name,
            last_name,
            email,
            birth_date,
            today,
        )
    }

    /// Creates a record with a caller-provided stable id.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        uuid: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
    ) -> Result<Self, PersonValidationError> {
        Self::with_id_as_of(uuid, first_name, last_name, email, birth_date, local_today())
    }

    /// Creates a record with a caller-provided stable id, validated against
    /// an explicit reference date.
    ///
    /// # Errors
    /// - `NilId` when `uuid` is nil.
    /// - `InvalidEmail` when `email` fails the format predicate.
    /// - `BirthDateInFuture` / `AgeOutOfRange` when `birth_date` is not
    ///   plausible as of `today`.
    pub fn with_id_as_of(
        uuid: PersonId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, PersonValidationError> {
        if uuid.is_nil() {
            return Err(PersonValidationError::NilId);
        }
        let email = email.into();
        validate_email(&email)?;
        validate_birth_date(birth_date, today)?;

        Ok(Self {
            uuid,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email,
            birth_date,
        })
    }

    /// Stable record id.
    pub fn uuid(&self) -> PersonId {
        self.uuid
    }

    /// Stored email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Stored birth date.
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// Display name joined from first and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Replaces the stored email after format validation.
    ///
    /// On rejection the previously stored address is unchanged.
    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), PersonValidationError> {
        let value = value.into();
        validate_email(&value)?;
        self.email = value;
        Ok(())
    }

    /// Replaces the stored birth date, validated against the host's current
    /// local date.
    pub fn set_birth_date(&mut self, value: NaiveDate) -> Result<(), PersonValidationError> {
        self.set_birth_date_as_of(value, local_today())
    }

    /// Replaces the stored birth date, validated against an explicit
    /// reference date.
    ///
    /// On rejection the previously stored date is unchanged.
    pub fn set_birth_date_as_of(
        &mut self,
        value: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), PersonValidationError> {
        validate_birth_date(value, today)?;
        self.birth_date = value;
        Ok(())
    }

    /// Whole-year age as of `today`; `None` when `today` precedes the
    /// stored birth date.
    pub fn age_years_as_of(&self, today: NaiveDate) -> Option<u32> {
        age_in_years(self.birth_date, today)
    }

    /// Whole-year age as of the host's current local date.
    pub fn age_years(&self) -> u32 {
        self.age_years_as_of(local_today()).unwrap_or(0)
    }

    /// Tropical zodiac sign for the stored birth date.
    pub fn zodiac_sign(&self) -> ZodiacSign {
        ZodiacSign::for_date(self.birth_date)
    }

    /// Chinese zodiac animal for the stored birth year.
    pub fn chinese_zodiac_sign(&self) -> ChineseZodiac {
        ChineseZodiac::for_date(self.birth_date)
    }

    /// True iff the stored month and day equal `today`'s month and day;
    /// the year is ignored.
    pub fn is_birthday_as_of(&self, today: NaiveDate) -> bool {
        self.birth_date.month() == today.month() && self.birth_date.day() == today.day()
    }

    /// True iff today (host local date) is the stored month/day.
    pub fn is_birthday_today(&self) -> bool {
        self.is_birthday_as_of(local_today())
    }

    /// True iff the whole-year age as of `today` is strictly greater
    /// than 18.
    pub fn is_adult_as_of(&self, today: NaiveDate) -> bool {
        matches!(self.age_years_as_of(today), Some(age) if age > ADULT_AGE_YEARS)
    }

    /// True iff the whole-year age as of the host's current local date is
    /// strictly greater than 18.
    pub fn is_adult(&self) -> bool {
        self.is_adult_as_of(local_today())
    }
}

fn validate_email(value: &str) -> Result<(), PersonValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(PersonValidationError::InvalidEmail(value.to_string()))
    }
}

fn validate_birth_date(value: NaiveDate, today: NaiveDate) -> Result<(), PersonValidationError> {
    match age_in_years(value, today) {
        None => Err(PersonValidationError::BirthDateInFuture(value)),
        Some(age) if age > MAX_AGE_YEARS => {
            Err(PersonValidationError::AgeOutOfRange { date: value, age })
        }
        Some(_) => Ok(()),
    }
}
