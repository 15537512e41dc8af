//! Person editor view-model.
//!
//! Owns a [`Person`] and a [`ChangeNotifier`]; every successful mutation
//! notifies the changed property plus the derived properties whose
//! displayed values depend on it.

use crate::calendar::age::local_today;
use crate::calendar::zodiac::{ChineseZodiac, ZodiacSign};
use crate::model::person::{Person, PersonValidationError};
use crate::notify::change_notifier::{ChangeNotifier, ObserverId, PropertyObserver};
use chrono::NaiveDate;
use log::{debug, warn};
use std::sync::Arc;

/// Stable binding key for the first-name property.
pub const PROP_FIRST_NAME: &str = "first_name";
/// Stable binding key for the last-name property.
pub const PROP_LAST_NAME: &str = "last_name";
/// Stable binding key for the email property.
pub const PROP_EMAIL: &str = "email";
/// Stable binding key for the birth-date property.
pub const PROP_BIRTH_DATE: &str = "birth_date";
/// Stable binding key for the derived zodiac-sign property.
pub const PROP_ZODIAC_SIGN: &str = "zodiac_sign";
/// Stable binding key for the derived Chinese-zodiac property.
pub const PROP_CHINESE_ZODIAC_SIGN: &str = "chinese_zodiac_sign";
/// Stable binding key for the derived adult-status property.
pub const PROP_IS_ADULT: &str = "is_adult";
/// Stable binding key for the derived birthday-today property.
pub const PROP_IS_BIRTHDAY_TODAY: &str = "is_birthday_today";

/// Derived properties recomputed whenever the birth date changes.
const BIRTH_DATE_DEPENDENT_PROPS: [&str; 4] = [
    PROP_ZODIAC_SIGN,
    PROP_CHINESE_ZODIAC_SIGN,
    PROP_IS_ADULT,
    PROP_IS_BIRTHDAY_TODAY,
];

/// View-model over one editable person record.
pub struct PersonViewModel {
    person: Person,
    notifier: ChangeNotifier,
}

impl PersonViewModel {
    /// Wraps an already-validated record.
    pub fn new(person: Person) -> Self {
        Self {
            person,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Read access to the underlying record.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Registers one property-change observer.
    pub fn subscribe(&mut self, observer: Arc<dyn PropertyObserver>) -> ObserverId {
        self.notifier.subscribe(observer)
    }

    /// Removes one property-change observer by id.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.notifier.unsubscribe(id)
    }

    pub fn first_name(&self) -> &str {
        &self.person.first_name
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) {
        self.person.first_name = value.into();
        self.raise(PROP_FIRST_NAME);
    }

    pub fn last_name(&self) -> &str {
        &self.person.last_name
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) {
        self.person.last_name = value.into();
        self.raise(PROP_LAST_NAME);
    }

    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Replaces the email through the validating setter.
    ///
    /// On rejection nothing is stored and nothing is notified.
    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), PersonValidationError> {
        if let Err(err) = self.person.set_email(value) {
            warn!("event=person_update_rejected module=viewmodel field=email status=invalid");
            return Err(err);
        }
        self.raise(PROP_EMAIL);
        Ok(())
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.person.birth_date()
    }

    /// Replaces the birth date, validated against the host's current local
    /// date.
    pub fn set_birth_date(&mut self, value: NaiveDate) -> Result<(), PersonValidationError> {
        self.set_birth_date_as_of(value, local_today())
    }

    /// Replaces the birth date, validated against an explicit reference
    /// date.
    ///
    /// On success notifies `birth_date` plus every derived calendar
    /// property; on rejection nothing is stored and nothing is notified.
    pub fn set_birth_date_as_of(
        &mut self,
        value: NaiveDate,
        today: NaiveDate,
    ) -> Result<(), PersonValidationError> {
        if let Err(err) = self.person.set_birth_date_as_of(value, today) {
            warn!("event=person_update_rejected module=viewmodel field=birth_date status=invalid");
            return Err(err);
        }
        self.raise(PROP_BIRTH_DATE);
        for property in BIRTH_DATE_DEPENDENT_PROPS {
            self.raise(property);
        }
        Ok(())
    }

    pub fn zodiac_sign(&self) -> ZodiacSign {
        self.person.zodiac_sign()
    }

    pub fn chinese_zodiac_sign(&self) -> ChineseZodiac {
        self.person.chinese_zodiac_sign()
    }

    pub fn is_adult(&self) -> bool {
        self.person.is_adult()
    }

    pub fn is_adult_as_of(&self, today: NaiveDate) -> bool {
        self.person.is_adult_as_of(today)
    }

    pub fn is_birthday_today(&self) -> bool {
        self.person.is_birthday_today()
    }

    pub fn is_birthday_as_of(&self, today: NaiveDate) -> bool {
        self.person.is_birthday_as_of(today)
    }

    pub fn age_years(&self) -> u32 {
        self.person.age_years()
    }

    pub fn age_years_as_of(&self, today: NaiveDate) -> Option<u32> {
        self.person.age_years_as_of(today)
    }

    fn raise(&self, property: &str) {
        debug!("event=property_changed module=viewmodel property={property}");
        self.notifier.notify(property);
    }
}
