//! Core presentation-model logic for PersonForm.
//! This crate is the single source of truth for record validation invariants.

pub mod calendar;
pub mod command;
pub mod logging;
pub mod model;
pub mod notify;
pub mod viewmodel;

pub use calendar::age::{age_in_years, local_today};
pub use calendar::zodiac::{ChineseZodiac, ZodiacSign};
pub use command::relay_command::RelayCommand;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::person::{is_valid_email, Person, PersonId, PersonRecord, PersonValidationError};
pub use notify::change_notifier::{ChangeNotifier, ObserverId, PropertyObserver};
pub use viewmodel::person_view_model::{
    PersonViewModel, PROP_BIRTH_DATE, PROP_CHINESE_ZODIAC_SIGN, PROP_EMAIL, PROP_FIRST_NAME,
    PROP_IS_ADULT, PROP_IS_BIRTHDAY_TODAY, PROP_LAST_NAME, PROP_ZODIAC_SIGN,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
