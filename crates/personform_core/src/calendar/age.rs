//! Whole-year age calculation.

use chrono::{Local, NaiveDate};

/// Returns the number of whole years between `birth_date` and `today`.
///
/// Returns `None` when `today` precedes `birth_date`; callers treat that as
/// a not-yet-born (invalid) state rather than a negative age.
pub fn age_in_years(birth_date: NaiveDate, today: NaiveDate) -> Option<u32> {
    today.years_since(birth_date)
}

/// Returns the host's current calendar date in local time.
///
/// Kept as the single clock access point so every other calendar function
/// stays pure and testable.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::age_in_years;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn counts_whole_years_only() {
        let birth = date(2000, 1, 1);
        assert_eq!(age_in_years(birth, date(2024, 6, 1)), Some(24));
        assert_eq!(age_in_years(birth, date(2024, 1, 1)), Some(24));
        assert_eq!(age_in_years(birth, date(2023, 12, 31)), Some(23));
    }

    #[test]
    fn same_day_is_age_zero() {
        let birth = date(2024, 6, 1);
        assert_eq!(age_in_years(birth, birth), Some(0));
    }

    #[test]
    fn future_birth_date_has_no_age() {
        assert_eq!(age_in_years(date(2030, 1, 1), date(2024, 6, 1)), None);
    }

    #[test]
    fn leap_day_birthday_rolls_over_on_march_first() {
        let birth = date(2004, 2, 29);
        assert_eq!(age_in_years(birth, date(2023, 2, 28)), Some(18));
        assert_eq!(age_in_years(birth, date(2023, 3, 1)), Some(19));
    }
}
