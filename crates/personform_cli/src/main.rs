//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `personform_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use personform_core::Person;

fn main() {
    println!("personform_core ping={}", personform_core::ping());
    println!("personform_core version={}", personform_core::core_version());

    let Some(birth_date) = NaiveDate::from_ymd_opt(2000, 1, 1) else {
        println!("demo birth date out of range");
        return;
    };
    match Person::new("Ann", "Lee", "ann@example.com", birth_date) {
        Ok(person) => println!(
            "demo person={} zodiac={} chinese_zodiac={} adult={}",
            person.full_name(),
            person.zodiac_sign(),
            person.chinese_zodiac_sign(),
            person.is_adult()
        ),
        Err(err) => println!("demo person rejected: {err}"),
    }
}
