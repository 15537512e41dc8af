//! Western and Chinese zodiac sign mapping.
//!
//! # Responsibility
//! - Map a Gregorian date onto its tropical (western) zodiac sign.
//! - Map a Gregorian year onto its Chinese zodiac animal.
//!
//! # Invariants
//! - Mapping is deterministic and table-driven; no clock access.
//! - The Chinese cycle is anchored on the Gregorian calendar year (1984 is
//!   a Rat year); lunar new-year boundaries are intentionally not modeled.

use chrono::{Datelike, NaiveDate};
use std::fmt::{Display, Formatter};

/// Tropical zodiac sign derived from month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Returns the sign whose date range contains `date` (year ignored).
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_month_day(date.month(), date.day())
    }

    fn for_month_day(month: u32, day: u32) -> Self {
        match month {
            1 => {
                if day <= 19 {
                    Self::Capricorn
                } else {
                    Self::Aquarius
                }
            }
            2 => {
                if day <= 18 {
                    Self::Aquarius
                } else {
                    Self::Pisces
                }
            }
            3 => {
                if day <= 20 {
                    Self::Pisces
                } else {
                    Self::Aries
                }
            }
            4 => {
                if day <= 19 {
                    Self::Aries
                } else {
                    Self::Taurus
                }
            }
            5 => {
                if day <= 20 {
                    Self::Taurus
                } else {
                    Self::Gemini
                }
            }
            6 => {
                if day <= 20 {
                    Self::Gemini
                } else {
                    Self::Cancer
                }
            }
            7 => {
                if day <= 22 {
                    Self::Cancer
                } else {
                    Self::Leo
                }
            }
            8 => {
                if day <= 22 {
                    Self::Leo
                } else {
                    Self::Virgo
                }
            }
            9 => {
                if day <= 22 {
                    Self::Virgo
                } else {
                    Self::Libra
                }
            }
            10 => {
                if day <= 22 {
                    Self::Libra
                } else {
                    Self::Scorpio
                }
            }
            11 => {
                if day <= 21 {
                    Self::Scorpio
                } else {
                    Self::Sagittarius
                }
            }
            _ => {
                if day <= 21 {
                    Self::Sagittarius
                } else {
                    Self::Capricorn
                }
            }
        }
    }

    /// Stable display string for UI binding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }
}

impl Display for ZodiacSign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chinese zodiac animal in twelve-year cycle order starting at Rat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChineseZodiac {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const CHINESE_CYCLE: [ChineseZodiac; 12] = [
    ChineseZodiac::Rat,
    ChineseZodiac::Ox,
    ChineseZodiac::Tiger,
    ChineseZodiac::Rabbit,
    ChineseZodiac::Dragon,
    ChineseZodiac::Snake,
    ChineseZodiac::Horse,
    ChineseZodiac::Goat,
    ChineseZodiac::Monkey,
    ChineseZodiac::Rooster,
    ChineseZodiac::Dog,
    ChineseZodiac::Pig,
];

impl ChineseZodiac {
    /// Returns the animal for a Gregorian calendar year.
    pub fn for_year(year: i32) -> Self {
        // Year 4 CE opens a Rat year in the sexagenary alignment used here.
        CHINESE_CYCLE[(year - 4).rem_euclid(12) as usize]
    }

    /// Returns the animal for the year containing `date`.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_year(date.year())
    }

    /// Stable display string for UI binding.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

impl Display for ChineseZodiac {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
