//! Weekday specifications as they appear in facility configuration.
//!
//! A configured day may arrive as a `chrono::Weekday`, an index (0 = Monday
//! through 6 = Sunday) or a name (`"MO"`, `"Tue"`, `"wednesday"`). All forms
//! are resolved to a [`Weekday`] once, when the facility is built.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{FacilityError, Result};

/// One configured day, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDay", into = "RawDay")]
pub enum DaySpec {
    Weekday(Weekday),
    /// Days from Monday: 0 = Monday, 6 = Sunday.
    Index(u8),
    /// Two-letter iCalendar code, three-letter abbreviation or full name.
    Name(String),
}

impl DaySpec {
    /// Resolve to a concrete weekday.
    ///
    /// # Errors
    ///
    /// Returns [`FacilityError::InvalidWeekday`] for an index above 6 or a
    /// name that is not a weekday.
    pub fn resolve(&self) -> Result<Weekday> {
        match self {
            DaySpec::Weekday(day) => Ok(*day),
            DaySpec::Index(index) => weekday_from_index(*index),
            DaySpec::Name(name) => parse_weekday(name),
        }
    }
}

impl From<Weekday> for DaySpec {
    fn from(day: Weekday) -> Self {
        DaySpec::Weekday(day)
    }
}

impl From<u8> for DaySpec {
    fn from(index: u8) -> Self {
        DaySpec::Index(index)
    }
}

impl From<&str> for DaySpec {
    fn from(name: &str) -> Self {
        DaySpec::Name(name.to_string())
    }
}

// Wire shape: a bare integer or a bare string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDay {
    Index(u8),
    Name(String),
}

impl From<RawDay> for DaySpec {
    fn from(raw: RawDay) -> Self {
        match raw {
            RawDay::Index(index) => DaySpec::Index(index),
            RawDay::Name(name) => DaySpec::Name(name),
        }
    }
}

impl From<DaySpec> for RawDay {
    fn from(spec: DaySpec) -> Self {
        match spec {
            DaySpec::Weekday(day) => RawDay::Name(weekday_code(day).to_string()),
            DaySpec::Index(index) => RawDay::Index(index),
            DaySpec::Name(name) => RawDay::Name(name),
        }
    }
}

/// Map an index counted from Monday to a weekday.
pub fn weekday_from_index(index: u8) -> Result<Weekday> {
    Weekday::try_from(index).map_err(|_| FacilityError::InvalidWeekday(index.to_string()))
}

/// Parse a weekday name, case-insensitively.
///
/// Accepts iCalendar codes (`MO` … `SU`) in addition to everything
/// `chrono::Weekday::from_str` accepts (`Mon`, `Monday`, …).
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    let trimmed = name.trim();
    let day = match trimmed.to_ascii_uppercase().as_str() {
        "MO" => Weekday::Mon,
        "TU" => Weekday::Tue,
        "WE" => Weekday::Wed,
        "TH" => Weekday::Thu,
        "FR" => Weekday::Fri,
        "SA" => Weekday::Sat,
        "SU" => Weekday::Sun,
        _ => trimmed
            .parse::<Weekday>()
            .map_err(|_| FacilityError::InvalidWeekday(name.to_string()))?,
    };
    Ok(day)
}

/// Two-letter iCalendar code for a weekday (`MO`, `TU`, …).
pub fn weekday_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MO",
        Weekday::Tue => "TU",
        Weekday::Wed => "WE",
        Weekday::Thu => "TH",
        Weekday::Fri => "FR",
        Weekday::Sat => "SA",
        Weekday::Sun => "SU",
    }
}
