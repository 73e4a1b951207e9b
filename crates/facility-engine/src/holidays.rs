//! Holiday collaborator.
//!
//! The facility asks one question of its holiday source: is this UTC calendar
//! date closed? [`HolidayCalendar`] is that seam. [`Holidays`] is an in-memory
//! calendar built from configuration entries; loading those entries from a
//! file or database is left to the caller.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Answers whether a UTC calendar date is a holiday.
pub trait HolidayCalendar {
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayCalendar for F
where
    F: Fn(NaiveDate) -> bool,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

/// A calendar with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHolidays;

impl HolidayCalendar for NoHolidays {
    fn is_holiday(&self, _date: NaiveDate) -> bool {
        false
    }
}

/// A single configured holiday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The (first) date of the holiday.
    pub date: NaiveDate,
    /// Display name, e.g. "New Year's Day".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// When true the holiday repeats every year on the same month and day.
    #[serde(default)]
    pub recurring: bool,
}

impl HolidayEntry {
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            name: None,
            recurring: false,
        }
    }

    pub fn named(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: Some(name.into()),
            recurring: false,
        }
    }

    pub fn annual(mut self) -> Self {
        self.recurring = true;
        self
    }
}

/// In-memory holiday calendar.
///
/// Fixed-date entries are keyed by date. Recurring entries are keyed by
/// (month, day) and match from their first year onwards, so a recurring
/// February 29th only closes leap years.
#[derive(Debug, Clone, Default)]
pub struct Holidays {
    fixed: BTreeMap<NaiveDate, Option<String>>,
    recurring: HashMap<(u32, u32), (i32, Option<String>)>,
}

impl Holidays {
    pub fn new(entries: impl IntoIterator<Item = HolidayEntry>) -> Self {
        let mut holidays = Self::default();
        for entry in entries {
            holidays.insert(entry);
        }
        holidays
    }

    /// Build a calendar of unnamed, non-recurring holidays.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self::new(dates.into_iter().map(HolidayEntry::on))
    }

    pub fn insert(&mut self, entry: HolidayEntry) {
        if entry.recurring {
            let key = (entry.date.month(), entry.date.day());
            let first_year = entry.date.year();
            // Keep the earliest first year when the same month/day repeats.
            let keep_existing =
                matches!(self.recurring.get(&key), Some((year, _)) if *year <= first_year);
            if !keep_existing {
                self.recurring.insert(key, (first_year, entry.name));
            }
        } else {
            self.fixed.insert(entry.date, entry.name);
        }
    }

    /// Number of configured entries (fixed plus recurring).
    pub fn len(&self) -> usize {
        self.fixed.len() + self.recurring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured name of the holiday on `date`, if it is a named holiday.
    pub fn name_of(&self, date: NaiveDate) -> Option<&str> {
        if let Some(name) = self.fixed.get(&date) {
            return name.as_deref();
        }
        self.recurring_on(date).and_then(|name| name.as_deref())
    }

    fn recurring_on(&self, date: NaiveDate) -> Option<&Option<String>> {
        self.recurring
            .get(&(date.month(), date.day()))
            .filter(|(first_year, _)| date.year() >= *first_year)
            .map(|(_, name)| name)
    }
}

impl HolidayCalendar for Holidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.fixed.contains_key(&date) || self.recurring_on(date).is_some()
    }
}

impl FromIterator<HolidayEntry> for Holidays {
    fn from_iter<I: IntoIterator<Item = HolidayEntry>>(iter: I) -> Self {
        Self::new(iter)
    }
}
