//! Facility configuration and next-available-date search.
//!
//! A [`Facility`] is open on a fixed set of weekdays, each with a slot
//! capacity, and closed on the days its holiday calendar reports. Given a
//! [`SearchWindow`], [`Facility::find_available`] scans calendar days in
//! ascending order and returns the first open one, keeping the suggested
//! time-of-day.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::error::{FacilityError, Result};
use crate::holidays::{HolidayCalendar, HolidayEntry, Holidays};
use crate::search::{SearchWindow, Span};
use crate::weekday::{weekday_code, DaySpec};

/// Capacity given to every configured day when no slot counts are supplied.
pub const UNLIMITED_SLOTS: u32 = 99_999;

/// Facility configuration as loaded from settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilityConfig {
    pub name: String,
    /// Open weekdays, in display order.
    pub days: Vec<DaySpec>,
    /// Slots per open day, parallel to `days`. Defaults to [`UNLIMITED_SLOTS`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slots: Option<Vec<u32>>,
    /// Never search before the suggested date. Defaults to `true`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forward_only: Option<bool>,
    /// Entries for the default in-memory holiday calendar.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub holidays: Vec<HolidayEntry>,
}

impl FacilityConfig {
    pub fn new<D: Into<DaySpec>>(
        name: impl Into<String>,
        days: impl IntoIterator<Item = D>,
    ) -> Self {
        Self {
            name: name.into(),
            days: days.into_iter().map(Into::into).collect(),
            slots: None,
            forward_only: None,
            holidays: Vec::new(),
        }
    }

    pub fn with_slots(mut self, slots: impl IntoIterator<Item = u32>) -> Self {
        self.slots = Some(slots.into_iter().collect());
        self
    }

    pub fn with_forward_only(mut self, forward_only: bool) -> Self {
        self.forward_only = Some(forward_only);
        self
    }

    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = HolidayEntry>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Parse a configuration from JSON.
    ///
    /// ```
    /// use facility_engine::FacilityConfig;
    ///
    /// let config = FacilityConfig::from_json(
    ///     r#"{"name": "clinic", "days": ["MO", 2, "Friday"], "forward_only": false}"#,
    /// )
    /// .unwrap();
    /// assert_eq!(config.days.len(), 3);
    /// assert_eq!(config.forward_only, Some(false));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Why a candidate day was passed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Closed,
    Holiday,
    Taken,
    Full,
}

/// A scheduling facility: open weekdays with capacities, plus a holiday calendar.
#[derive(Debug, Clone)]
pub struct Facility<H = Holidays> {
    name: String,
    schedule: Vec<(Weekday, u32)>,
    forward_only: bool,
    holidays: H,
}

impl Facility<Holidays> {
    /// Build a facility whose holidays come from `config.holidays`.
    ///
    /// # Errors
    ///
    /// See [`Facility::with_holidays`].
    pub fn new(config: &FacilityConfig) -> Result<Self> {
        let holidays = Holidays::new(config.holidays.iter().cloned());
        Self::with_holidays(config, holidays)
    }
}

impl<H: HolidayCalendar> Facility<H> {
    /// Build a facility around an external holiday calendar.
    ///
    /// `config.holidays` is ignored; `holidays` is the only holiday source.
    ///
    /// # Errors
    ///
    /// - [`FacilityError::InvalidWeekday`] if a day cannot be resolved.
    /// - [`FacilityError::DuplicateWeekday`] if a weekday appears twice.
    /// - [`FacilityError::SlotCountMismatch`] if `slots` and `days` differ in length.
    pub fn with_holidays(config: &FacilityConfig, holidays: H) -> Result<Self> {
        let schedule = resolve_schedule(config)?;
        Ok(Self {
            name: config.name.clone(),
            schedule,
            forward_only: config.forward_only.unwrap_or(true),
            holidays,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn forward_only(&self) -> bool {
        self.forward_only
    }

    /// Open weekdays paired with their slot capacity, in configuration order.
    pub fn schedule(&self) -> &[(Weekday, u32)] {
        &self.schedule
    }

    pub fn weekdays(&self) -> Vec<Weekday> {
        self.schedule.iter().map(|(day, _)| *day).collect()
    }

    /// Whether `weekday` is one of the configured open days.
    pub fn is_open_on(&self, weekday: Weekday) -> bool {
        self.schedule.iter().any(|(day, _)| *day == weekday)
    }

    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    pub fn is_holiday(&self, date_utc: DateTime<Utc>) -> bool {
        self.holidays.is_holiday(date_utc.date_naive())
    }

    /// Configured capacity for `weekday`; zero when the facility is closed that day.
    pub fn slots_for_weekday(&self, weekday: Weekday) -> u32 {
        self.schedule
            .iter()
            .find(|(day, _)| *day == weekday)
            .map_or(0, |(_, slots)| *slots)
    }

    /// Whether `candidate` still has a free slot.
    ///
    /// Bookings are not counted against capacity, so this always holds.
    pub fn has_open_slot(&self, _candidate: DateTime<Utc>) -> bool {
        true
    }

    /// Find the first open datetime in `window`, reading "now" from the system clock.
    pub fn find_available(&self, window: &SearchWindow) -> Option<DateTime<Utc>> {
        self.find_available_at(window, &SystemClock)
    }

    /// Find the first open datetime in `window`.
    ///
    /// The scan covers UTC calendar days from `suggested - backward` up to, but
    /// not including, the day of `suggested + forward`. The backward span is
    /// ignored when the facility is forward-only. A day qualifies when its
    /// weekday is open, it is not a holiday, no taken datetime falls on it and
    /// [`has_open_slot`](Self::has_open_slot) holds. The result carries the
    /// suggested UTC time-of-day.
    ///
    /// Returns `None` when no day qualifies.
    pub fn find_available_at(
        &self,
        window: &SearchWindow,
        clock: &impl Clock,
    ) -> Option<DateTime<Utc>> {
        let suggested = window.suggested.unwrap_or_else(|| clock.now());
        let forward = window.forward.unwrap_or_default();
        let backward = if self.forward_only {
            Span::ZERO
        } else {
            window.backward.unwrap_or(Span::ZERO)
        };

        let (Some(minimum), Some(maximum)) =
            (backward.before(suggested), forward.after(suggested))
        else {
            debug!(facility = %self.name, %suggested, "search window out of calendar range");
            return None;
        };

        let taken = window.taken_dates();
        let time = suggested.time();
        let end = maximum.date_naive();

        debug!(
            facility = %self.name,
            %suggested,
            %minimum,
            %maximum,
            taken = taken.len(),
            "searching for available date"
        );

        let found = minimum
            .date_naive()
            .iter_days()
            .take_while(|day| *day < end)
            .map(|day| day.and_time(time).and_utc())
            .find(|candidate| match self.rejection(*candidate, &taken) {
                None => true,
                Some(reason) => {
                    trace!(facility = %self.name, %candidate, ?reason, "candidate rejected");
                    false
                }
            });

        match found {
            Some(available) => debug!(facility = %self.name, %available, "found available date"),
            None => debug!(facility = %self.name, "no available date in window"),
        }
        found
    }

    fn rejection(
        &self,
        candidate: DateTime<Utc>,
        taken: &BTreeSet<NaiveDate>,
    ) -> Option<Rejection> {
        if !self.is_open_on(candidate.weekday()) {
            Some(Rejection::Closed)
        } else if self.is_holiday(candidate) {
            Some(Rejection::Holiday)
        } else if taken.contains(&candidate.date_naive()) {
            Some(Rejection::Taken)
        } else if !self.has_open_slot(candidate) {
            Some(Rejection::Full)
        } else {
            None
        }
    }
}

impl<H> fmt::Display for Facility<H> {
    /// `Clinic MO(99999 slots), WE(10 slots)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self
            .schedule
            .iter()
            .map(|(day, slots)| format!("{}({} slots)", weekday_code(*day), slots))
            .collect();
        write!(f, "{} {}", title_case(&self.name), days.join(", "))
    }
}

fn resolve_schedule(config: &FacilityConfig) -> Result<Vec<(Weekday, u32)>> {
    let slots = match &config.slots {
        Some(slots) if slots.len() != config.days.len() => {
            return Err(FacilityError::SlotCountMismatch {
                days: config.days.len(),
                slots: slots.len(),
            });
        }
        Some(slots) => slots.clone(),
        None => vec![UNLIMITED_SLOTS; config.days.len()],
    };

    let mut schedule: Vec<(Weekday, u32)> = Vec::with_capacity(config.days.len());
    for (spec, slots) in config.days.iter().zip(slots) {
        let day = spec.resolve()?;
        if schedule.iter().any(|(existing, _)| *existing == day) {
            return Err(FacilityError::DuplicateWeekday(weekday_code(day).to_string()));
        }
        schedule.push((day, slots));
    }
    Ok(schedule)
}

/// Uppercase the first letter of every word, lowercase the rest.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(c);
            word_start = true;
        }
    }
    out
}
