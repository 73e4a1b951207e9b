//! Search window for availability queries.
//!
//! A [`SearchWindow`] is built per query and describes where to look: the
//! suggested datetime, how far forward and backward to scan, and which dates
//! are already taken. All datetimes are normalised to UTC on the way in.

use std::collections::BTreeSet;

use chrono::{DateTime, Days, Months, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// A calendar horizon measured from the suggested datetime.
///
/// Month spans use calendar arithmetic: one month after January 31st is the
/// last day of February.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Span {
    Days(u32),
    Weeks(u32),
    Months(u32),
}

impl Span {
    pub const ZERO: Span = Span::Days(0);

    /// `dt` moved forward by this span, or `None` past the end of the calendar.
    pub fn after(self, dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Span::Days(n) => dt.checked_add_days(Days::new(u64::from(n))),
            Span::Weeks(n) => dt.checked_add_days(Days::new(u64::from(n) * 7)),
            Span::Months(n) => dt.checked_add_months(Months::new(n)),
        }
    }

    /// `dt` moved backward by this span, or `None` before the start of the calendar.
    pub fn before(self, dt: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Span::Days(n) => dt.checked_sub_days(Days::new(u64::from(n))),
            Span::Weeks(n) => dt.checked_sub_days(Days::new(u64::from(n) * 7)),
            Span::Months(n) => dt.checked_sub_months(Months::new(n)),
        }
    }
}

impl Default for Span {
    /// One month, the default forward horizon.
    fn default() -> Self {
        Span::Months(1)
    }
}

/// Parameters of a single availability search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchWindow {
    /// Where to centre the search. `None` means "now", read from the clock.
    pub suggested: Option<DateTime<Utc>>,
    /// Forward horizon; one month when `None`.
    pub forward: Option<Span>,
    /// Backward horizon; zero when `None`. Ignored by forward-only facilities.
    pub backward: Option<Span>,
    /// Datetimes already booked. Only their UTC calendar date matters.
    pub taken: Vec<DateTime<Utc>>,
}

impl SearchWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centre the search on `suggested`, converted to UTC.
    ///
    /// The time-of-day carried into every candidate is the UTC time-of-day.
    pub fn at<Tz: TimeZone>(mut self, suggested: DateTime<Tz>) -> Self {
        self.suggested = Some(suggested.with_timezone(&Utc));
        self
    }

    pub fn forward(mut self, span: Span) -> Self {
        self.forward = Some(span);
        self
    }

    pub fn backward(mut self, span: Span) -> Self {
        self.backward = Some(span);
        self
    }

    /// Add already-booked datetimes, in any timezone.
    pub fn taken<Tz, I>(mut self, taken: I) -> Self
    where
        Tz: TimeZone,
        I: IntoIterator<Item = DateTime<Tz>>,
    {
        self.taken
            .extend(taken.into_iter().map(|dt| dt.with_timezone(&Utc)));
        self
    }

    /// The UTC calendar dates of all taken datetimes.
    pub fn taken_dates(&self) -> BTreeSet<NaiveDate> {
        self.taken.iter().map(|dt| dt.date_naive()).collect()
    }
}
