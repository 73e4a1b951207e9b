//! # facility-engine
//!
//! Next-available appointment search for scheduling facilities.
//!
//! A facility (a clinic, a lab, a pharmacy) is open on certain weekdays, each
//! with a slot capacity, and closed on holidays. Given a suggested datetime,
//! a search window and the datetimes already booked, the engine returns the
//! earliest open datetime at the same time-of-day, or `None`.
//!
//! ```
//! use chrono::{TimeZone, Utc, Weekday};
//! use facility_engine::{Facility, FacilityConfig, SearchWindow};
//!
//! let config = FacilityConfig::new("clinic", [Weekday::Mon, Weekday::Wed, Weekday::Fri]);
//! let facility = Facility::new(&config).unwrap();
//!
//! // Tuesday 2026-03-17 10:30 UTC → Wednesday 2026-03-18 10:30 UTC
//! let tuesday = Utc.with_ymd_and_hms(2026, 3, 17, 10, 30, 0).unwrap();
//! let found = facility.find_available(&SearchWindow::new().at(tuesday));
//! assert_eq!(found, Some(Utc.with_ymd_and_hms(2026, 3, 18, 10, 30, 0).unwrap()));
//! ```
//!
//! ## Modules
//!
//! - [`facility`] — `FacilityConfig`, `Facility` and the availability search
//! - [`search`] — `SearchWindow` and `Span` horizons
//! - [`holidays`] — the `HolidayCalendar` collaborator and an in-memory calendar
//! - [`weekday`] — weekday specifications in configuration
//! - [`clock`] — injectable time sources
//! - [`error`] — Error types

pub mod clock;
pub mod error;
pub mod facility;
pub mod holidays;
pub mod search;
pub mod weekday;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::FacilityError;
pub use facility::{Facility, FacilityConfig, UNLIMITED_SLOTS};
pub use holidays::{HolidayCalendar, HolidayEntry, Holidays, NoHolidays};
pub use search::{SearchWindow, Span};
pub use weekday::DaySpec;
