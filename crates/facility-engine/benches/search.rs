use chrono::{Duration, NaiveDate, TimeZone, Utc, Weekday};
use criterion::{criterion_group, criterion_main, Criterion};
use facility_engine::{Facility, FacilityConfig, Holidays, SearchWindow, Span};
use std::hint::black_box;

fn bench_find_available(c: &mut Criterion) {
    let suggested = Utc.with_ymd_and_hms(2026, 3, 17, 10, 0, 0).unwrap();

    let weekly = Facility::new(&FacilityConfig::new(
        "clinic",
        [Weekday::Mon, Weekday::Wed, Weekday::Fri],
    ))
    .unwrap();
    let window = SearchWindow::new().at(suggested);
    c.bench_function("find_available_next_day", |b| {
        b.iter(|| weekly.find_available(black_box(&window)))
    });

    // Worst case: every open day in a year-long window is a holiday or taken.
    let start = NaiveDate::from_ymd_opt(2026, 3, 17).unwrap();
    let holidays = Holidays::from_dates(start.iter_days().step_by(2).take(190));
    let saturated = Facility::with_holidays(
        &FacilityConfig::new("clinic", [0u8, 1, 2, 3, 4, 5, 6]),
        holidays,
    )
    .unwrap();
    let taken: Vec<_> = (1..380)
        .step_by(2)
        .map(|d| suggested + Duration::days(d))
        .collect();
    let window = SearchWindow::new()
        .at(suggested)
        .forward(Span::Months(12))
        .taken(taken);
    c.bench_function("find_available_exhausted_year", |b| {
        b.iter(|| saturated.find_available(black_box(&window)))
    });
}

criterion_group!(benches, bench_find_available);
criterion_main!(benches);
