use chrono::NaiveDate;

use prayer_times::timetable::*;
use prayer_times::{compute, Error, GeoCoordinate, Method, Prayer};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Config ──

#[test]
fn test_default_config() {
    let c = TimetableConfig::default();
    assert_eq!(c.latitude, 21.4225);
    assert_eq!(c.longitude, 39.8262);
    assert_eq!(c.tz_offset_minutes, -180);
    assert_eq!(c.method, Method::MuslimWorldLeague);
    assert_eq!(c.start, date(2024, 3, 1));
    assert_eq!(c.days, 30);
}

#[test]
fn test_month_config_lengths() {
    let mecca = GeoCoordinate::new(21.4225, 39.8262).unwrap();
    let cases: &[(i32, u32, u32)] = &[(2024, 2, 29), (2023, 2, 28), (2024, 4, 30), (2024, 12, 31)];
    for &(year, month, days) in cases {
        let c = month_config(mecca, -180, Method::UmmAlQura, year, month).unwrap();
        assert_eq!(c.days, days, "{}-{}", year, month);
        assert_eq!(c.start, date(year, month, 1));
        assert_eq!(c.method, Method::UmmAlQura);
    }
}

#[test]
fn test_month_config_rejects_bad_month() {
    let mecca = GeoCoordinate::new(21.4225, 39.8262).unwrap();
    for month in [0, 13] {
        let err = month_config(mecca, -180, Method::MuslimWorldLeague, 2024, month).unwrap_err();
        assert!(matches!(err, Error::InvalidDate { month: m, .. } if m == month));
    }
}

// ── Calendar helpers ──

#[test]
fn test_leap_years() {
    assert!(leap_year(2024));
    assert!(leap_year(2000));
    assert!(!leap_year(1900));
    assert!(!leap_year(2023));
}

#[test]
fn test_days_in_month() {
    let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    for (i, &exp) in expected.iter().enumerate() {
        assert_eq!(days_in_month(2023, i as u32 + 1), Some(exp));
    }
    assert_eq!(days_in_month(2024, 2), Some(29));
    assert_eq!(days_in_month(2024, 13), None);
}

#[test]
fn test_known_time_conversions() {
    assert_eq!(minutes_to_time(0), (0, 0));
    assert_eq!(minutes_to_time(720), (12, 0));
    assert_eq!(minutes_to_time(1439), (23, 59));
    assert_eq!(minutes_to_time(390), (6, 30));
}

// ── Generation ──

#[test]
fn test_generate_default_table() {
    let table = generate_timetable(&TimetableConfig::default()).unwrap();
    assert_eq!(table.days.len(), 30);
    assert_eq!(table.metadata.total_days, 30);
    assert_eq!(table.metadata.unreliable_days, 0);
    assert_eq!(table.days[0].date, date(2024, 3, 1));
    assert_eq!(table.days[29].date, date(2024, 3, 30));
    assert!(table.days.iter().all(|d| d.times.is_ordered()));
}

#[test]
fn test_entries_match_single_day_compute() {
    let config = TimetableConfig::default();
    let table = generate_timetable(&config).unwrap();
    let mecca = GeoCoordinate::new(config.latitude, config.longitude).unwrap();
    for entry in &table.days {
        let single = compute(entry.date, mecca, -180, Method::MuslimWorldLeague).unwrap();
        assert_eq!(entry.times, single, "{}", entry.date);
    }
}

#[test]
fn test_lookup() {
    let table = generate_timetable(&TimetableConfig::default()).unwrap();
    let equinox = table.lookup(date(2024, 3, 21)).unwrap();
    assert_eq!(equinox, &table.days[20].times);
    assert!(table.lookup(date(2024, 2, 29)).is_none());
    assert!(table.lookup(date(2024, 3, 31)).is_none());
}

#[test]
fn test_dhuhr_drifts_slowly() {
    let table = generate_timetable(&TimetableConfig::default()).unwrap();
    for pair in table.days.windows(2) {
        let a = pair[0].times.dhuhr.naive_local().time();
        let b = pair[1].times.dhuhr.naive_local().time();
        let drift = (b - a).num_seconds().abs();
        assert!(drift < 40, "{} -> {}: {} s", pair[0].date, pair[1].date, drift);
    }
}

#[test]
fn test_polar_month_flags_unreliable_days() {
    let tromso = GeoCoordinate::new(69.65, 18.96).unwrap();
    let config = month_config(tromso, -60, Method::MuslimWorldLeague, 2024, 12).unwrap();
    let table = generate_timetable(&config).unwrap();
    assert_eq!(table.metadata.total_days, 31);
    assert!(table.metadata.unreliable_days > 20);
}

#[test]
fn test_invalid_location_rejected() {
    let config = TimetableConfig {
        latitude: 95.0,
        ..TimetableConfig::default()
    };
    assert!(matches!(
        generate_timetable(&config),
        Err(Error::InvalidLatitude { .. })
    ));
}

#[test]
fn test_empty_range() {
    let config = TimetableConfig {
        days: 0,
        ..TimetableConfig::default()
    };
    let table = generate_timetable(&config).unwrap();
    assert!(table.days.is_empty());
    assert_eq!(table.metadata.total_days, 0);
}

#[test]
fn test_day_count_stops_at_calendar_end() {
    let config = TimetableConfig {
        start: NaiveDate::MAX.pred_opt().unwrap().pred_opt().unwrap(),
        days: u32::MAX,
        ..TimetableConfig::default()
    };
    match generate_timetable(&config) {
        Ok(table) => assert!(table.days.len() <= 3),
        Err(err) => assert!(matches!(err, Error::TimestampOutOfRange), "{}", err),
    }
}

#[test]
fn test_invalid_custom_method_rejected() {
    let config = TimetableConfig {
        method: Method::Custom(prayer_times::CalculationMethod {
            fajr_angle: 18.0,
            isha: prayer_times::IshaRule::MinutesAfterMaghrib(-10.0),
        }),
        ..TimetableConfig::default()
    };
    assert!(matches!(
        generate_timetable(&config),
        Err(Error::InvalidMethod { field: "isha_minutes", .. })
    ));
}

// ── Compact form ──

#[test]
fn test_compact_rows() {
    let table = generate_timetable(&TimetableConfig::default()).unwrap();
    let rows = timetable_to_compact(&table);
    assert_eq!(rows.len(), 30);
    assert_eq!(
        rows[20],
        ["05:09", "06:23", "12:27", "15:52", "18:31", "19:41"].map(String::from)
    );
}

#[test]
fn test_format_hhmm_truncates_seconds() {
    let table = generate_timetable(&TimetableConfig::default()).unwrap();
    let times = table.lookup(date(2024, 3, 21)).unwrap();
    // Dhuhr is 12:27:54.
    assert_eq!(format_hhmm(&times.get(Prayer::Dhuhr)), "12:27");
}
