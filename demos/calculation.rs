use chrono::{NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Asia::Riyadh;

use prayer_times::{compute, format_hhmm, GeoCoordinate, Method, Prayer};

fn main() {
    let latitude = 21.4225;
    let longitude = 39.8262;
    let coords = GeoCoordinate::new(latitude, longitude).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 21).unwrap();

    // Minutes the local clock is behind UTC, as the host platform reports it.
    let midnight = Riyadh
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .unwrap();
    let tz_offset_minutes = -midnight.offset().fix().local_minus_utc() / 60;

    println!("=== Prayer Times Calculation Example ===");
    println!("Location: Mecca ({:.4}°N, {:.4}°E)", latitude, longitude);
    println!("Date: {} (tz offset {} min)", date, tz_offset_minutes);
    println!();

    for method in Method::PRESETS {
        let times = compute(date, coords, tz_offset_minutes, method).unwrap();
        println!("--- {} ---", method);
        for prayer in Prayer::ALL {
            let flag = if times.is_reliable(prayer) { "" } else { " (clamped)" };
            println!("{:<8} {}{}", prayer.name(), format_hhmm(&times.get(prayer)), flag);
        }
        println!();
    }
}
