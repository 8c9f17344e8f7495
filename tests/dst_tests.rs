use chrono::{Local, TimeZone, Utc};
use rpunchclock::core::scheduler::within_window;
use rpunchclock::utils::time::{minutes_to_ms, parse_time};
use std::env;
use std::path::Path;

// Alone in its own test binary: it changes the process time zone.
#[test]
fn test_target_in_the_repeated_dst_hour_still_matches() {
    if !Path::new("/usr/share/zoneinfo/Europe/Rome").exists() {
        return;
    }
    unsafe { env::set_var("TZ", "Europe/Rome") };

    // 2025-10-26 02:30 occurs twice in Rome; this is the first (CEST) one
    let now = Utc
        .with_ymd_and_hms(2025, 10, 26, 0, 30, 0)
        .unwrap()
        .with_timezone(&Local);

    assert!(within_window(parse_time("02:30"), now, minutes_to_ms(5)));
    assert!(!within_window(parse_time("02:40"), now, minutes_to_ms(5)));
}
