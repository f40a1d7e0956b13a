use std::time::Duration;

use chrono::{TimeZone, Utc};
use heritage_core::{footer_year, HeritageConfig, HeritageConfigOverrides};

#[test]
fn defaults_match_page_timings() {
    let cfg = HeritageConfig::default();
    assert_eq!(cfg.initial_activation_delay(), Duration::from_millis(500));
    assert_eq!(cfg.nav_alignment_delay(), Duration::from_millis(300));
    assert_eq!(cfg.overlay_interval(), Duration::from_millis(3000));
}

#[test]
fn overrides_merge_over_defaults() {
    let cfg = HeritageConfig::from(HeritageConfigOverrides {
        overlay_interval_ms: Some(5000),
        ..HeritageConfigOverrides::default()
    });
    assert_eq!(cfg.overlay_interval_ms, 5000);
    assert_eq!(cfg.initial_activation_ms, 500);
    assert_eq!(cfg.nav_alignment_ms, 300);
}

#[test]
fn zero_interval_is_ignored() {
    let cfg = HeritageConfig::from(HeritageConfigOverrides {
        overlay_interval_ms: Some(0),
        nav_alignment_ms: Some(0),
        ..HeritageConfigOverrides::default()
    });
    assert_eq!(cfg.overlay_interval_ms, 3000);
    assert_eq!(cfg.nav_alignment_ms, 0);
}

#[test]
fn footer_shows_calendar_year() {
    let instant = Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap();
    assert_eq!(footer_year(&instant), 2024);
}
