use chrono::NaiveDate;
use chrono_tz::Tz;

use sunpath::{Coordinates, SunpathConfig, SunpathError};

// ── Config ──

#[test]
fn test_default_config() {
    let c = SunpathConfig::default();
    assert_eq!(c.reference_year, 2019);
    assert_eq!(c.timezone, Tz::UTC);
    assert_eq!(c.grid_interval_minutes, 60);
    assert_eq!(c.track_interval_minutes, 5);
    let dates: Vec<String> = c.reference_dates.iter().map(|d| d.to_string()).collect();
    assert_eq!(dates, ["2019-03-21", "2019-06-21", "2019-12-21"]);
    assert!(c.validate().is_ok());
}

#[test]
fn test_days_in_year() {
    assert_eq!(SunpathConfig::default().days_in_year(), 365);
    let leap = SunpathConfig {
        reference_year: 2020,
        ..Default::default()
    };
    assert_eq!(leap.days_in_year(), 366);
}

#[test]
fn test_rejects_bad_intervals() {
    for minutes in [0, 7, 1441] {
        let c = SunpathConfig {
            track_interval_minutes: minutes,
            ..Default::default()
        };
        assert!(
            matches!(c.validate(), Err(SunpathError::InvalidConfig(_))),
            "minutes={}",
            minutes
        );
    }
}

#[test]
fn test_rejects_empty_reference_dates() {
    let c = SunpathConfig {
        reference_dates: Vec::new(),
        ..Default::default()
    };
    assert!(matches!(c.validate(), Err(SunpathError::InvalidConfig(_))));
}

#[test]
fn test_json_partial_override() {
    let c = SunpathConfig::from_json_str(
        r#"{"reference_year": 2024, "timezone": "Europe/London",
            "reference_dates": ["2024-06-20"]}"#,
    )
    .unwrap();
    assert_eq!(c.reference_year, 2024);
    assert_eq!(c.timezone, chrono_tz::Europe::London);
    assert_eq!(c.reference_dates, [NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()]);
    assert_eq!(c.grid_interval_minutes, 60);
    assert_eq!(c.track_interval_minutes, 5);
}

#[test]
fn test_json_invalid_values() {
    assert!(matches!(
        SunpathConfig::from_json_str(r#"{"timezone": "Mars/Olympus"}"#),
        Err(SunpathError::Json(_))
    ));
    assert!(matches!(
        SunpathConfig::from_json_str(r#"{"grid_interval_minutes": 0}"#),
        Err(SunpathError::InvalidConfig(_))
    ));
}

// ── Coordinates ──

#[test]
fn test_coordinates_in_range() {
    let c = Coordinates::new(51.5, -0.1).unwrap();
    assert_eq!(c.latitude, 51.5);
    assert_eq!(c.longitude, -0.1);
    assert!(Coordinates::new(90.0, -180.0).is_ok());
    assert!(Coordinates::new(-90.0, 180.0).is_ok());
}

#[test]
fn test_coordinates_out_of_range() {
    assert!(matches!(
        Coordinates::new(90.5, 0.0),
        Err(SunpathError::InvalidLatitude(_))
    ));
    assert!(matches!(
        Coordinates::new(0.0, -180.1),
        Err(SunpathError::InvalidLongitude(_))
    ));
    assert!(matches!(
        Coordinates::new(f64::NAN, 0.0),
        Err(SunpathError::InvalidLatitude(_))
    ));
}

#[test]
fn test_slider_clamps_and_snaps() {
    let c = Coordinates::from_slider(123.0, -200.0);
    assert_eq!(c.latitude, 90.0);
    assert_eq!(c.longitude, -180.0);

    let c = Coordinates::from_slider(51.4786, -0.0014);
    assert_eq!(c.latitude, 51.5);
    assert_eq!(c.longitude, 0.0);

    assert_eq!(Coordinates::from_slider(f64::NAN, 10.0).latitude, 0.0);
    assert_eq!(Coordinates::default(), Coordinates::from_slider(0.0, 0.0));
}
