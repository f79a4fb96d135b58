use std::ops::RangeInclusive;

use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SunpathError};

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
/// Slider granularity of the input page, in degrees.
pub const SLIDER_STEP: f64 = 0.1;

const MINUTES_PER_DAY: u32 = 1440;

/// Fixed parameters of a sunpath render. The month labels and the reference
/// track labels are only meaningful for the year and hemisphere these were
/// picked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunpathConfig {
    pub reference_year: i32,
    pub timezone: Tz,
    pub reference_dates: Vec<NaiveDate>,
    pub grid_interval_minutes: u32,
    pub track_interval_minutes: u32,
}

impl Default for SunpathConfig {
    fn default() -> Self {
        let reference_year = 2019;
        let reference_dates = [(3, 21), (6, 21), (12, 21)]
            .into_iter()
            .filter_map(|(m, d)| NaiveDate::from_ymd_opt(reference_year, m, d))
            .collect();
        Self {
            reference_year,
            timezone: Tz::UTC,
            reference_dates,
            grid_interval_minutes: 60,
            track_interval_minutes: 5,
        }
    }
}

impl SunpathConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_interval("grid_interval_minutes", self.grid_interval_minutes)?;
        validate_interval("track_interval_minutes", self.track_interval_minutes)?;
        if self.reference_dates.is_empty() {
            return Err(SunpathError::InvalidConfig(
                "reference_dates must not be empty".into(),
            ));
        }
        let next_year = self.reference_year.checked_add(1);
        let in_range = next_year
            .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
            .and(NaiveDate::from_ymd_opt(self.reference_year, 1, 1))
            .is_some();
        if !in_range {
            return Err(SunpathError::InvalidConfig(format!(
                "reference_year {} is out of range",
                self.reference_year
            )));
        }
        Ok(())
    }

    pub fn year_start(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.reference_year, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_year(&self) -> u32 {
        if self.year_start().leap_year() {
            366
        } else {
            365
        }
    }
}

pub(crate) fn validate_interval(name: &str, minutes: u32) -> Result<()> {
    if minutes == 0 || MINUTES_PER_DAY % minutes != 0 {
        return Err(SunpathError::InvalidConfig(format!(
            "{name} must divide a day evenly, got {minutes}"
        )));
    }
    Ok(())
}

/// Observer location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Coordinates {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(SunpathError::InvalidLatitude(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(SunpathError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Clamp raw slider values into range and snap them to the slider step.
    pub fn from_slider(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: snap(latitude, LATITUDE_RANGE),
            longitude: snap(longitude, LONGITUDE_RANGE),
        }
    }
}

fn snap(value: f64, range: RangeInclusive<f64>) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    let steps_per_degree = SLIDER_STEP.recip().round();
    let clamped = value.clamp(*range.start(), *range.end());
    (clamped * steps_per_degree).round() / steps_per_degree
}
