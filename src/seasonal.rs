use chrono::{Datelike, NaiveDate};

use crate::config::SunpathConfig;
use crate::types::{ColorScale, Colorbar, SampleSeries, Tick};

/// Shift from a month's first day to roughly its middle, where the month
/// name is printed.
pub const MID_MONTH_OFFSET: u32 = 15;

const MAJOR_TICK_WIDTH: f64 = 1.0;

/// Ordinal day of the year of each sample, in the series' own timezone.
pub fn day_of_year_keys(series: &SampleSeries) -> Vec<f64> {
    series
        .iter()
        .map(|s| f64::from(s.timestamp.ordinal()))
        .collect()
}

pub fn color_scale(config: &SunpathConfig) -> ColorScale {
    ColorScale {
        min: 1.0,
        max: f64::from(config.days_in_year()),
        cyclic: true,
    }
}

pub fn month_starts(year: i32) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(year, month, 1))
        .collect()
}

/// Major ticks on month boundaries (unlabelled), minor ticks mid-month
/// carrying the month abbreviation and no visible mark.
pub fn colorbar(config: &SunpathConfig) -> Colorbar {
    let starts = month_starts(config.reference_year);
    let major_ticks = starts
        .iter()
        .map(|d| Tick {
            position: f64::from(d.ordinal()),
            label: String::new(),
            mark_width: MAJOR_TICK_WIDTH,
        })
        .collect();
    let minor_ticks = starts
        .iter()
        .map(|d| Tick {
            position: f64::from(d.ordinal() + MID_MONTH_OFFSET),
            label: d.format("%b").to_string(),
            mark_width: 0.0,
        })
        .collect();
    Colorbar {
        scale: color_scale(config),
        major_ticks,
        minor_ticks,
    }
}
