use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::SunpathConfig;
use crate::daylight::daylight_filter;
use crate::error::Result;
use crate::fetcher::{fetch_checked, PositionFetcher};
use crate::time_grid::day_grid;
use crate::types::ReferenceTrack;

pub fn track_label(date: NaiveDate) -> String {
    date.format("%d %b").to_string()
}

/// Daylight trajectory of the sun over one reference date, or `None` when the
/// sun never clears the horizon that day.
pub fn reference_track<P: PositionFetcher + ?Sized>(
    fetcher: &P,
    config: &SunpathConfig,
    date: NaiveDate,
    latitude: f64,
    longitude: f64,
) -> Result<Option<ReferenceTrack>> {
    let times = day_grid(date, config.timezone, config.track_interval_minutes)?;
    let series = fetch_checked(fetcher, &times, latitude, longitude)?;
    let daylight = daylight_filter(&series);
    if daylight.is_empty() {
        warn!(%date, latitude, "no daylight on reference date, track omitted");
        return Ok(None);
    }
    debug!(%date, grid = times.len(), points = daylight.len(), "reference track");
    Ok(Some(ReferenceTrack {
        date,
        label: track_label(date),
        points: daylight.points(),
    }))
}

pub fn reference_tracks<P: PositionFetcher + ?Sized>(
    fetcher: &P,
    config: &SunpathConfig,
    latitude: f64,
    longitude: f64,
) -> Result<Vec<ReferenceTrack>> {
    let mut tracks = Vec::with_capacity(config.reference_dates.len());
    for &date in &config.reference_dates {
        if let Some(track) = reference_track(fetcher, config, date, latitude, longitude)? {
            tracks.push(track);
        }
    }
    Ok(tracks)
}
