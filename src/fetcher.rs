use chrono::DateTime;
use chrono_tz::Tz;
use tracing::debug;

use crate::angles;
use crate::error::{Result, SunpathError};
use crate::types::{SampleSeries, SolarSample};

/// Source of sun positions. Implementations must be pure: one sample per
/// requested timestamp, in the requested order.
pub trait PositionFetcher {
    fn fetch(&self, times: &[DateTime<Tz>], latitude: f64, longitude: f64)
        -> Result<SampleSeries>;
}

impl<F> PositionFetcher for F
where
    F: Fn(&[DateTime<Tz>], f64, f64) -> Result<SampleSeries>,
{
    fn fetch(
        &self,
        times: &[DateTime<Tz>],
        latitude: f64,
        longitude: f64,
    ) -> Result<SampleSeries> {
        self(times, latitude, longitude)
    }
}

/// NOAA solar calculator equations, geometric elevation without refraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoaaFetcher;

impl PositionFetcher for NoaaFetcher {
    fn fetch(
        &self,
        times: &[DateTime<Tz>],
        latitude: f64,
        longitude: f64,
    ) -> Result<SampleSeries> {
        let samples = times
            .iter()
            .map(|t| {
                let pos = angles::solar_position(latitude, longitude, t);
                SolarSample {
                    timestamp: *t,
                    azimuth: pos.azimuth,
                    elevation: pos.elevation,
                }
            })
            .collect();
        Ok(SampleSeries::new(latitude, longitude, samples))
    }
}

/// Fetch positions and hold the collaborator to its contract.
pub fn fetch_checked<P: PositionFetcher + ?Sized>(
    fetcher: &P,
    times: &[DateTime<Tz>],
    latitude: f64,
    longitude: f64,
) -> Result<SampleSeries> {
    let series = fetcher.fetch(times, latitude, longitude)?;
    if series.latitude != latitude || series.longitude != longitude {
        return Err(SunpathError::CoordinateMismatch {
            latitude,
            longitude,
            actual_latitude: series.latitude,
            actual_longitude: series.longitude,
        });
    }
    if series.len() != times.len() {
        return Err(SunpathError::SampleCountMismatch {
            expected: times.len(),
            actual: series.len(),
        });
    }
    for (index, (sample, requested)) in series.iter().zip(times).enumerate() {
        if sample.timestamp != *requested {
            return Err(SunpathError::TimestampMismatch { index });
        }
        if !sample.azimuth.is_finite() || !sample.elevation.is_finite() {
            return Err(SunpathError::Fetcher(format!(
                "non-finite position at {}",
                sample.timestamp
            )));
        }
    }
    debug!(samples = series.len(), latitude, longitude, "fetched positions");
    Ok(series)
}
