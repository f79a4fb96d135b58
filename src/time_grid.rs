use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::config::{validate_interval, SunpathConfig};
use crate::error::{Result, SunpathError};

/// First instant of `date` in `tz`. An ambiguous midnight resolves to the
/// earlier instant.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or_else(|| {
            SunpathError::InvalidTimestamp(format!(
                "midnight of {date} does not exist in {}",
                tz.name()
            ))
        })
}

/// Evenly spaced instants from `start`, stopping before `end` (or at it, when
/// `inclusive`).
fn instants(
    start: DateTime<Tz>,
    end: DateTime<Tz>,
    step: Duration,
    inclusive: bool,
) -> Vec<DateTime<Tz>> {
    std::iter::successors(Some(start), |t| Some(*t + step))
        .take_while(|t| if inclusive { *t <= end } else { *t < end })
        .collect()
}

/// Sampling grid over the whole reference year: local midnight on 1 January
/// up to, not including, local midnight of the following year.
pub fn year_grid(config: &SunpathConfig) -> Result<Vec<DateTime<Tz>>> {
    validate_interval("grid_interval_minutes", config.grid_interval_minutes)?;
    let next_year = config
        .reference_year
        .checked_add(1)
        .and_then(|y| NaiveDate::from_ymd_opt(y, 1, 1))
        .ok_or_else(|| {
            SunpathError::InvalidConfig(format!(
                "reference_year {} is out of range",
                config.reference_year
            ))
        })?;
    let start = local_midnight(config.year_start(), config.timezone)?;
    let end = local_midnight(next_year, config.timezone)?;
    let step = Duration::minutes(i64::from(config.grid_interval_minutes));
    Ok(instants(start, end, step, false))
}

/// 24 hours from local midnight of `date`, both ends included.
pub fn day_grid(date: NaiveDate, tz: Tz, interval_minutes: u32) -> Result<Vec<DateTime<Tz>>> {
    validate_interval("track_interval_minutes", interval_minutes)?;
    let start = local_midnight(date, tz)?;
    let end = start + Duration::hours(24);
    let step = Duration::minutes(i64::from(interval_minutes));
    Ok(instants(start, end, step, true))
}
