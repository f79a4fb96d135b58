use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::types::SolarPosition;

pub const JULIAN_DAY_UNIX_EPOCH: f64 = 2_440_587.5;
pub const JULIAN_DAY_J2000: f64 = 2_451_545.0;
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
pub const DEGREES_PER_HOUR: f64 = 15.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wrap into `[0, 360)`. `rem_euclid` rounds tiny negatives up to 360.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn julian_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    let utc = dt.with_timezone(&Utc);
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    seconds / SECONDS_PER_DAY + JULIAN_DAY_UNIX_EPOCH
}

pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - JULIAN_DAY_J2000) / DAYS_PER_JULIAN_CENTURY
}

pub fn geom_mean_long_sun(jc: f64) -> f64 {
    normalize_angle(280.46646 + jc * (36000.76983 + jc * 0.0003032))
}

pub fn geom_mean_anom_sun(jc: f64) -> f64 {
    357.52911 + jc * (35999.05029 - 0.0001537 * jc)
}

pub fn eccentricity_earth_orbit(jc: f64) -> f64 {
    0.016708634 - jc * (0.000042037 + 0.0000001267 * jc)
}

pub fn sun_equation_of_center(jc: f64) -> f64 {
    let m = deg_to_rad(geom_mean_anom_sun(jc));
    m.sin() * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * jc)
        + (3.0 * m).sin() * 0.000289
}

pub fn sun_apparent_longitude(jc: f64) -> f64 {
    let true_long = geom_mean_long_sun(jc) + sun_equation_of_center(jc);
    let omega = deg_to_rad(125.04 - 1934.136 * jc);
    true_long - 0.00569 - 0.00478 * omega.sin()
}

pub fn mean_obliquity_ecliptic(jc: f64) -> f64 {
    let seconds = 21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

pub fn obliquity_correction(jc: f64) -> f64 {
    let omega = deg_to_rad(125.04 - 1934.136 * jc);
    mean_obliquity_ecliptic(jc) + 0.00256 * omega.cos()
}

pub fn solar_declination(jc: f64) -> f64 {
    let obliq = deg_to_rad(obliquity_correction(jc));
    let app_long = deg_to_rad(sun_apparent_longitude(jc));
    rad_to_deg((obliq.sin() * app_long.sin()).asin())
}

/// Equation of time in minutes.
pub fn equation_of_time(jc: f64) -> f64 {
    let l0 = deg_to_rad(geom_mean_long_sun(jc));
    let m = deg_to_rad(geom_mean_anom_sun(jc));
    let e = eccentricity_earth_orbit(jc);
    let y = (deg_to_rad(obliquity_correction(jc)) / 2.0).tan().powi(2);
    let eot = y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    4.0 * rad_to_deg(eot)
}

/// Apparent solar time in hours, wrapped to `[0, 24)`.
pub fn true_solar_time(utc_hours: f64, longitude: f64, eot: f64) -> f64 {
    (utc_hours + (4.0 * longitude + eot) / 60.0).rem_euclid(24.0)
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_zenith_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let cos_zenith =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(cos_zenith.clamp(-1.0, 1.0).acos())
}

pub fn solar_elevation(zenith_angle: f64) -> f64 {
    90.0 - zenith_angle
}

/// Compass bearing of the sun. `atan2` keeps this defined at the poles.
pub fn solar_azimuth(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_az = -dec_rad.cos() * ha_rad.sin();
    let cos_az = dec_rad.sin() * lat_rad.cos() - dec_rad.cos() * lat_rad.sin() * ha_rad.cos();
    normalize_angle(rad_to_deg(sin_az.atan2(cos_az)))
}

pub fn solar_position<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let utc = dt.with_timezone(&Utc);
    let utc_hours = f64::from(utc.hour())
        + f64::from(utc.minute()) / 60.0
        + f64::from(utc.second()) / 3600.0;
    let jc = julian_century(julian_day(&utc));
    let decl = solar_declination(jc);
    let eot = equation_of_time(jc);
    let tst = true_solar_time(utc_hours, longitude, eot);
    let ha = hour_angle(tst);
    let zenith = solar_zenith_angle(latitude, decl, ha);
    SolarPosition {
        day_of_year: utc.ordinal(),
        julian_century: jc,
        declination: decl,
        equation_of_time: eot,
        true_solar_time: tst,
        hour_angle: ha,
        zenith,
        elevation: solar_elevation(zenith),
        azimuth: solar_azimuth(latitude, decl, ha),
    }
}
