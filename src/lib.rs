pub mod angles;
pub mod chart;
pub mod config;
pub mod daylight;
pub mod error;
pub mod fetcher;
pub mod labels;
pub mod render;
pub mod seasonal;
pub mod time_grid;
pub mod tracks;
pub mod types;

pub use angles::{
    deg_to_rad, equation_of_time, hour_angle, julian_century, julian_day, normalize_angle,
    rad_to_deg, solar_azimuth, solar_declination, solar_elevation, solar_position,
    solar_zenith_angle, true_solar_time, DEGREES_PER_HOUR,
};

pub use chart::{
    assemble_chart, hour_annotations, line_layers, scatter_layer, sunpath_chart, AZIMUTH_TICKS,
    X_AXIS_TITLE, Y_AXIS_TITLE,
};

pub use config::{Coordinates, SunpathConfig, LATITUDE_RANGE, LONGITUDE_RANGE, SLIDER_STEP};
pub use daylight::daylight_filter;
pub use error::{Result, SunpathError};
pub use fetcher::{fetch_checked, NoaaFetcher, PositionFetcher};
pub use labels::hour_labels;
pub use render::{render_svg, SvgOptions};
pub use seasonal::{colorbar, day_of_year_keys, month_starts, MID_MONTH_OFFSET};
pub use time_grid::{day_grid, local_midnight, year_grid};
pub use tracks::{reference_track, reference_tracks, track_label};

pub use types::{
    Axis, ChartSpec, ColorScale, Colorbar, HAlign, HourLabel, Legend, LegendPlacement,
    LineLayer, OffsetDirection, ReferenceTrack, SampleSeries, ScatterLayer, SolarPosition,
    SolarSample, TextAnnotation, Tick, VAlign,
};
