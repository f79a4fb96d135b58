use tracing::{debug, info};

use crate::config::{Coordinates, SunpathConfig};
use crate::daylight::daylight_filter;
use crate::error::Result;
use crate::fetcher::{fetch_checked, PositionFetcher};
use crate::labels::hour_labels;
use crate::seasonal::{color_scale, colorbar, day_of_year_keys};
use crate::time_grid::year_grid;
use crate::tracks::reference_tracks;
use crate::types::{
    Axis, ChartSpec, HAlign, HourLabel, Legend, LegendPlacement, LineLayer, ReferenceTrack,
    SampleSeries, ScatterLayer, TextAnnotation, VAlign,
};

pub const TITLE: &str = "Interactive sunpath diagram";
pub const X_AXIS_TITLE: &str = "Solar Azimuth (degrees)";
pub const Y_AXIS_TITLE: &str = "Solar Elevation (degrees)";
pub const AZIMUTH_TICKS: [f64; 5] = [0.0, 90.0, 180.0, 270.0, 360.0];
pub const MARKER_SIZE: f64 = 2.0;
pub const LEGEND_ANCHOR: (f64, f64) = (0.45, 1.0);
pub const LEGEND_MAX_COLUMNS: usize = 3;

pub fn scatter_layer(daylight: &SampleSeries, config: &SunpathConfig) -> ScatterLayer {
    ScatterLayer {
        points: daylight.points(),
        color_values: day_of_year_keys(daylight),
        color_scale: color_scale(config),
        marker_size: MARKER_SIZE,
        legend_label: None,
    }
}

pub fn hour_annotations(labels: &[HourLabel]) -> Vec<TextAnnotation> {
    labels
        .iter()
        .map(|label| TextAnnotation {
            x: label.x(),
            y: label.anchor_elevation,
            text: label.text(),
            h_align: HAlign::Center,
            v_align: VAlign::Bottom,
        })
        .collect()
}

pub fn line_layers(tracks: &[ReferenceTrack]) -> Vec<LineLayer> {
    tracks
        .iter()
        .map(|track| LineLayer {
            label: track.label.clone(),
            points: track.points.clone(),
        })
        .collect()
}

pub fn assemble_chart(
    coordinates: Coordinates,
    config: &SunpathConfig,
    daylight: &SampleSeries,
    labels: &[HourLabel],
    tracks: &[ReferenceTrack],
) -> ChartSpec {
    let lines = line_layers(tracks);
    let legend = Legend {
        placement: LegendPlacement::UpperCenter,
        anchor: LEGEND_ANCHOR,
        max_columns: LEGEND_MAX_COLUMNS,
        entries: lines.iter().map(|l| l.label.clone()).collect(),
    };
    ChartSpec {
        title: TITLE.to_string(),
        latitude: coordinates.latitude,
        longitude: coordinates.longitude,
        scatter: scatter_layer(daylight, config),
        colorbar: colorbar(config),
        annotations: hour_annotations(labels),
        lines,
        legend,
        x_axis: Axis {
            title: X_AXIS_TITLE.to_string(),
            min: 0.0,
            max: 360.0,
            ticks: Some(AZIMUTH_TICKS.to_vec()),
        },
        y_axis: Axis {
            title: Y_AXIS_TITLE.to_string(),
            min: 0.0,
            max: 90.0,
            ticks: None,
        },
    }
}

/// Build the full sunpath diagram for one observer location.
///
/// Fails on out-of-range coordinates, an invalid config, or any fetcher
/// error; polar day or night only thins out the chart.
pub fn sunpath_chart<P: PositionFetcher + ?Sized>(
    fetcher: &P,
    config: &SunpathConfig,
    latitude: f64,
    longitude: f64,
) -> Result<ChartSpec> {
    let coordinates = Coordinates::new(latitude, longitude)?;
    config.validate()?;

    let times = year_grid(config)?;
    let series = fetch_checked(fetcher, &times, latitude, longitude)?;
    let daylight = daylight_filter(&series);
    debug!(grid = times.len(), daylight = daylight.len(), "yearly samples");

    let labels = hour_labels(&daylight);
    debug!(labels = labels.len(), "hour labels");

    let tracks = reference_tracks(fetcher, config, latitude, longitude)?;

    let chart = assemble_chart(coordinates, config, &daylight, &labels, &tracks);
    info!(
        latitude,
        longitude,
        points = chart.scatter.points.len(),
        tracks = chart.lines.len(),
        "sunpath chart assembled"
    );
    Ok(chart)
}

impl ChartSpec {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
