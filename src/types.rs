use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub day_of_year: u32,
    pub julian_century: f64,
    pub declination: f64,
    pub equation_of_time: f64,
    pub true_solar_time: f64,
    pub hour_angle: f64,
    pub zenith: f64,
    pub elevation: f64,
    pub azimuth: f64,
}

/// One timestamped sun position. Azimuth is a compass bearing (0 = north,
/// clockwise), elevation is degrees above the horizon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarSample {
    pub timestamp: DateTime<Tz>,
    pub azimuth: f64,
    pub elevation: f64,
}

impl SolarSample {
    pub fn is_daylight(&self) -> bool {
        self.elevation > 0.0
    }
}

/// Samples for one coordinate pair in chronological order.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    pub latitude: f64,
    pub longitude: f64,
    pub samples: Vec<SolarSample>,
}

impl SampleSeries {
    pub fn new(latitude: f64, longitude: f64, samples: Vec<SolarSample>) -> Self {
        Self {
            latitude,
            longitude,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SolarSample> {
        self.samples.iter()
    }

    pub fn points(&self) -> Vec<(f64, f64)> {
        self.samples.iter().map(|s| (s.azimuth, s.elevation)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetDirection {
    Left,
    Right,
}

impl OffsetDirection {
    pub const DEGREES: f64 = 10.0;

    pub fn for_azimuth(azimuth: f64) -> Self {
        if azimuth < 180.0 {
            OffsetDirection::Left
        } else {
            OffsetDirection::Right
        }
    }

    pub fn degrees(self) -> f64 {
        match self {
            OffsetDirection::Left => -Self::DEGREES,
            OffsetDirection::Right => Self::DEGREES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourLabel {
    pub hour: u32,
    pub anchor_azimuth: f64,
    pub anchor_elevation: f64,
    pub offset_direction: OffsetDirection,
}

impl HourLabel {
    pub fn text(&self) -> String {
        format!("{:02}", self.hour)
    }

    pub fn x(&self) -> f64 {
        self.anchor_azimuth + self.offset_direction.degrees()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTrack {
    pub date: NaiveDate,
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

// ── Chart description ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    Center,
    Bottom,
}

/// Maps a scalar onto a colormap. A cyclic scale wraps so `min` and `max`
/// share a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    pub cyclic: bool,
}

impl ColorScale {
    /// Position of `value` on the scale in `[0, 1]`.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterLayer {
    pub points: Vec<(f64, f64)>,
    pub color_values: Vec<f64>,
    pub color_scale: ColorScale,
    pub marker_size: f64,
    pub legend_label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub position: f64,
    pub label: String,
    pub mark_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Colorbar {
    pub scale: ColorScale,
    pub major_ticks: Vec<Tick>,
    pub minor_ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub h_align: HAlign,
    pub v_align: VAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayer {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendPlacement {
    UpperCenter,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub placement: LegendPlacement,
    /// Anchor in figure fractions.
    pub anchor: (f64, f64),
    pub max_columns: usize,
    pub entries: Vec<String>,
}

impl Legend {
    pub fn columns(&self) -> usize {
        self.entries.len().min(self.max_columns)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub min: f64,
    pub max: f64,
    /// Explicit tick positions; `None` lets the backend choose.
    pub ticks: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
    pub scatter: ScatterLayer,
    pub colorbar: Colorbar,
    pub annotations: Vec<TextAnnotation>,
    pub lines: Vec<LineLayer>,
    pub legend: Legend,
    pub x_axis: Axis,
    pub y_axis: Axis,
}
