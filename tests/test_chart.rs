use std::sync::LazyLock;

use chrono::DateTime;
use chrono_tz::Tz;

use sunpath::{
    render_svg, sunpath_chart, ChartSpec, HAlign, LegendPlacement, NoaaFetcher, PositionFetcher,
    SampleSeries, SunpathConfig, SunpathError, SvgOptions, VAlign,
};

fn chart(latitude: f64, longitude: f64) -> ChartSpec {
    sunpath_chart(&NoaaFetcher, &SunpathConfig::default(), latitude, longitude).unwrap()
}

static EQUATOR: LazyLock<ChartSpec> = LazyLock::new(|| chart(0.0, 0.0));
static LONDON: LazyLock<ChartSpec> = LazyLock::new(|| chart(51.5, -0.1));
static NEAR_POLE: LazyLock<ChartSpec> = LazyLock::new(|| chart(89.9, 0.0));

// ── Layout ──

#[test]
fn test_axes() {
    let c = &*EQUATOR;
    assert_eq!(c.x_axis.title, "Solar Azimuth (degrees)");
    assert_eq!((c.x_axis.min, c.x_axis.max), (0.0, 360.0));
    assert_eq!(
        c.x_axis.ticks.as_deref(),
        Some(&[0.0, 90.0, 180.0, 270.0, 360.0][..])
    );
    assert_eq!(c.y_axis.title, "Solar Elevation (degrees)");
    assert_eq!((c.y_axis.min, c.y_axis.max), (0.0, 90.0));
}

#[test]
fn test_legend() {
    let legend = &EQUATOR.legend;
    assert_eq!(legend.placement, LegendPlacement::UpperCenter);
    assert_eq!(legend.anchor, (0.45, 1.0));
    assert_eq!(legend.entries, ["21 Mar", "21 Jun", "21 Dec"]);
    assert_eq!(legend.columns(), 3);
}

#[test]
fn test_scatter_layer() {
    let scatter = &EQUATOR.scatter;
    assert_eq!(scatter.points.len(), scatter.color_values.len());
    assert!(scatter.points.iter().all(|&(_, el)| el > 0.0));
    assert!(scatter
        .color_values
        .iter()
        .all(|&v| (1.0..=365.0).contains(&v)));
    assert!(scatter.legend_label.is_none());
    assert!(scatter.color_scale.cyclic);
}

#[test]
fn test_hour_annotations() {
    let notes = &EQUATOR.annotations;
    assert_eq!(notes.len(), 13);
    assert_eq!(notes[0].text, "06");
    assert_eq!(notes[12].text, "18");
    for note in notes {
        assert_eq!(note.h_align, HAlign::Center);
        assert_eq!(note.v_align, VAlign::Bottom);
    }
}

#[test]
fn test_colorbar_attached() {
    assert_eq!(EQUATOR.colorbar.major_ticks.len(), 12);
    assert_eq!(EQUATOR.colorbar.minor_ticks.len(), 12);
}

// ── Scenarios ──

#[test]
fn test_idempotent() {
    assert_eq!(chart(0.0, 0.0), *EQUATOR);
}

#[test]
fn test_pole_degrades_without_error() {
    let c = chart(90.0, 0.0);
    assert_eq!(c.legend.entries, ["21 Mar", "21 Jun"]);
    assert_eq!(c.legend.columns(), 2);
    assert_eq!(c.lines.len(), 2);
}

#[test]
fn test_mid_latitude_versus_near_pole() {
    // Near the pole the sun stays up through the whole northern summer, so it
    // collects more daylight samples and every hour of the day gets a label,
    // while at mid-latitudes the winter reference day still has a sun path.
    assert!(NEAR_POLE.scatter.points.len() > LONDON.scatter.points.len());
    assert_eq!(NEAR_POLE.annotations.len(), 24);
    assert!(LONDON.annotations.len() < 24);
    assert!(LONDON.legend.entries.contains(&"21 Dec".to_string()));
    assert!(!NEAR_POLE.legend.entries.contains(&"21 Dec".to_string()));
}

// ── Failures ──

#[test]
fn test_invalid_coordinates() {
    let config = SunpathConfig::default();
    assert!(matches!(
        sunpath_chart(&NoaaFetcher, &config, 91.0, 0.0),
        Err(SunpathError::InvalidLatitude(_))
    ));
    assert!(matches!(
        sunpath_chart(&NoaaFetcher, &config, 0.0, 181.0),
        Err(SunpathError::InvalidLongitude(_))
    ));
}

#[test]
fn test_invalid_config() {
    let config = SunpathConfig {
        grid_interval_minutes: 0,
        ..Default::default()
    };
    assert!(matches!(
        sunpath_chart(&NoaaFetcher, &config, 0.0, 0.0),
        Err(SunpathError::InvalidConfig(_))
    ));
}

#[test]
fn test_track_fetch_failure_aborts_chart() {
    let flaky = |times: &[DateTime<Tz>], lat: f64, lon: f64| -> sunpath::Result<SampleSeries> {
        if times.len() == 289 {
            return Err(SunpathError::Fetcher("timeout".into()));
        }
        NoaaFetcher.fetch(times, lat, lon)
    };
    let result = sunpath_chart(&flaky, &SunpathConfig::default(), 0.0, 0.0);
    assert!(matches!(result, Err(SunpathError::Fetcher(_))));
}

// ── Output ──

#[test]
fn test_json_export() {
    let json = EQUATOR.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["x_axis"]["title"], "Solar Azimuth (degrees)");
    assert_eq!(value["legend"]["placement"], "upper_center");
    assert_eq!(value["annotations"][0]["h_align"], "center");
    assert_eq!(value["lines"].as_array().unwrap().len(), 3);
}

#[test]
fn test_svg_render() {
    let svg = render_svg(&EQUATOR, &SvgOptions::default()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), EQUATOR.scatter.points.len());
    assert_eq!(svg.matches("<polyline").count(), 3);
    for text in ["21 Jun", "Solar Elevation (degrees)", "Jan", "Dec", ">06<"] {
        assert!(svg.contains(text), "missing {text}");
    }
}

#[test]
fn test_svg_render_empty_chart() {
    let c = chart(90.0, 0.0);
    let empty = ChartSpec {
        scatter: sunpath::ScatterLayer {
            points: Vec::new(),
            color_values: Vec::new(),
            ..c.scatter.clone()
        },
        annotations: Vec::new(),
        lines: Vec::new(),
        legend: sunpath::Legend {
            entries: Vec::new(),
            ..c.legend.clone()
        },
        ..c
    };
    let svg = render_svg(&empty, &SvgOptions::default()).unwrap();
    assert_eq!(svg.matches("<circle").count(), 0);
    assert!(svg.contains("Solar Azimuth (degrees)"));
}
