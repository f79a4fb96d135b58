//! Command-line stand-in for the interactive sunpath page.
//!
//! Renders the diagram for one latitude/longitude pair to SVG, or prints the
//! chart description as JSON.

use std::fs;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sunpath::{
    render_svg, sunpath_chart, Coordinates, NoaaFetcher, SunpathConfig, SvgOptions,
    LATITUDE_RANGE, LONGITUDE_RANGE,
};

#[derive(Parser, Debug)]
#[command(about = "Interactive sunpath diagram")]
struct Args {
    /// Observer latitude in decimal degrees (-90 to 90)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = parse_latitude, env = "SUNPATH_LATITUDE")]
    latitude: f64,
    /// Observer longitude in decimal degrees (-180 to 180)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = parse_longitude, env = "SUNPATH_LONGITUDE")]
    longitude: f64,
    /// JSON file overriding the reference year, timezone, dates and grid steps
    #[arg(long)]
    config: Option<PathBuf>,
    /// Where to write the SVG
    #[arg(long, default_value = "sunpath.svg")]
    output: PathBuf,
    /// Print the chart description as JSON instead of rendering
    #[arg(long)]
    json: bool,
}

fn parse_latitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !LATITUDE_RANGE.contains(&v) {
        return Err(format!("Latitude must be between -90 and 90, got {}", v));
    }
    Ok(v)
}

fn parse_longitude(s: &str) -> Result<f64, String> {
    let v: f64 = s.parse().map_err(|_| format!("Invalid number: {}", s))?;
    if !LONGITUDE_RANGE.contains(&v) {
        return Err(format!("Longitude must be between -180 and 180, got {}", v));
    }
    Ok(v)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => SunpathConfig::from_json_str(&fs::read_to_string(path)?)?,
        None => SunpathConfig::default(),
    };
    let coords = Coordinates::from_slider(args.latitude, args.longitude);

    let chart = sunpath_chart(&NoaaFetcher, &config, coords.latitude, coords.longitude)?;
    if args.json {
        println!("{}", chart.to_json()?);
        return Ok(());
    }

    let svg = render_svg(&chart, &SvgOptions::default())?;
    fs::write(&args.output, svg)?;
    info!(path = %args.output.display(), "wrote sunpath diagram");
    Ok(())
}
