//! Minimal SVG backend for [`ChartSpec`].
//!
//! Writes the markup by hand: scatter points coloured through a cyclic HSL
//! map, the month colorbar, hour labels, reference tracks, legend and axes.

use std::fmt::Write;

use crate::error::Result;
use crate::types::{Axis, ChartSpec, ColorScale, HAlign, VAlign};

const TICK_LENGTH_PX: f64 = 5.0;
const TICK_FONT: f64 = 11.0;
const AXIS_FONT: f64 = 13.0;
const LABEL_FONT: f64 = 11.0;
const LEGEND_ENTRY_PX: f64 = 90.0;
const COLORBAR_WIDTH_PX: f64 = 14.0;
const LINE_PALETTE: [&str; 6] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 400.0,
        }
    }
}

struct PlotLayout {
    data_left: f64,
    data_right: f64,
    data_top: f64,
    data_bottom: f64,
}

impl PlotLayout {
    fn new(options: &SvgOptions) -> Self {
        Self {
            data_left: 70.0,
            data_right: options.width - 130.0,
            data_top: 50.0,
            data_bottom: options.height - 50.0,
        }
    }

    fn data_width(&self) -> f64 {
        self.data_right - self.data_left
    }

    fn data_height(&self) -> f64 {
        self.data_bottom - self.data_top
    }

    fn project_x(&self, value: f64, axis: &Axis) -> f64 {
        self.data_left + fraction(value, axis.min, axis.max) * self.data_width()
    }

    fn project_y(&self, value: f64, axis: &Axis) -> f64 {
        self.data_bottom - fraction(value, axis.min, axis.max) * self.data_height()
    }
}

fn fraction(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    }
}

/// Colour for `value` on `scale`. Cyclic scales walk the whole hue circle so
/// both ends meet; linear scales run blue to red.
pub fn scale_color(scale: &ColorScale, value: f64) -> String {
    let t = scale.fraction(value);
    let (hue, lightness) = if scale.cyclic {
        (360.0 * t, 45.0 + 15.0 * (std::f64::consts::TAU * t).cos())
    } else {
        (240.0 * (1.0 - t), 50.0)
    };
    format!("hsl({hue:.1},70%,{lightness:.1}%)")
}

pub fn auto_ticks(min: f64, max: f64) -> Vec<f64> {
    let span = max - min;
    if span <= 0.0 || !span.is_finite() {
        return vec![min];
    }
    let magnitude = 10f64.powf(span.log10().floor() - 1.0);
    let step = [1.0, 2.0, 2.5, 5.0, 10.0, 20.0, 25.0, 50.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|step| span / step <= 10.0)
        .unwrap_or(span);
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last).map(|i| i as f64 * step).collect()
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn anchor(align: HAlign) -> &'static str {
    match align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    }
}

fn baseline(align: VAlign) -> &'static str {
    match align {
        VAlign::Top => "hanging",
        VAlign::Center => "middle",
        VAlign::Bottom => "auto",
    }
}

pub fn render_svg(chart: &ChartSpec, options: &SvgOptions) -> Result<String> {
    let layout = PlotLayout::new(options);
    let mut svg = String::new();
    writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
        w = options.width,
        h = options.height
    )?;
    writeln!(svg, r#"<title>{}</title>"#, escape(&chart.title))?;
    writeln!(
        svg,
        r#"<rect width="{}" height="{}" fill="white"/>"#,
        options.width, options.height
    )?;
    writeln!(
        svg,
        r#"<defs><clipPath id="plot-area"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath></defs>"#,
        layout.data_left,
        layout.data_top,
        layout.data_width(),
        layout.data_height()
    )?;

    draw_scatter(&mut svg, chart, &layout)?;
    draw_lines(&mut svg, chart, &layout)?;
    draw_annotations(&mut svg, chart, &layout)?;
    draw_axes(&mut svg, chart, &layout)?;
    draw_colorbar(&mut svg, chart, &layout)?;
    draw_legend(&mut svg, chart, options)?;

    writeln!(svg, "</svg>")?;
    Ok(svg)
}

fn draw_scatter(svg: &mut String, chart: &ChartSpec, layout: &PlotLayout) -> Result<()> {
    let scatter = &chart.scatter;
    let radius = scatter.marker_size.sqrt();
    writeln!(svg, r#"<g clip-path="url(#plot-area)">"#)?;
    for (&(az, el), &value) in scatter.points.iter().zip(&scatter.color_values) {
        writeln!(
            svg,
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"/>"#,
            layout.project_x(az, &chart.x_axis),
            layout.project_y(el, &chart.y_axis),
            radius,
            scale_color(&scatter.color_scale, value)
        )?;
    }
    writeln!(svg, "</g>")?;
    Ok(())
}

fn draw_lines(svg: &mut String, chart: &ChartSpec, layout: &PlotLayout) -> Result<()> {
    writeln!(svg, r#"<g clip-path="url(#plot-area)" fill="none" stroke-width="1.5">"#)?;
    for (i, line) in chart.lines.iter().enumerate() {
        let points: Vec<String> = line
            .points
            .iter()
            .map(|&(az, el)| {
                format!(
                    "{:.2},{:.2}",
                    layout.project_x(az, &chart.x_axis),
                    layout.project_y(el, &chart.y_axis)
                )
            })
            .collect();
        writeln!(
            svg,
            r#"<polyline stroke="{}" points="{}"/>"#,
            LINE_PALETTE[i % LINE_PALETTE.len()],
            points.join(" ")
        )?;
    }
    writeln!(svg, "</g>")?;
    Ok(())
}

fn draw_annotations(svg: &mut String, chart: &ChartSpec, layout: &PlotLayout) -> Result<()> {
    for note in &chart.annotations {
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}" dominant-baseline="{}">{}</text>"#,
            layout.project_x(note.x, &chart.x_axis),
            layout.project_y(note.y, &chart.y_axis),
            LABEL_FONT,
            anchor(note.h_align),
            baseline(note.v_align),
            escape(&note.text)
        )?;
    }
    Ok(())
}

fn draw_axes(svg: &mut String, chart: &ChartSpec, layout: &PlotLayout) -> Result<()> {
    writeln!(
        svg,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="black" stroke-width="1"/>"#,
        layout.data_left,
        layout.data_top,
        layout.data_width(),
        layout.data_height()
    )?;

    let x_ticks = chart
        .x_axis
        .ticks
        .clone()
        .unwrap_or_else(|| auto_ticks(chart.x_axis.min, chart.x_axis.max));
    for value in x_ticks {
        let x = layout.project_x(value, &chart.x_axis);
        let y2 = layout.data_bottom + TICK_LENGTH_PX;
        writeln!(
            svg,
            r#"<line x1="{x:.2}" y1="{}" x2="{x:.2}" y2="{y2}" stroke="black"/>"#,
            layout.data_bottom
        )?;
        writeln!(
            svg,
            r#"<text x="{x:.2}" y="{}" font-size="{TICK_FONT}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
            y2 + 3.0,
            format_tick(value)
        )?;
    }

    let y_ticks = chart
        .y_axis
        .ticks
        .clone()
        .unwrap_or_else(|| auto_ticks(chart.y_axis.min, chart.y_axis.max));
    for value in y_ticks {
        let y = layout.project_y(value, &chart.y_axis);
        let x2 = layout.data_left - TICK_LENGTH_PX;
        writeln!(
            svg,
            r#"<line x1="{}" y1="{y:.2}" x2="{x2}" y2="{y:.2}" stroke="black"/>"#,
            layout.data_left
        )?;
        writeln!(
            svg,
            r#"<text x="{}" y="{y:.2}" font-size="{TICK_FONT}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
            x2 - 3.0,
            format_tick(value)
        )?;
    }

    let x_center = layout.data_left + layout.data_width() / 2.0;
    let y_center = layout.data_top + layout.data_height() / 2.0;
    writeln!(
        svg,
        r#"<text x="{x_center}" y="{}" font-size="{AXIS_FONT}" text-anchor="middle" dominant-baseline="hanging">{}</text>"#,
        layout.data_bottom + 4.0 * TICK_LENGTH_PX,
        escape(&chart.x_axis.title)
    )?;
    let y_title_x = layout.data_left - 9.0 * TICK_LENGTH_PX;
    writeln!(
        svg,
        r#"<text x="{y_title_x}" y="{y_center}" font-size="{AXIS_FONT}" text-anchor="middle" transform="rotate(-90 {y_title_x} {y_center})">{}</text>"#,
        escape(&chart.y_axis.title)
    )?;
    Ok(())
}

fn draw_colorbar(svg: &mut String, chart: &ChartSpec, layout: &PlotLayout) -> Result<()> {
    let bar = &chart.colorbar;
    let scale = &bar.scale;
    let left = layout.data_right + 25.0;
    let right = left + COLORBAR_WIDTH_PX;
    let project = |value: f64| layout.data_bottom - scale.fraction(value) * layout.data_height();

    let steps = (scale.max - scale.min).max(1.0).ceil() as usize;
    let band = layout.data_height() / steps as f64;
    for i in 0..steps {
        let value = scale.min + i as f64;
        writeln!(
            svg,
            r#"<rect x="{left}" y="{:.2}" width="{COLORBAR_WIDTH_PX}" height="{:.2}" fill="{}"/>"#,
            project(value) - band,
            band + 0.5,
            scale_color(scale, value)
        )?;
    }
    writeln!(
        svg,
        r#"<rect x="{left}" y="{}" width="{COLORBAR_WIDTH_PX}" height="{}" fill="none" stroke="black" stroke-width="0.8"/>"#,
        layout.data_top,
        layout.data_height()
    )?;

    for tick in bar.major_ticks.iter().chain(&bar.minor_ticks) {
        let y = project(tick.position);
        if tick.mark_width > 0.0 {
            writeln!(
                svg,
                r#"<line x1="{right}" y1="{y:.2}" x2="{}" y2="{y:.2}" stroke="black" stroke-width="{}"/>"#,
                right + TICK_LENGTH_PX,
                tick.mark_width
            )?;
        }
        if !tick.label.is_empty() {
            writeln!(
                svg,
                r#"<text x="{}" y="{y:.2}" font-size="{TICK_FONT}" dominant-baseline="middle">{}</text>"#,
                right + TICK_LENGTH_PX + 3.0,
                escape(&tick.label)
            )?;
        }
    }
    Ok(())
}

fn draw_legend(svg: &mut String, chart: &ChartSpec, options: &SvgOptions) -> Result<()> {
    let legend = &chart.legend;
    let columns = legend.columns();
    if columns == 0 {
        return Ok(());
    }
    let center_x = options.width * legend.anchor.0;
    let top = options.height * (1.0 - legend.anchor.1) + 8.0;
    let left = center_x - columns as f64 * LEGEND_ENTRY_PX / 2.0;
    for (i, entry) in legend.entries.iter().enumerate() {
        let x = left + (i % columns) as f64 * LEGEND_ENTRY_PX;
        let y = top + (i / columns) as f64 * 16.0 + 6.0;
        writeln!(
            svg,
            r#"<line x1="{x:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{}" stroke-width="1.5"/>"#,
            x + 20.0,
            LINE_PALETTE[i % LINE_PALETTE.len()]
        )?;
        writeln!(
            svg,
            r#"<text x="{:.2}" y="{y:.2}" font-size="{LABEL_FONT}" dominant-baseline="middle">{}</text>"#,
            x + 25.0,
            escape(entry)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_ticks_for_elevation_axis() {
        let ticks = auto_ticks(0.0, 90.0);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&90.0));
        assert_eq!(ticks.len(), 10);
    }

    #[test]
    fn cyclic_scale_wraps() {
        let scale = ColorScale {
            min: 1.0,
            max: 365.0,
            cyclic: true,
        };
        assert_eq!(scale_color(&scale, 1.0), "hsl(0.0,70%,60.0%)");
        assert_eq!(scale_color(&scale, 365.0), "hsl(360.0,70%,60.0%)");
    }

    #[test]
    fn escape_markup() {
        assert_eq!(escape("a<b & c>"), "a&lt;b &amp; c&gt;");
    }
}
