//! HTML chart output for benchmark timings
//!
//! Renders one figure with two side-by-side SVG panels: a pie chart of each
//! part's share of the total and a bar chart of absolute times in
//! milliseconds. The document is self-contained (inline CSS and SVG) so it
//! can be opened directly in a browser.

use crate::error::{Result, StatsError};
use crate::record::TimingSeries;
use std::f64::consts::PI;
use std::fmt::Write;

/// Wedge and bar colors, cycled in record order
const PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Angle of the first wedge edge, in degrees counter-clockwise from 3 o'clock
pub const PIE_START_ANGLE: f64 = 90.0;

/// Rotation of the bar chart's x tick labels, in degrees
pub const TICK_LABEL_ROTATION: f64 = 45.0;

const PANEL_WIDTH: f64 = 500.0;
const PANEL_HEIGHT: f64 = 500.0;

// Bar chart plot area inside the panel
const PLOT_LEFT: f64 = 70.0;
const PLOT_RIGHT: f64 = 20.0;
const PLOT_TOP: f64 = 50.0;
const PLOT_BOTTOM: f64 = 80.0;
const MAX_TICKS: f64 = 10.0;

/// Two-panel chart figure
#[derive(Debug)]
pub struct ChartOutput {
    title: String,
    include_summary: bool,
}

impl ChartOutput {
    /// Create a new chart formatter
    pub fn new(title: impl Into<String>, include_summary: bool) -> Self {
        Self {
            title: title.into(),
            include_summary,
        }
    }

    /// Escape HTML special characters
    fn escape_html(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;")
    }

    fn color(index: usize) -> &'static str {
        PALETTE[index % PALETTE.len()]
    }

    /// Generate embedded CSS styles
    fn generate_styles() -> &'static str {
        r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 20px;
            background-color: #f5f5f5;
        }
        h1, h2 {
            color: #333;
        }
        .figure {
            display: flex;
            flex-wrap: wrap;
            gap: 20px;
        }
        .panel {
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
        }
        .panel text {
            font-size: 12px;
            fill: #333;
        }
        .panel .title {
            font-size: 16px;
            font-weight: bold;
        }
        .panel .pct {
            fill: white;
            font-weight: bold;
        }
        .axis {
            stroke: #333;
            stroke-width: 1;
        }
        .grid {
            stroke: #ddd;
            stroke-width: 1;
        }
        table {
            border-collapse: collapse;
            background-color: white;
            box-shadow: 0 1px 3px rgba(0,0,0,0.1);
            margin-top: 20px;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 6px 12px;
            text-align: right;
        }
        th {
            background-color: #4a90d9;
            color: white;
        }
        .label {
            font-family: monospace;
            text-align: left;
        }
        .footer {
            margin-top: 20px;
            font-size: 0.8em;
            color: #888;
            text-align: center;
        }
        "#
    }

    /// Point on a circle, angle in degrees counter-clockwise from 3 o'clock
    fn polar(cx: f64, cy: f64, radius: f64, degrees: f64) -> (f64, f64) {
        let rad = degrees * PI / 180.0;
        // SVG y grows downward
        (cx + radius * rad.cos(), cy - radius * rad.sin())
    }

    /// Render the pie chart panel
    ///
    /// Wedges run counter-clockwise from [`PIE_START_ANGLE`], each labeled
    /// with its record label outside and its share (one decimal) inside.
    pub fn render_pie(&self, series: &TimingSeries) -> String {
        let cx = PANEL_WIDTH / 2.0;
        let cy = PANEL_HEIGHT / 2.0 + 15.0;
        let radius = 170.0;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg class="panel" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = PANEL_WIDTH,
            h = PANEL_HEIGHT
        );
        let _ = writeln!(
            svg,
            r#"  <text class="title" x="{:.2}" y="28" text-anchor="middle">Relative time per part</text>"#,
            cx
        );

        let mut angle = PIE_START_ANGLE;
        for (index, ((label, ms), share)) in series.iter().zip(series.shares()).enumerate() {
            let sweep = share / 100.0 * 360.0;
            let color = Self::color(index);

            if sweep >= 360.0 - 1e-9 {
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}"><title>{}: {} ms</title></circle>"#,
                    cx,
                    cy,
                    radius,
                    color,
                    Self::escape_html(label),
                    ms
                );
            } else if sweep > 0.0 {
                let (x0, y0) = Self::polar(cx, cy, radius, angle);
                let (x1, y1) = Self::polar(cx, cy, radius, angle + sweep);
                let large_arc = if sweep > 180.0 { 1 } else { 0 };
                // sweep-flag 0: counter-clockwise on screen
                let _ = writeln!(
                    svg,
                    r#"  <path d="M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 0 {:.2} {:.2} Z" fill="{}" stroke="white"><title>{}: {} ms</title></path>"#,
                    cx,
                    cy,
                    x0,
                    y0,
                    radius,
                    radius,
                    large_arc,
                    x1,
                    y1,
                    color,
                    Self::escape_html(label),
                    ms
                );
            }

            let mid = angle + sweep / 2.0;
            let (lx, ly) = Self::polar(cx, cy, radius * 1.1, mid);
            let anchor = if lx < cx { "end" } else { "start" };
            let _ = writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
                lx,
                ly,
                anchor,
                Self::escape_html(label)
            );

            let (px, py) = Self::polar(cx, cy, radius * 0.6, mid);
            let _ = writeln!(
                svg,
                r#"  <text class="pct" x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle">{:.1}%</text>"#,
                px, py, share
            );

            angle += sweep;
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Round a raw tick spacing up to 1, 2 or 5 times a power of ten
    fn nice_step(raw: f64) -> f64 {
        if raw <= 0.0 || !raw.is_finite() {
            return 1.0;
        }
        let magnitude = 10f64.powf(raw.log10().floor());
        let fraction = raw / magnitude;
        let nice = if fraction <= 1.0 {
            1.0
        } else if fraction <= 2.0 {
            2.0
        } else if fraction <= 5.0 {
            5.0
        } else {
            10.0
        };
        nice * magnitude
    }

    /// Format a tick value without trailing noise
    fn format_tick(value: f64, step: f64) -> String {
        let decimals = if step >= 1.0 {
            0
        } else {
            (-step.log10().floor()) as usize
        };
        format!("{:.*}", decimals, value)
    }

    /// Render the bar chart panel
    ///
    /// One bar per record in series order, y axis in milliseconds, x tick
    /// labels rotated by [`TICK_LABEL_ROTATION`].
    pub fn render_bar(&self, series: &TimingSeries) -> String {
        let plot_width = PANEL_WIDTH - PLOT_LEFT - PLOT_RIGHT;
        let plot_height = PANEL_HEIGHT - PLOT_TOP - PLOT_BOTTOM;
        let baseline = PLOT_TOP + plot_height;

        let step = Self::nice_step(series.max_ms() / 5.0);
        // at most 5 for finite data; the cap bounds the loop for inf
        let ticks = (series.max_ms() / step).ceil().clamp(1.0, MAX_TICKS) as usize;
        let y_max = step * ticks as f64;
        let scale = |ms: f64| plot_height * ms / y_max;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg class="panel" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = PANEL_WIDTH,
            h = PANEL_HEIGHT
        );
        let _ = writeln!(
            svg,
            r#"  <text class="title" x="{:.2}" y="28" text-anchor="middle">Absolute time per part</text>"#,
            PLOT_LEFT + plot_width / 2.0
        );

        for tick in 0..=ticks {
            let value = step * tick as f64;
            let y = baseline - scale(value);
            let _ = writeln!(
                svg,
                r#"  <line class="grid" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                PLOT_LEFT,
                y,
                PLOT_LEFT + plot_width,
                y
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" text-anchor="end" dominant-baseline="middle">{}</text>"#,
                PLOT_LEFT - 6.0,
                y,
                Self::format_tick(value, step)
            );
        }

        let slot = plot_width / series.len().max(1) as f64;
        for (index, (label, ms)) in series.iter().enumerate() {
            let height = scale(ms);
            let x = PLOT_LEFT + slot * index as f64 + slot * 0.1;
            let center = x + slot * 0.4;
            let _ = writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"><title>{}: {} ms</title></rect>"#,
                x,
                baseline - height,
                slot * 0.8,
                height,
                Self::color(0),
                Self::escape_html(label),
                ms
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{cx:.2}" y="{ty:.2}" text-anchor="end" transform="rotate(-{rot} {cx:.2} {ty:.2})">{label}</text>"#,
                cx = center,
                ty = baseline + 14.0,
                rot = TICK_LABEL_ROTATION,
                label = Self::escape_html(label)
            );
        }

        let _ = writeln!(
            svg,
            r#"  <line class="axis" x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}"/>"#,
            l = PLOT_LEFT,
            t = PLOT_TOP,
            b = baseline
        );
        let _ = writeln!(
            svg,
            r#"  <line class="axis" x1="{:.2}" y1="{b:.2}" x2="{:.2}" y2="{b:.2}"/>"#,
            PLOT_LEFT,
            PLOT_LEFT + plot_width,
            b = baseline
        );
        let _ = writeln!(
            svg,
            r#"  <text x="18" y="{y:.2}" text-anchor="middle" transform="rotate(-90 18 {y:.2})">ms</text>"#,
            y = PLOT_TOP + plot_height / 2.0
        );

        svg.push_str("</svg>\n");
        svg
    }

    /// Render the per-record summary table
    fn render_summary(&self, series: &TimingSeries) -> String {
        let mut html = String::new();

        html.push_str("    <h2>Summary</h2>\n");
        html.push_str("    <table>\n");
        html.push_str("        <tr><th>part</th><th>ms</th><th>% time</th></tr>\n");

        for ((label, ms), share) in series.iter().zip(series.shares()) {
            let _ = writeln!(
                html,
                r#"        <tr><td class="label">{}</td><td>{:.4}</td><td>{:.1}</td></tr>"#,
                Self::escape_html(label),
                ms,
                share
            );
        }

        let _ = writeln!(
            html,
            r#"        <tr><th class="label">total</th><th>{:.4}</th><th>100.0</th></tr>"#,
            series.total_ms()
        );
        html.push_str("    </table>\n");

        html
    }

    /// Generate the complete HTML document
    ///
    /// Fails with [`StatsError::EmptyInput`] when there is nothing to chart
    /// (no records, or a total of zero milliseconds) and with
    /// [`StatsError::NonFiniteTotal`] when the values sum past `f64::MAX`.
    pub fn to_html(&self, series: &TimingSeries) -> Result<String> {
        let total = series.total_ms();
        if !total.is_finite() {
            return Err(StatsError::NonFiniteTotal { total });
        }
        if series.is_empty() || total <= 0.0 {
            return Err(StatsError::EmptyInput);
        }

        let mut html = String::new();

        html.push_str("<!DOCTYPE html>\n");
        html.push_str("<html lang=\"en\">\n");

        html.push_str("<head>\n");
        html.push_str("    <meta charset=\"UTF-8\">\n");
        html.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        let _ = writeln!(html, "    <title>{}</title>", Self::escape_html(&self.title));
        html.push_str("    <style>");
        html.push_str(Self::generate_styles());
        html.push_str("</style>\n");
        html.push_str("</head>\n");

        html.push_str("<body>\n");
        let _ = writeln!(html, "    <h1>{}</h1>", Self::escape_html(&self.title));

        html.push_str("    <div class=\"figure\">\n");
        html.push_str(&self.render_pie(series));
        html.push_str(&self.render_bar(series));
        html.push_str("    </div>\n");

        if self.include_summary {
            html.push_str(&self.render_summary(series));
        }

        html.push_str("    <div class=\"footer\">\n");
        html.push_str("        Generated by time-stats\n");
        html.push_str("    </div>\n");

        html.push_str("</body>\n");
        html.push_str("</html>\n");

        Ok(html)
    }
}
