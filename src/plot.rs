use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::bench::BenchResult;
use crate::data_gen::Category;
use crate::error::{BenchError, Result};

const PANEL_WIDTH: f64 = 700.0;
const PANEL_HEIGHT: f64 = 600.0;
const MARGIN_LEFT: f64 = 90.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const TICKS: usize = 5;

/// One chart: y values per result plus its labels.
struct Panel<'a> {
    title: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    y_of: fn(&BenchResult) -> f64,
}

const PANELS: [Panel<'static>; 2] = [
    Panel {
        title: "Tree Sort running time",
        x_label: "Array size",
        y_label: "Time (ms)",
        y_of: BenchResult::millis,
    },
    Panel {
        title: "Tree Sort complexity",
        x_label: "Array size",
        y_label: "Iterations",
        y_of: iterations_f64,
    },
];

fn iterations_f64(result: &BenchResult) -> f64 {
    result.iterations as f64
}

fn color(category: Category) -> &'static str {
    match category {
        Category::Random => "#1f77b4",
        Category::Sorted => "#ff7f0e",
        Category::ReverseSorted => "#2ca02c",
    }
}

/// Linear map from a data range onto a pixel range.
#[derive(Clone, Copy, Debug)]
struct Scale {
    lo: f64,
    hi: f64,
    px_lo: f64,
    px_hi: f64,
}

impl Scale {
    fn new(lo: f64, hi: f64, px_lo: f64, px_hi: f64) -> Self {
        // flat data still needs a non-empty range
        let (lo, hi) = if hi > lo { (lo, hi) } else { (lo - 1.0, lo + 1.0) };
        Self { lo, hi, px_lo, px_hi }
    }

    fn map(&self, v: f64) -> f64 {
        self.px_lo + (v - self.lo) / (self.hi - self.lo) * (self.px_hi - self.px_lo)
    }

    fn tick(&self, i: usize) -> f64 {
        self.lo + (self.hi - self.lo) * i as f64 / TICKS as f64
    }
}

fn format_tick(v: f64) -> String {
    if v.abs() >= 1000.0 || v.fract() == 0.0 {
        format!("{:.0}", v)
    } else if v.abs() >= 1.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.3}", v)
    }
}

fn render_panel(svg: &mut String, panel: &Panel<'_>, results: &[BenchResult], offset_x: f64) {
    let left = offset_x + MARGIN_LEFT;
    let right = offset_x + PANEL_WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = PANEL_HEIGHT - MARGIN_BOTTOM;

    let x_min = results.iter().map(|r| r.size as f64).fold(f64::INFINITY, f64::min);
    let x_max = results.iter().map(|r| r.size as f64).fold(f64::NEG_INFINITY, f64::max);
    let y_max = results.iter().map(panel.y_of).fold(0.0, f64::max);

    let xs = Scale::new(x_min, x_max, left, right);
    let ys = Scale::new(0.0, y_max, bottom, top);

    // grid and tick labels
    for i in 0..=TICKS {
        let xv = xs.tick(i);
        let x = xs.map(xv);
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
            bottom + 18.0,
            format_tick(xv)
        );

        let yv = ys.tick(i);
        let y = ys.map(yv);
        let _ = writeln!(
            svg,
            r##"<line x1="{left:.1}" y1="{y:.1}" x2="{right:.1}" y2="{y:.1}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end" font-size="12">{}</text>"#,
            left - 6.0,
            y + 4.0,
            format_tick(yv)
        );
    }

    // axes
    let _ = writeln!(
        svg,
        r#"<polyline points="{left:.1},{top:.1} {left:.1},{bottom:.1} {right:.1},{bottom:.1}" fill="none" stroke="black"/>"#
    );

    let mut legend_row = 0;
    for category in Category::ALL {
        let mut points: Vec<&BenchResult> = results.iter().filter(|r| r.category == category).collect();
        if points.is_empty() {
            continue;
        }
        points.sort_by_key(|r| r.size);

        let coords = points
            .iter()
            .map(|r| format!("{:.1},{:.1}", xs.map(r.size as f64), ys.map((panel.y_of)(r))))
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            svg,
            r#"<polyline points="{coords}" fill="none" stroke="{}" stroke-width="2"/>"#,
            color(category)
        );

        let ly = top + 15.0 + 20.0 * legend_row as f64;
        let _ = writeln!(
            svg,
            r#"<line x1="{:.1}" y1="{ly:.1}" x2="{:.1}" y2="{ly:.1}" stroke="{}" stroke-width="2"/>"#,
            left + 15.0,
            left + 40.0,
            color(category)
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="12">{category}</text>"#,
            left + 46.0,
            ly + 4.0
        );
        legend_row += 1;
    }

    let center_x = (left + right) / 2.0;
    let center_y = (top + bottom) / 2.0;
    let _ = writeln!(
        svg,
        r#"<text x="{center_x:.1}" y="{:.1}" text-anchor="middle" font-size="16">{}</text>"#,
        top - 18.0,
        panel.title
    );
    let _ = writeln!(
        svg,
        r#"<text x="{center_x:.1}" y="{:.1}" text-anchor="middle" font-size="13">{}</text>"#,
        bottom + 45.0,
        panel.x_label
    );
    let _ = writeln!(
        svg,
        r#"<text x="{x:.1}" y="{center_y:.1}" text-anchor="middle" font-size="13" transform="rotate(-90 {x:.1} {center_y:.1})">{}</text>"#,
        panel.y_label,
        x = offset_x + 22.0
    );
}

/// Renders the time and iteration charts side by side as one SVG document.
/// Returns `None` when there is nothing to plot.
pub fn render_svg(results: &[BenchResult]) -> Option<String> {
    if results.is_empty() {
        return None;
    }

    let width = PANEL_WIDTH * PANELS.len() as f64;
    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{PANEL_HEIGHT:.0}" viewBox="0 0 {width:.0} {PANEL_HEIGHT:.0}" font-family="sans-serif">"#
    );
    let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

    for (i, panel) in PANELS.iter().enumerate() {
        render_panel(&mut svg, panel, results, PANEL_WIDTH * i as f64);
    }

    svg.push_str("</svg>\n");
    Some(svg)
}

/// Writes both charts to `path`. Returns whether a file was written.
pub fn draw_plots(results: &[BenchResult], path: &Path) -> Result<bool> {
    let Some(svg) = render_svg(results) else {
        println!("No data to plot");
        return Ok(false);
    };

    fs::write(path, svg).map_err(|e| BenchError::io(path, e))?;
    info!(file = %path.display(), "charts written");
    Ok(true)
}
