//! Hand-rolled bar chart for the daily claims series.
//!
//! The renderer is a pure function over a [`Surface`], so the geometry is
//! testable without a browser; the canvas-backed surface lives in
//! [`canvas`].

pub mod canvas;

use shared::models::DailyStat;

/// Inset around the plot panel on every side, in pixels.
const PADDING: f64 = 40.0;
/// Days shown, counted from the end of the series.
const WINDOW: usize = 14;
/// Gridline steps; lines and tick labels run from index 0 (top) to
/// `GRID_STEPS` (bottom) inclusive.
const GRID_STEPS: u32 = 5;
/// Zero-valued bars still get a sliver so the day reads as present.
const MIN_BAR_HEIGHT: f64 = 2.0;

const PANEL_COLOR: &str = "#f9fafb";
const GRID_COLOR: &str = "#e5e7eb";
const BAR_COLOR: &str = "#3b82f6";
const BAR_COLOR_ZERO: &str = "#d1d5db";
const VALUE_COLOR: &str = "#374151";
const TICK_COLOR: &str = "#6b7280";
const VALUE_FONT: &str = "12px Arial";
const TICK_FONT: &str = "11px Arial";

/// Horizontal anchoring for [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Minimal 2D raster operations the renderer needs. Implemented by the
/// browser canvas and by a recording surface in tests.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, line_width: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str, align: TextAlign);
}

/// Paint the claims bar chart onto `surface`, rendering the last [`WINDOW`]
/// points of `stats` in their original chronological order. An empty series
/// issues no draw calls at all; an all-zero series is floored to `max = 1`
/// so bar heights stay defined.
pub fn draw_claims_chart(surface: &mut dyn Surface, width: f64, height: f64, stats: &[DailyStat]) {
    if stats.is_empty() {
        return;
    }

    let window = &stats[stats.len().saturating_sub(WINDOW)..];
    let max_value = f64::from(window.iter().map(|stat| stat.claimed).max().unwrap_or(0).max(1));

    let chart_width = width - PADDING * 2.0;
    let chart_height = height - PADDING * 2.0;
    let grid_steps = f64::from(GRID_STEPS);

    surface.clear(width, height);
    surface.fill_rect(PADDING, PADDING, chart_width, chart_height, PANEL_COLOR);

    for step in 0..=GRID_STEPS {
        let y = PADDING + chart_height / grid_steps * f64::from(step);
        surface.stroke_line(PADDING, y, PADDING + chart_width, y, GRID_COLOR, 1.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let slot = chart_width / window.len() as f64;
    let bar_width = slot * 0.6;
    let bar_spacing = slot * 0.4;

    for (index, stat) in window.iter().enumerate() {
        let bar_height = (f64::from(stat.claimed) / max_value * chart_height).max(MIN_BAR_HEIGHT);
        #[allow(clippy::cast_precision_loss)]
        let x = PADDING + index as f64 * (bar_width + bar_spacing) + bar_spacing / 2.0;
        let y = PADDING + chart_height - bar_height;
        let color = if stat.claimed > 0 {
            BAR_COLOR
        } else {
            BAR_COLOR_ZERO
        };
        surface.fill_rect(x, y, bar_width, bar_height, color);

        if stat.claimed > 0 {
            surface.fill_text(
                &stat.claimed.to_string(),
                x + bar_width / 2.0,
                y - 5.0,
                VALUE_FONT,
                VALUE_COLOR,
                TextAlign::Center,
            );
        }
    }

    for step in 0..=GRID_STEPS {
        let value = (max_value / grid_steps * f64::from(GRID_STEPS - step)).round();
        let y = PADDING + chart_height / grid_steps * f64::from(step) + 4.0;
        surface.fill_text(
            &format!("{value}"),
            PADDING - 8.0,
            y,
            TICK_FONT,
            TICK_COLOR,
            TextAlign::Right,
        );
    }
}
