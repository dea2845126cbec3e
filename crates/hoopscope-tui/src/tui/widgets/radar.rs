// Radar widget: polar skill profile drawn on a braille canvas.
//
// One spoke per stat label, starting at 12 o'clock and going clockwise. All
// spokes share one radial axis from 0 to the largest value shown, with grid
// rings at half and full scale.

use std::f64::consts::{FRAC_PI_2, TAU};

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use hoopscope_core::charts::{AxisValue, Figure};

use super::{legend_line, series_color};

/// Radius at which spoke labels are printed (unit circle = full scale).
const LABEL_RADIUS: f64 = 1.15;

/// Canvas half-extent along the shorter screen axis.
const EXTENT: f64 = 1.35;

/// Render the radar figure into the given area.
pub fn render(frame: &mut Frame, area: Rect, figure: &Figure) {
    let labels = spoke_labels(figure);
    let radial_max = radial_max(figure);
    let polygons: Vec<Vec<(f64, f64)>> = figure
        .traces
        .iter()
        .map(|t| polygon(&t.y, radial_max))
        .collect();
    let (x_bounds, y_bounds) = canvas_bounds(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(figure.title.clone())
        .title_bottom(legend_line(
            figure.legend_title.as_deref(),
            figure.traces.iter().map(|t| t.name.as_str()),
        ));

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            draw_grid(ctx, labels.len());
            for (i, points) in polygons.iter().enumerate() {
                draw_polygon(ctx, points, series_color(i));
            }
            ctx.layer();
            for (i, label) in labels.iter().enumerate() {
                let (x, y) = spoke_point(i, labels.len(), LABEL_RADIUS);
                ctx.print(x, y, Span::styled(label.clone(), Style::default().fg(Color::Gray)));
            }
            ctx.print(
                0.02,
                1.0,
                Span::styled(format!("{radial_max:.0}"), Style::default().fg(Color::DarkGray)),
            );
        });
    frame.render_widget(canvas, area);
}

/// Category labels of the first trace (the stat names).
fn spoke_labels(figure: &Figure) -> Vec<String> {
    figure
        .traces
        .first()
        .map(|t| {
            t.x.iter()
                .map(|v| match v {
                    AxisValue::Category(s) => s.clone(),
                    AxisValue::Number(n) => format!("{n}"),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Full-scale value for the shared radial axis. Never zero.
fn radial_max(figure: &Figure) -> f64 {
    let max = figure.max_value();
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

/// Position of spoke `index` of `count` at `radius`.
fn spoke_point(index: usize, count: usize, radius: f64) -> (f64, f64) {
    let angle = FRAC_PI_2 - TAU * index as f64 / count.max(1) as f64;
    (radius * angle.cos(), radius * angle.sin())
}

/// Vertices of a trace, scaled so `radial_max` lands on the unit circle.
fn polygon(values: &[f64], radial_max: f64) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| spoke_point(i, values.len(), (v / radial_max).max(0.0)))
        .collect()
}

/// Widen the longer axis so a circle stays round on 1:2 terminal cells.
fn canvas_bounds(area: Rect) -> ([f64; 2], [f64; 2]) {
    let width = f64::from(area.width.saturating_sub(2).max(1));
    let height = f64::from(area.height.saturating_sub(2).max(1));
    // Terminal cells are about twice as tall as they are wide.
    let aspect = width / (2.0 * height);
    if aspect >= 1.0 {
        ([-EXTENT * aspect, EXTENT * aspect], [-EXTENT, EXTENT])
    } else {
        ([-EXTENT, EXTENT], [-EXTENT / aspect, EXTENT / aspect])
    }
}

fn draw_grid(ctx: &mut Context, spokes: usize) {
    for i in 0..spokes {
        let (x, y) = spoke_point(i, spokes, 1.0);
        ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, Color::DarkGray));
    }
    for ring in [0.5, 1.0] {
        let points: Vec<(f64, f64)> = (0..spokes).map(|i| spoke_point(i, spokes, ring)).collect();
        draw_polygon(ctx, &points, Color::DarkGray);
    }
}

/// Closed outline through `points`, with the vertices marked.
fn draw_polygon(ctx: &mut Context, points: &[(f64, f64)], color: Color) {
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
    ctx.draw(&Points {
        coords: points,
        color,
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
