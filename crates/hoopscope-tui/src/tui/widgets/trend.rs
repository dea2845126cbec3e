// Trend widget: per-game points as a line chart, one series per player.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType};
use ratatui::Frame;

use hoopscope_core::charts::{AxisValue, Figure};

use super::{legend_line, series_color};

/// Vertical headroom above and below the plotted values.
const Y_PADDING: f64 = 1.0;

/// Render the trend figure into the given area.
pub fn render(frame: &mut Frame, area: Rect, figure: &Figure) {
    let series: Vec<Vec<(f64, f64)>> = figure.traces.iter().map(|t| points(&t.x, &t.y)).collect();
    let datasets: Vec<Dataset> = figure
        .traces
        .iter()
        .zip(&series)
        .enumerate()
        .map(|(i, (trace, data))| {
            Dataset::default()
                .name(trace.name.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(i)))
                .data(data)
        })
        .collect();

    let [x_min, x_max] = x_bounds(&series);
    let [y_min, y_max] = y_bounds(figure);
    let axis_style = Style::default().fg(Color::Gray);

    let x_axis = Axis::default()
        .title(figure.x_axis_title.clone().unwrap_or_default())
        .style(axis_style)
        .bounds([x_min, x_max])
        .labels(x_labels(x_min, x_max));
    let y_axis = Axis::default()
        .title(figure.y_axis_title.clone().unwrap_or_default())
        .style(axis_style)
        .bounds([y_min, y_max])
        .labels([
            Span::raw(format!("{y_min:.0}")),
            Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
            Span::raw(format!("{y_max:.0}")),
        ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(figure.title.clone())
        .title_bottom(legend_line(
            figure.legend_title.as_deref(),
            figure.traces.iter().map(|t| t.name.as_str()),
        ));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis)
        // The block carries the legend.
        .legend_position(None);
    frame.render_widget(chart, area);
}

/// Pair numeric x values with y values. Category x values use their index.
fn points(x: &[AxisValue], y: &[f64]) -> Vec<(f64, f64)> {
    x.iter()
        .zip(y)
        .enumerate()
        .map(|(i, (xv, yv))| {
            let xf = match xv {
                AxisValue::Number(n) => *n,
                AxisValue::Category(_) => (i + 1) as f64,
            };
            (xf, *yv)
        })
        .collect()
}

fn x_bounds(series: &[Vec<(f64, f64)>]) -> [f64; 2] {
    let xs = series.iter().flatten().map(|(x, _)| *x);
    let min = xs.clone().fold(f64::INFINITY, f64::min);
    let max = xs.fold(f64::NEG_INFINITY, f64::max);
    if min.is_finite() && max > min {
        [min, max]
    } else {
        [1.0, 10.0]
    }
}

fn y_bounds(figure: &Figure) -> [f64; 2] {
    let (min, max) = (figure.min_value(), figure.max_value());
    if min.is_finite() && max.is_finite() && max >= min {
        [min - Y_PADDING, max + Y_PADDING]
    } else {
        [0.0, 1.0]
    }
}

/// First, middle and last game numbers.
fn x_labels(min: f64, max: f64) -> [Span<'static>; 3] {
    let mid = ((min + max) / 2.0).floor();
    [
        Span::raw(format!("{min:.0}")),
        Span::raw(format!("{mid:.0}")),
        Span::raw(format!("{max:.0}")),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
