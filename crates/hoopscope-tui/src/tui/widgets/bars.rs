// Grouped bar widget: one group per stat label, one bar per player.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use hoopscope_core::charts::{AxisValue, Figure};

use super::{legend_line, series_color};

/// Bars carry one decimal of precision as integer tenths.
const SCALE: f64 = 10.0;

const GROUP_GAP: u16 = 2;

/// Render the grouped bar figure into the given area.
pub fn render(frame: &mut Frame, area: Rect, figure: &Figure) {
    let groups = bar_groups(figure);
    let width = bar_width(area, groups.len(), figure.traces.len());

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(figure.title.clone())
        .title_bottom(legend_line(
            figure.legend_title.as_deref(),
            figure.traces.iter().map(|t| t.name.as_str()),
        ));
    if let Some(unit) = &figure.y_axis_title {
        block = block.title(Line::from(format!(" {unit} ")).right_aligned());
    }

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(width)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .value_style(Style::default().fg(Color::Black))
        .label_style(Style::default().fg(Color::Gray));
    for group in groups {
        chart = chart.data(group);
    }
    frame.render_widget(chart, area);
}

/// One group per x category, holding each trace's value at that index.
fn bar_groups(figure: &Figure) -> Vec<BarGroup<'static>> {
    let Some(first) = figure.traces.first() else {
        return Vec::new();
    };

    first
        .x
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let bars: Vec<Bar<'static>> = figure
                .traces
                .iter()
                .enumerate()
                .filter_map(|(t, trace)| trace.y.get(i).map(|v| stat_bar(*v, series_color(t))))
                .collect();
            BarGroup::default()
                .label(Line::from(category_label(category)))
                .bars(&bars)
        })
        .collect()
}

fn stat_bar(value: f64, color: Color) -> Bar<'static> {
    Bar::default()
        .value(scaled(value))
        .text_value(format!("{value:.1}"))
        .style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
}

/// Integer bar height in tenths; negatives clamp to zero.
fn scaled(value: f64) -> u64 {
    (value.max(0.0) * SCALE).round() as u64
}

fn category_label(value: &AxisValue) -> String {
    match value {
        AxisValue::Category(s) => s.clone(),
        AxisValue::Number(n) => format!("{n}"),
    }
}

/// Widest bar that still fits every group side by side.
fn bar_width(area: Rect, groups: usize, bars_per_group: usize) -> u16 {
    if groups == 0 || bars_per_group == 0 {
        return 1;
    }
    let inner = usize::from(area.width.saturating_sub(2));
    let per_group = (inner / groups).saturating_sub(usize::from(GROUP_GAP));
    let width = per_group / bars_per_group;
    width.clamp(1, 8) as u16
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
