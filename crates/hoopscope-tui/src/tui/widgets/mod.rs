// TUI widget modules for each dashboard panel.

pub mod bars;
pub mod radar;
pub mod selectors;
pub mod status_bar;
pub mod trend;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Border style for a panel, highlighted when it has keyboard focus.
pub fn focused_border_style(focused: bool, base: Style) -> Style {
    if focused {
        base.fg(Color::Cyan)
    } else {
        base
    }
}

/// Color of the n-th player trace. Player A is index 0.
pub fn series_color(index: usize) -> Color {
    match index {
        0 => Color::LightBlue,
        1 => Color::LightRed,
        _ => Color::Gray,
    }
}

/// Legend line: an optional title, then a colored marker and name per trace.
pub fn legend_line<'a>(
    title: Option<&str>,
    names: impl IntoIterator<Item = &'a str>,
) -> Line<'static> {
    let mut spans = Vec::new();
    if let Some(title) = title {
        spans.push(Span::styled(
            format!(" {title}:"),
            Style::default().fg(Color::Gray),
        ));
    }
    for (i, name) in names.into_iter().enumerate() {
        spans.push(Span::styled(" ■ ", Style::default().fg(series_color(i))));
        spans.push(Span::raw(format!("{name} ")));
    }
    Line::from(spans)
}
